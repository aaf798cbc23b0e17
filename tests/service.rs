use api_probe::models::{AppData, BotSettings};
use api_probe::{router, ApiProbe, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::path::PathBuf;

fn unwritable_data_path() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir()
        .join(format!("api_probe_missing_{}_{nanos}", std::process::id()))
        .join("state.json")
}

async fn spawn_service(data: AppData) -> (String, AppState) {
    let probe = ApiProbe::new(Client::new(), "http://127.0.0.1:9");
    let state = AppState::new(unwritable_data_path(), data, probe);
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), state)
}

#[tokio::test]
async fn latest_tweet_is_not_found_on_empty_store() {
    let (base_url, _state) = spawn_service(AppData::default()).await;
    let client = Client::new();

    let response = client
        .get(format!("{base_url}/api/latest-tweet"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "No tweet found." }));
}

#[tokio::test]
async fn add_quote_rolls_back_when_store_cannot_be_written() {
    let (base_url, state) = spawn_service(AppData::default()).await;
    let client = Client::new();

    let response = client
        .post(format!("{base_url}/api/add-quote"))
        .json(&json!({ "content": "Well done is better than well said.", "author": "Benjamin Franklin" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().is_some_and(|message| !message.is_empty()));
    assert!(body.get("message").is_none());

    assert!(state.data.lock().await.quotes.is_empty());

    let stats: Value = client
        .get(format!("{base_url}/api/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["total_quotes"], 0);

    let latest = client
        .get(format!("{base_url}/api/latest-tweet"))
        .send()
        .await
        .unwrap();
    assert_eq!(latest.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn settings_are_restored_when_store_cannot_be_written() {
    let previous = BotSettings {
        hashtags: vec!["quotes".to_string()],
        post_time: "07:50".to_string(),
        reply_messages: vec!["Thanks!".to_string()],
    };
    let (base_url, state) = spawn_service(AppData {
        quotes: Vec::new(),
        settings: Some(previous.clone()),
    })
    .await;
    let client = Client::new();

    let response = client
        .post(format!("{base_url}/api/settings"))
        .json(&json!({
            "hashtags": ["motivation"],
            "postTime": "09:15",
            "replyMessages": []
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(state.data.lock().await.settings, Some(previous));
}
