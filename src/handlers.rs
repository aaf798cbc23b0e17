use crate::errors::AppError;
use crate::models::{
    AddQuoteRequest, AddQuoteResponse, BotSettings, LatestQuoteResponse, ProbeSnapshot,
    QuoteRecord, SchedulerStatusResponse, SettingsResponse, StatsResponse,
};
use crate::state::AppState;
use crate::stats::{build_stats, scheduler_status};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use chrono::{NaiveTime, SecondsFormat, Utc};
use serde_json::json;
use tracing::{error, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.display.html()))
}

pub async fn run_probe(State(state): State<AppState>) -> Redirect {
    info!(base_url = state.probe.base_url(), "probe activated");
    // Not awaited: results land in the display log as each request settles.
    let _run = state.probe.activate(&state.display);
    Redirect::to("/")
}

pub async fn get_probe(State(state): State<AppState>) -> Json<ProbeSnapshot> {
    Json(ProbeSnapshot {
        settlements: state.display.settlements(),
        html: state.display.html(),
        fragments: state.display.fragments(),
    })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let data = state.data.lock().await;
    Json(build_stats(&data))
}

pub async fn add_quote(
    State(state): State<AppState>,
    Json(payload): Json<AddQuoteRequest>,
) -> Result<Json<AddQuoteResponse>, AppError> {
    let content = payload.content.trim();
    let author = payload.author.trim();
    if content.is_empty() || author.is_empty() {
        return Err(AppError::bad_request("content and author must not be empty"));
    }

    let record = QuoteRecord {
        content: content.to_string(),
        author: author.to_string(),
        created_at: Utc::now(),
    };

    let mut data = state.data.lock().await;
    data.quotes.push(record);

    if let Err(err) = persist_data(&state.data_path, &data).await {
        data.quotes.pop();
        error!("failed to persist quote: {}", err.message);
        return Ok(Json(AddQuoteResponse {
            success: false,
            message: None,
            error: Some(err.message),
        }));
    }

    info!(author, total = data.quotes.len(), "quote saved");
    Ok(Json(AddQuoteResponse {
        success: true,
        message: Some("Quote saved".to_string()),
        error: None,
    }))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<BotSettings>,
) -> Result<Json<SettingsResponse>, AppError> {
    NaiveTime::parse_from_str(settings.post_time.trim(), "%H:%M")
        .map_err(|_| AppError::bad_request("postTime must be HH:MM"))?;

    let mut data = state.data.lock().await;
    let previous = data.settings.replace(settings.clone());

    if let Err(err) = persist_data(&state.data_path, &data).await {
        data.settings = previous;
        return Err(err);
    }

    Ok(Json(SettingsResponse {
        success: true,
        message: "Settings saved".to_string(),
        settings,
    }))
}

pub async fn latest_quote(State(state): State<AppState>) -> Response {
    let data = state.data.lock().await;
    match data.latest_quote() {
        Some(latest) => Json(LatestQuoteResponse {
            text: latest.display_text(),
            time: latest.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "No tweet found." })),
        )
            .into_response(),
    }
}

pub async fn get_scheduler_status(State(state): State<AppState>) -> Json<SchedulerStatusResponse> {
    let data = state.data.lock().await;
    Json(scheduler_status(&data))
}
