use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tracing::{debug, error};

pub const STATS_PATH: &str = "/api/stats";
pub const ADD_QUOTE_PATH: &str = "/api/add-quote";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuoteSubmission {
    pub content: &'static str,
    pub author: &'static str,
}

/// Body sent on every activation. Field order is part of the wire format.
pub const TEST_QUOTE: QuoteSubmission = QuoteSubmission {
    content: "Believe you can and you're halfway there. - Theodore Roosevelt",
    author: "Theodore Roosevelt",
};

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The request never produced a readable response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not JSON.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// Where rendered fragments go. The stats branch replaces, the quote branch appends.
pub trait OutputSink: Clone + Send + Sync + 'static {
    fn replace(&self, fragment: String);
    fn append(&self, fragment: String);
}

#[derive(Debug, Default)]
struct LogState {
    fragments: Vec<String>,
    settlements: u64,
}

/// The results panel: rendered fragments plus a count of settled requests.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct DisplayLog {
    inner: Arc<Mutex<LogState>>,
}

impl DisplayLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> String {
        self.lock().fragments.concat()
    }

    pub fn fragments(&self) -> Vec<String> {
        self.lock().fragments.clone()
    }

    pub fn settlements(&self) -> u64 {
        self.lock().settlements
    }

    fn lock(&self) -> MutexGuard<'_, LogState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OutputSink for DisplayLog {
    fn replace(&self, fragment: String) {
        let mut state = self.lock();
        state.fragments.clear();
        state.fragments.push(fragment);
        state.settlements += 1;
    }

    fn append(&self, fragment: String) {
        let mut state = self.lock();
        state.fragments.push(fragment);
        state.settlements += 1;
    }
}

/// Handle to the two requests of one activation.
///
/// Dropping it does not cancel anything.
pub struct ProbeRun {
    stats: JoinHandle<()>,
    quote: JoinHandle<()>,
}

impl ProbeRun {
    pub async fn settled(self) {
        let (stats, quote) = tokio::join!(self.stats, self.quote);
        if let Err(err) = stats {
            error!(branch = "stats", "probe task failed: {err}");
        }
        if let Err(err) = quote {
            error!(branch = "quote", "probe task failed: {err}");
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiProbe {
    client: Client,
    base_url: String,
}

impl ApiProbe {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fires the stats GET and the quote POST without waiting on either.
    pub fn activate<S: OutputSink>(&self, sink: &S) -> ProbeRun {
        let stats = {
            let probe = self.clone();
            let sink = sink.clone();
            tokio::spawn(async move {
                let outcome = probe.fetch_stats().await;
                debug!(branch = "stats", ok = outcome.is_ok(), "probe request settled");
                sink.replace(render_outcome("Stats Response", &outcome));
            })
        };

        let quote = {
            let probe = self.clone();
            let sink = sink.clone();
            tokio::spawn(async move {
                let outcome = probe.submit_quote().await;
                debug!(branch = "quote", ok = outcome.is_ok(), "probe request settled");
                sink.append(render_outcome("Quote Response", &outcome));
            })
        };

        ProbeRun { stats, quote }
    }

    pub async fn fetch_stats(&self) -> Result<Value, ProbeError> {
        let response = self.client.get(self.url(STATS_PATH)).send().await?;
        decode(response).await
    }

    pub async fn submit_quote(&self) -> Result<Value, ProbeError> {
        let response = self
            .client
            .post(self.url(ADD_QUOTE_PATH))
            .json(&TEST_QUOTE)
            .send()
            .await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// Status codes are not inspected; any JSON body counts as a response.
async fn decode(response: reqwest::Response) -> Result<Value, ProbeError> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

pub fn render_outcome(label: &str, outcome: &Result<Value, ProbeError>) -> String {
    match outcome {
        Ok(value) => render_response(label, value),
        Err(err) => render_error(err),
    }
}

pub fn render_response(label: &str, value: &Value) -> String {
    let value = integral_floats_as_integers(value);
    let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
    format!("<p>{label}: {}</p>", escape_html(&pretty))
}

pub fn render_error(err: &ProbeError) -> String {
    format!("<p>Error: {}</p>", escape_html(&err.to_string()))
}

// Largest magnitude at which every integer is exactly representable as f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole-number floats print as integers (`1.0` → `1`, `-0.0` → `0`), matching browser JSON output.
fn integral_floats_as_integers(value: &Value) -> Value {
    match value {
        Value::Number(number) if number.is_f64() => match number.as_f64() {
            Some(float) if float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER => {
                Value::from(float as i64)
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(integral_floats_as_integers).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), integral_floats_as_integers(field)))
                .collect::<Map<String, Value>>(),
        ),
        _ => value.clone(),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
