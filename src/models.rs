use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl QuoteRecord {
    /// Text as it would be posted: `content — author`.
    pub fn display_text(&self) -> String {
        format!("{} — {}", self.content, self.author)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotSettings {
    pub hashtags: Vec<String>,
    pub post_time: String,
    pub reply_messages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub quotes: Vec<QuoteRecord>,
    #[serde(default)]
    pub settings: Option<BotSettings>,
}

impl AppData {
    pub fn latest_quote(&self) -> Option<&QuoteRecord> {
        self.quotes.iter().max_by_key(|quote| quote.created_at)
    }
}

#[derive(Debug, Deserialize)]
pub struct AddQuoteRequest {
    pub content: String,
    pub author: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddQuoteResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub success: bool,
    pub message: String,
    pub settings: BotSettings,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LatestQuoteResponse {
    pub text: String,
    pub time: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SchedulerStatusResponse {
    pub tweeted_today: bool,
    pub time: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: String,
    pub quotes: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_quotes: u64,
    pub distinct_authors: u64,
    pub last_quote_at: Option<String>,
    pub status: String,
    pub last_7_days: Vec<DailyPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProbeSnapshot {
    pub settlements: u64,
    pub html: String,
    pub fragments: Vec<String>,
}
