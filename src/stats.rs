use crate::models::{AppData, DailyPoint, SchedulerStatusResponse, StatsResponse};
use chrono::{Duration, NaiveDate, SecondsFormat, Utc};
use std::collections::{BTreeMap, BTreeSet};

const WINDOW_DAYS: i64 = 7;

pub fn build_stats(data: &AppData) -> StatsResponse {
    build_stats_at(Utc::now().date_naive(), data)
}

pub fn build_stats_at(today: NaiveDate, data: &AppData) -> StatsResponse {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for quote in &data.quotes {
        let count = per_day.entry(quote.created_at.date_naive()).or_default();
        *count = count.saturating_add(1);
    }

    let mut last_7_days = Vec::with_capacity(WINDOW_DAYS as usize);
    for offset in (0..WINDOW_DAYS).rev() {
        let date = today - Duration::days(offset);
        last_7_days.push(DailyPoint {
            date: date.to_string(),
            quotes: per_day.get(&date).copied().unwrap_or_default(),
        });
    }

    let recent = last_7_days.iter().any(|day| day.quotes > 0);
    let distinct_authors = data
        .quotes
        .iter()
        .map(|quote| quote.author.trim())
        .collect::<BTreeSet<_>>()
        .len() as u64;

    StatsResponse {
        total_quotes: data.quotes.len() as u64,
        distinct_authors,
        last_quote_at: data
            .latest_quote()
            .map(|quote| quote.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        status: if recent { "active" } else { "idle" }.to_string(),
        last_7_days,
    }
}

pub fn scheduler_status(data: &AppData) -> SchedulerStatusResponse {
    scheduler_status_at(Utc::now().date_naive(), data)
}

pub fn scheduler_status_at(today: NaiveDate, data: &AppData) -> SchedulerStatusResponse {
    match data.latest_quote() {
        Some(latest) if latest.created_at.date_naive() == today => SchedulerStatusResponse {
            tweeted_today: true,
            time: Some(latest.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        },
        _ => SchedulerStatusResponse {
            tweeted_today: false,
            time: None,
        },
    }
}
