use crate::config::{BarkConfig, PUSH_TIMEOUT, QUOTE_TIMEOUT};
use crate::models::{CheckinStatus, RunReport};
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

const BODY_LIMIT: usize = 500;
const DIVIDER: &str = "────────────";

pub const DEFAULT_QUOTE: &str = "「日拱一卒，功不唐捐。」";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Render the run into a push notification: overall icon + date in the
/// title, one block per account in the body, quote at the end.
pub fn format_report(report: &RunReport, quote: &str) -> Notification {
    let icon = if report.all_ok() { "✅" } else { "⚠️" };
    let date = report
        .timestamp
        .split_whitespace()
        .next()
        .unwrap_or(&report.timestamp);

    let mut blocks = Vec::with_capacity(report.results.len() + 1);
    for entry in &report.results {
        let result = &entry.result;
        let mut block = format!(
            "{} {}: {} · streak {} days",
            result.status.icon(),
            entry.name,
            result.status.label(),
            result.consecutive_days
        );
        if result.status == CheckinStatus::Error {
            block.push('\n');
            block.push_str(&result.summary);
        }
        blocks.push(block);
    }
    blocks.push(quote.to_string());

    Notification {
        title: format!("{icon} Ninebot check-in {date}"),
        body: blocks.join(&format!("\n{DIVIDER}\n")),
    }
}

#[derive(Debug, Deserialize)]
struct Hitokoto {
    hitokoto: String,
    #[serde(default)]
    from: String,
}

/// Fetch the quote of the day; any failure falls back to the built-in one.
pub async fn fetch_quote(http: &reqwest::Client, quote_url: &str) -> String {
    let response = http.get(quote_url).timeout(QUOTE_TIMEOUT).send().await;
    match response {
        Ok(response) => match response.json::<Hitokoto>().await {
            Ok(quote) if !quote.hitokoto.is_empty() => {
                format!("「{}」 ── {}", quote.hitokoto, quote.from)
            }
            _ => DEFAULT_QUOTE.to_string(),
        },
        Err(err) => {
            warn!("quote fetch failed: {err}");
            DEFAULT_QUOTE.to_string()
        }
    }
}

/// Fire-and-forget delivery through the Bark relay. Failures are logged
/// and swallowed; the caller never sees them.
pub async fn push(http: &reqwest::Client, bark: &BarkConfig, notification: &Notification) {
    let url = match bark_url(bark, notification) {
        Ok(url) => url,
        Err(err) => {
            warn!("bark URL build failed: {err}");
            return;
        }
    };

    match http.get(url).timeout(PUSH_TIMEOUT).send().await {
        Ok(response) if response.status().is_success() => info!("bark push delivered"),
        Ok(response) => warn!("bark push rejected: HTTP {}", response.status().as_u16()),
        Err(err) => warn!("bark push failed: {err}"),
    }
}

fn bark_url(bark: &BarkConfig, notification: &Notification) -> Result<Url, String> {
    let body = truncate(&notification.body, BODY_LIMIT);
    let mut url = Url::parse(&bark.base_url).map_err(|err| err.to_string())?;
    url.path_segments_mut()
        .map_err(|()| "bark base URL cannot hold path segments".to_string())?
        .push(&bark.key)
        .push(&notification.title)
        .push(&body);
    Ok(url)
}

fn truncate(body: &str, limit: usize) -> String {
    if body.chars().count() <= limit {
        return body.to_string();
    }
    let mut shortened: String = body.chars().take(limit).collect();
    shortened.push_str("...");
    shortened
}
