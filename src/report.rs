//! Plain-text and JSON renditions of the dashboard
//!
//! Used where there is no terminal UI: headless mode prints a report after
//! every successful refresh and `snapshot` prints one and exits.

use crate::cards::{NewsCard, SignalCard};
use crate::consts::dashboard_consts::{NO_NEWS_MESSAGE, NO_SIGNALS_MESSAGE};
use crate::controller::DashboardData;
use crate::models::{EngineStatus, NewsItem, Signal};
use serde::Serialize;

/// Raw data as served by the backend, for `snapshot --json`.
#[derive(Debug, Serialize)]
struct SnapshotJson<'a> {
    status: &'a EngineStatus,
    signals: &'a [Signal],
    news: &'a [NewsItem],
}

pub fn render_json(data: &DashboardData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SnapshotJson {
        status: &data.status,
        signals: &data.signals,
        news: &data.news,
    })
}

/// Cards as indented text, in backend order.
pub fn render_report(data: &DashboardData) -> String {
    let mut lines = Vec::new();

    let mut status_line = format!("Engine: {}", data.status.status);
    if let Some(version) = &data.status.version {
        status_line.push_str(&format!(" (v{})", version));
    }
    if let Some(updated) = data.last_updated {
        status_line.push_str(&format!(" | Updated: {}", updated.format("%H:%M:%S")));
    }
    lines.push(status_line);

    lines.push(format!("SIGNALS ({})", data.signals.len()));
    if data.signals.is_empty() {
        lines.push(format!("  {}", NO_SIGNALS_MESSAGE));
    }
    for card in data.signals.iter().map(SignalCard::from_signal) {
        lines.extend(signal_lines(&card));
    }

    lines.push(format!("NEWS ({})", data.news.len()));
    if data.news.is_empty() {
        lines.push(format!("  {}", NO_NEWS_MESSAGE));
    }
    for card in data.news.iter().map(NewsCard::from_news) {
        lines.extend(news_lines(&card));
    }

    lines.join("\n")
}

fn signal_lines(card: &SignalCard) -> Vec<String> {
    let badge = match card.icon {
        Some(icon) => format!("{} {}", icon.glyph(), card.badge_text),
        None => card.badge_text.clone(),
    };

    let mut lines = vec![format!("  {:<8} {:<10} {}", badge, card.pair, card.time_label)];
    let mut detail = format!("    price {}", card.entry_price);
    if card.show_tp_sl {
        detail.push_str(&format!(
            "  TP {}  SL {}  confidence {:.0}%",
            card.take_profit, card.stop_loss, card.confidence_width
        ));
    }
    lines.push(detail);
    if !card.reason.is_empty() {
        lines.push(format!("    {}", card.reason));
    }
    lines
}

fn news_lines(card: &NewsCard) -> Vec<String> {
    let mut header = format!("  [{}] {}", card.source_label, card.date_label);
    if let Some(sentiment) = card.sentiment {
        header.push_str(&format!(" {}", sentiment.label()));
    }
    vec![header, format!("    {}", card.title_line)]
}
