//! Presentation mappers
//!
//! Pure functions from backend records to the visual attributes of a card.
//! Nothing here knows about the terminal; the UI turns [`Accent`] and the
//! icons into colors and glyphs.

use crate::models::{NewsItem, Signal, SignalKind};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Color family of a card element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalIcon {
    UpArrow,
    DownArrow,
    Dash,
}

impl SignalIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            SignalIcon::UpArrow => "▲",
            SignalIcon::DownArrow => "▼",
            SignalIcon::Dash => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignalCard {
    pub pair: String,
    pub time_label: String,
    /// Raw signal value, shown in the badge.
    pub badge_text: String,
    pub border: Accent,
    pub badge: Accent,
    pub price_color: Accent,
    pub icon: Option<SignalIcon>,
    pub entry_price: String,
    pub take_profit: String,
    pub stop_loss: String,
    /// Whether the take-profit / stop-loss / confidence block is rendered.
    pub show_tp_sl: bool,
    /// Width of the confidence bar in percent, exactly as received.
    pub confidence_width: f64,
    pub reason: String,
}

impl SignalCard {
    pub fn from_signal(signal: &Signal) -> Self {
        let (accent, icon) = match signal.signal {
            SignalKind::Buy => (Accent::Bullish, Some(SignalIcon::UpArrow)),
            SignalKind::Sell => (Accent::Bearish, Some(SignalIcon::DownArrow)),
            SignalKind::Wait => (Accent::Neutral, Some(SignalIcon::Dash)),
            SignalKind::Other(_) => (Accent::Neutral, None),
        };

        Self {
            pair: signal.pair.clone(),
            time_label: format_date_time(&signal.time),
            badge_text: signal.signal.to_string(),
            border: accent,
            badge: accent,
            price_color: accent,
            icon,
            entry_price: format_price(signal.entry_price),
            take_profit: format_price(signal.take_profit),
            stop_loss: format_price(signal.stop_loss),
            // Only an explicit WAIT hides the block.
            show_tp_sl: signal.signal != SignalKind::Wait,
            confidence_width: signal.confidence.unwrap_or(0.0),
            reason: signal.reason.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Bullish,
    Bearish,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "bullish",
            Sentiment::Bearish => "bearish",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            Sentiment::Bullish => Accent::Bullish,
            Sentiment::Bearish => Accent::Bearish,
        }
    }

    /// `None` for a neutral (zero or missing) score.
    pub fn from_score(score: Option<f64>) -> Option<Self> {
        let score = score.unwrap_or(0.0);
        if score > 0.0 {
            Some(Sentiment::Bullish)
        } else if score < 0.0 {
            Some(Sentiment::Bearish)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsCard {
    pub source_label: String,
    pub date_label: String,
    pub title_line: String,
    pub sentiment: Option<Sentiment>,
}

impl NewsCard {
    pub fn from_news(item: &NewsItem) -> Self {
        Self {
            source_label: item.source.clone(),
            date_label: format_short_date(&item.date),
            title_line: item.title.clone(),
            sentiment: Sentiment::from_score(item.sentiment_score),
        }
    }
}

fn format_price(price: Option<f64>) -> String {
    price.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Parses the timestamp shapes the backend emits, keeping the source wall clock.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.naive_local());
    }
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for format in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Date and time in the locale-style `%x %X` layout. Empty input stays empty;
/// input that cannot be parsed is shown verbatim.
pub fn format_date_time(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%x %X").to_string(),
        None => raw.to_string(),
    }
}

/// Short `%x` date. Input that cannot be parsed is shown verbatim.
pub fn format_short_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%x").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(kind: &str, confidence: Option<f64>) -> Signal {
        Signal {
            pair: "EURUSD".to_string(),
            time: "2025-01-14 09:15:00".to_string(),
            signal: SignalKind::from(kind.to_string()),
            entry_price: Some(1.0842),
            take_profit: Some(1.0905),
            stop_loss: Some(1.081),
            confidence,
            reason: "RSI oversold".to_string(),
        }
    }

    fn news_with_score(score: Option<f64>) -> NewsItem {
        NewsItem {
            id: "n1".to_string(),
            source: "Reuters".to_string(),
            date: "2025-01-14T08:00:00".to_string(),
            title: "ECB holds rates".to_string(),
            sentiment_score: score,
            currency: None,
        }
    }

    #[test]
    fn buy_card_is_green_with_up_arrow() {
        let card = SignalCard::from_signal(&signal("BUY", Some(75.0)));
        assert_eq!(card.border, Accent::Bullish);
        assert_eq!(card.badge, Accent::Bullish);
        assert_eq!(card.price_color, Accent::Bullish);
        assert_eq!(card.icon, Some(SignalIcon::UpArrow));
        assert_eq!(card.confidence_width, 75.0);
        assert!(card.show_tp_sl);
        assert_eq!(card.entry_price, "1.0842");
    }

    #[test]
    fn sell_card_is_red_with_down_arrow() {
        let card = SignalCard::from_signal(&signal("SELL", Some(40.0)));
        assert_eq!(card.border, Accent::Bearish);
        assert_eq!(card.icon, Some(SignalIcon::DownArrow));
        assert!(card.show_tp_sl);
    }

    #[test]
    fn wait_card_hides_targets() {
        let card = SignalCard::from_signal(&signal("WAIT", Some(0.0)));
        assert_eq!(card.border, Accent::Neutral);
        assert_eq!(card.icon, Some(SignalIcon::Dash));
        assert!(!card.show_tp_sl);
    }

    #[test]
    fn unrecognized_signal_is_neutral_but_shows_targets() {
        let card = SignalCard::from_signal(&signal("HOLD", Some(10.0)));
        assert_eq!(card.border, Accent::Neutral);
        assert_eq!(card.icon, None);
        assert!(card.show_tp_sl);
        assert_eq!(card.badge_text, "HOLD");
    }

    #[test]
    fn confidence_passes_through_unclamped() {
        assert_eq!(
            SignalCard::from_signal(&signal("BUY", Some(140.0))).confidence_width,
            140.0
        );
        assert_eq!(
            SignalCard::from_signal(&signal("SELL", Some(-5.0))).confidence_width,
            -5.0
        );
        assert_eq!(
            SignalCard::from_signal(&signal("SELL", None)).confidence_width,
            0.0
        );
    }

    #[test]
    fn missing_prices_render_as_placeholder() {
        let mut s = signal("WAIT", None);
        s.take_profit = None;
        assert_eq!(SignalCard::from_signal(&s).take_profit, "-");
    }

    #[test]
    fn neutral_news_has_no_label() {
        assert_eq!(NewsCard::from_news(&news_with_score(Some(0.0))).sentiment, None);
        assert_eq!(NewsCard::from_news(&news_with_score(None)).sentiment, None);
    }

    #[test]
    fn news_sentiment_labels() {
        let bearish = NewsCard::from_news(&news_with_score(Some(-3.0)));
        assert_eq!(bearish.sentiment, Some(Sentiment::Bearish));
        assert_eq!(bearish.sentiment.map(|s| s.label()), Some("bearish"));

        let bullish = NewsCard::from_news(&news_with_score(Some(0.2)));
        assert_eq!(bullish.sentiment.map(|s| s.label()), Some("bullish"));
        assert_eq!(bullish.sentiment.map(|s| s.accent()), Some(Accent::Bullish));
    }

    #[test]
    fn news_card_fields() {
        let card = NewsCard::from_news(&news_with_score(Some(1.0)));
        assert_eq!(card.source_label, "Reuters");
        assert_eq!(card.date_label, "01/14/25");
        assert_eq!(card.title_line, "ECB holds rates");
    }

    #[test]
    fn parses_backend_timestamp_shapes() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 14)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2025-01-14 09:15:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-14T09:15:00"), Some(expected));
        assert!(parse_timestamp("2025-01-14 09:15:00.123456").is_some());
        // Source offset is kept, not converted.
        assert_eq!(parse_timestamp("2025-01-14T09:15:00+02:00"), Some(expected));
        assert_eq!(
            parse_timestamp("Tue, 14 Jan 2025 09:15:00 GMT"),
            Some(expected)
        );
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn formats_labels() {
        assert_eq!(format_date_time("2025-01-14 09:15:00"), "01/14/25 09:15:00");
        assert_eq!(format_date_time(""), "");
        assert_eq!(format_date_time("soon"), "soon");
        assert_eq!(format_short_date("2025-01-14"), "01/14/25");
    }
}
