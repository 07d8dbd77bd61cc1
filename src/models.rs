//! Records served by the signal backend.
//!
//! The backend is a thin JSON layer over SQLite rows, so every column may be
//! missing or `null`. Decoding is lenient: absent text becomes an empty string
//! and absent numbers become `None`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

use crate::consts::dashboard_consts::{CONNECTING_STATUS, OFFLINE_STATUS};

/// Trading recommendation carried by a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalKind {
    Buy,
    Sell,
    Wait,
    /// Any value the backend sends that is not one of the three known ones.
    Other(String),
}

impl SignalKind {
    pub fn as_str(&self) -> &str {
        match self {
            SignalKind::Buy => "BUY",
            SignalKind::Sell => "SELL",
            SignalKind::Wait => "WAIT",
            SignalKind::Other(raw) => raw,
        }
    }
}

impl From<String> for SignalKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "BUY" => SignalKind::Buy,
            "SELL" => SignalKind::Sell,
            "WAIT" => SignalKind::Wait,
            _ => SignalKind::Other(raw),
        }
    }
}

impl Default for SignalKind {
    fn default() -> Self {
        SignalKind::Other(String::new())
    }
}

impl Display for SignalKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SignalKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SignalKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(SignalKind::from).unwrap_or_default())
    }
}

/// Treat `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Signal {
    #[serde(default, deserialize_with = "null_as_default")]
    pub pair: String,
    /// Raw timestamp as sent by the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default)]
    pub signal: SignalKind,
    #[serde(default)]
    pub entry_price: Option<f64>,
    /// Only meaningful when the signal is not WAIT.
    #[serde(default)]
    pub take_profit: Option<f64>,
    /// Only meaningful when the signal is not WAIT.
    #[serde(default)]
    pub stop_loss: Option<f64>,
    /// Expected in 0..=100, not enforced.
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    /// Raw publication date as sent by the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Negative is bearish, positive bullish, zero neutral.
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStatus {
    #[serde(default = "offline_status", deserialize_with = "status_or_offline")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mongodb: Option<String>,
}

fn offline_status() -> String {
    OFFLINE_STATUS.to_string()
}

fn status_or_offline<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(offline_status))
}

impl EngineStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            version: None,
            database: None,
            mongodb: None,
        }
    }

    /// Value substituted when the status endpoint cannot be reached.
    pub fn offline() -> Self {
        Self::new(OFFLINE_STATUS)
    }

    /// Value shown before the first refresh settles.
    pub fn connecting() -> Self {
        Self::new(CONNECTING_STATUS)
    }

    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}

impl Default for EngineStatus {
    fn default() -> Self {
        Self::offline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_signal_row() {
        let json = r#"{
            "time": "2025-01-14 09:15:00",
            "pair": "EURUSD",
            "signal": "BUY",
            "confidence": 75.0,
            "entry_price": 1.0842,
            "stop_loss": 1.0810,
            "take_profit": 1.0905,
            "reason": "RSI oversold, EMA cross"
        }"#;
        let signal: Signal = serde_json::from_str(json).unwrap();
        assert_eq!(signal.signal, SignalKind::Buy);
        assert_eq!(signal.confidence, Some(75.0));
        assert_eq!(signal.pair, "EURUSD");
    }

    #[test]
    fn keeps_unrecognized_signal_value_verbatim() {
        let signal: Signal = serde_json::from_str(r#"{"signal": "HOLD"}"#).unwrap();
        assert_eq!(signal.signal, SignalKind::Other("HOLD".to_string()));
        assert_eq!(signal.signal.to_string(), "HOLD");

        // Matching is case-sensitive.
        let signal: Signal = serde_json::from_str(r#"{"signal": "buy"}"#).unwrap();
        assert_eq!(signal.signal, SignalKind::Other("buy".to_string()));
    }

    #[test]
    fn null_columns_decode_leniently() {
        let json = r#"{
            "pair": "GBPUSD", "time": null, "signal": "WAIT",
            "confidence": null, "entry_price": 1.27, "stop_loss": null,
            "take_profit": null, "reason": null
        }"#;
        let signal: Signal = serde_json::from_str(json).unwrap();
        assert_eq!(signal.time, "");
        assert_eq!(signal.reason, "");
        assert_eq!(signal.take_profit, None);
        assert_eq!(signal.signal, SignalKind::Wait);
    }

    #[test]
    fn decodes_news_with_extra_columns() {
        let json = r#"{"id": "abc", "date": "2025-01-14T08:00:00", "title": "ECB holds",
            "source": "Reuters", "sentiment_score": -0.4, "currency": "EUR"}"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.sentiment_score, Some(-0.4));
        assert_eq!(item.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn decodes_full_status_payload() {
        let json = r#"{"status": "running", "version": "1.2", "database": "sqlite", "mongodb": "disabled"}"#;
        let status: EngineStatus = serde_json::from_str(json).unwrap();
        assert!(status.is_running());
        assert_eq!(status.version.as_deref(), Some("1.2"));
    }

    #[test]
    fn status_without_field_is_offline() {
        let status: EngineStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status, EngineStatus::offline());
        assert!(!EngineStatus::connecting().is_running());
    }
}
