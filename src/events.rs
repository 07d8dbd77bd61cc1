//! Event System
//!
//! Activity events emitted by the refresh pipeline, consumed by the headless
//! console and the dashboard.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Origin {
    /// Refresh started by the recurring timer.
    Timer,
    /// Refresh requested by the viewer.
    Manual,
    /// Refresh issued once outside of any timer, e.g. by `snapshot`.
    OneShot,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Refresh,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub origin: Origin,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(origin: Origin, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            origin,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn refresh_started(origin: Origin) -> Self {
        Self::new(
            origin,
            "Refreshing signals, news and status...".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
        )
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Success {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.origin, self.msg
        )
    }
}

/// Cloneable handle for publishing activity events.
///
/// Sending never fails the caller: a closed or full channel drops the event.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub fn send_event(&self, event: Event) {
        let _ = self.sender.try_send(event);
    }
}
