//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::cards::Accent;
use crate::models::EngineStatus;
use ratatui::prelude::Color;
use std::time::Duration;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Get a ratatui color for a card accent
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Bullish => Color::LightGreen,
        Accent::Bearish => Color::LightRed,
        Accent::Neutral => Color::Gray,
    }
}

/// Border color of a card; neutral cards get a dimmer frame than their text
pub fn border_color(accent: Accent) -> Color {
    match accent {
        Accent::Neutral => Color::DarkGray,
        other => accent_color(other),
    }
}

/// Color of the status dot: green only while the engine reports "running"
pub fn status_color(status: &EngineStatus) -> Color {
    if status.is_running() {
        Color::Green
    } else {
        Color::Red
    }
}

/// Frame of the refresh spinner for the given animation tick
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Compact uptime such as "1h 02m 03s"
pub fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Render a confidence bar `width` cells wide.
///
/// The percentage is clipped to the drawable range here and nowhere else.
pub fn confidence_bar(width: u16, percent: f64) -> (String, String) {
    let width = width as usize;
    let ratio = if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    ("█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate `text` to at most `max` characters, marking the cut with "..."
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_bar_fills_proportionally() {
        let (filled, empty) = confidence_bar(20, 75.0);
        assert_eq!(filled.chars().count(), 15);
        assert_eq!(empty.chars().count(), 5);
    }

    #[test]
    fn confidence_bar_clips_out_of_range_values() {
        assert_eq!(confidence_bar(10, 140.0).0.chars().count(), 10);
        assert_eq!(confidence_bar(10, -20.0).0.chars().count(), 0);
        assert_eq!(confidence_bar(10, f64::NAN).1.chars().count(), 10);
    }

    #[test]
    fn status_dot_is_green_only_when_running() {
        assert_eq!(status_color(&EngineStatus::new("running")), Color::Green);
        assert_eq!(status_color(&EngineStatus::connecting()), Color::Red);
        assert_eq!(status_color(&EngineStatus::offline()), Color::Red);
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long headline", 8), "a lon...");
    }

    #[test]
    fn uptime_is_compact() {
        assert_eq!(format_uptime(Duration::from_secs(42)), "42s");
        assert_eq!(format_uptime(Duration::from_secs(125)), "2m 05s");
        assert_eq!(format_uptime(Duration::from_secs(3723)), "1h 02m 03s");
    }

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner_frame(0), spinner_frame(4));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }
}
