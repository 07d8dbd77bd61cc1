//! Dashboard state management
//!
//! Holds the latest controller snapshot plus view-only state (animation tick,
//! signal and news scroll positions).

use crate::cards::{NewsCard, SignalCard};
use crate::controller::DashboardData;
use crate::environment::Environment;
use crate::events::Event;
use crate::ui::app::UIConfig;

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct DashboardState {
    /// The backend being polled.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Seconds between automatic refreshes, for display.
    pub refresh_interval: Duration,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Data as of the last successful refresh
    data: DashboardData,
    /// Whether a refresh is in flight
    loading: bool,
    /// Index of the first signal card shown
    signal_offset: usize,
    /// Index of the first news card shown
    news_offset: usize,
    /// Most recent activity event worth showing
    last_event: Option<Event>,
}

impl DashboardState {
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            refresh_interval: ui_config.refresh_interval,
            with_background_color: ui_config.with_background_color,
            tick: 0,
            data: DashboardData::default(),
            loading: false,
            signal_offset: 0,
            news_offset: 0,
            last_event: None,
        }
    }

    /// Take a fresh snapshot from the controller and advance the animation.
    pub fn update(&mut self, data: DashboardData, loading: bool) {
        self.tick += 1;
        self.data = data;
        self.loading = loading;
        self.signal_offset = self
            .signal_offset
            .min(self.data.signals.len().saturating_sub(1));
        self.news_offset = self
            .news_offset
            .min(self.data.news.len().saturating_sub(1));
    }

    /// Keep the latest event that passes the RUST_LOG filter.
    pub fn add_event(&mut self, event: Event) {
        if event.should_display() {
            self.last_event = Some(event);
        }
    }

    pub fn last_event(&self) -> Option<&Event> {
        self.last_event.as_ref()
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn signal_cards(&self) -> Vec<SignalCard> {
        self.data.signals.iter().map(SignalCard::from_signal).collect()
    }

    pub fn news_cards(&self) -> Vec<NewsCard> {
        self.data.news.iter().map(NewsCard::from_news).collect()
    }

    pub fn signal_offset(&self) -> usize {
        self.signal_offset
    }

    pub fn scroll_signals_down(&mut self) {
        if self.signal_offset + 1 < self.data.signals.len() {
            self.signal_offset += 1;
        }
    }

    pub fn scroll_signals_up(&mut self) {
        self.signal_offset = self.signal_offset.saturating_sub(1);
    }

    pub fn news_offset(&self) -> usize {
        self.news_offset
    }

    pub fn scroll_news_down(&mut self) {
        if self.news_offset + 1 < self.data.news.len() {
            self.news_offset += 1;
        }
    }

    pub fn scroll_news_up(&mut self) {
        self.news_offset = self.news_offset.saturating_sub(1);
    }

    /// Show the "no signals" hint: only once loading is done and the list is empty.
    pub fn show_empty_signals(&self) -> bool {
        self.data.signals.is_empty() && !self.loading
    }

    /// Show the "no news" hint: only once loading is done and the list is empty.
    pub fn show_empty_news(&self) -> bool {
        self.data.news.is_empty() && !self.loading
    }
}
