//! Dashboard controller
//!
//! Owns the three refreshable collections (signals, news, engine status) and
//! the loading indicator. A refresh cycle fetches all three concurrently and
//! replaces the collections wholesale, or leaves them untouched if signals or
//! news could not be fetched.

use crate::backend::DashboardBackend;
use crate::backend::error::BackendError;
use crate::environment::Environment;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventSender, EventType, Origin};
use crate::logging::LogLevel;
use crate::models::{EngineStatus, NewsItem, Signal};
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Data shown by the dashboard, as of the last successful refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub signals: Vec<Signal>,
    pub news: Vec<NewsItem>,
    pub status: EngineStatus,
    /// Wall-clock time of the last successful refresh.
    pub last_updated: Option<DateTime<Local>>,
    /// Number of successful refreshes so far.
    pub refresh_count: u64,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            signals: Vec::new(),
            news: Vec::new(),
            status: EngineStatus::connecting(),
            last_updated: None,
            refresh_count: 0,
        }
    }
}

/// Summary of a successful refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub signals: usize,
    pub news: usize,
    /// The status endpoint failed and the offline default was used.
    pub status_fallback: bool,
}

/// Marks one refresh as in flight for as long as it is alive.
struct LoadingGuard {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingGuard {
    fn begin(in_flight: &Arc<AtomicUsize>) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self {
            in_flight: in_flight.clone(),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Polls a [`DashboardBackend`] and holds the latest known-good data.
///
/// Cloning is cheap and every clone shares the same state, so refreshes can
/// be spawned from the timer and from the viewer at the same time. Refreshes
/// are not de-duplicated: whichever completes last wins.
#[derive(Clone)]
pub struct DashboardController {
    backend: Arc<dyn DashboardBackend>,
    data: Arc<RwLock<DashboardData>>,
    in_flight: Arc<AtomicUsize>,
    events: Option<EventSender>,
    classifier: ErrorClassifier,
}

impl DashboardController {
    pub fn new(backend: Arc<dyn DashboardBackend>) -> Self {
        Self {
            backend,
            data: Arc::new(RwLock::new(DashboardData::default())),
            in_flight: Arc::new(AtomicUsize::new(0)),
            events: None,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Publish activity events for every refresh to `events`.
    pub fn with_events(mut self, events: EventSender) -> Self {
        self.events = Some(events);
        self
    }

    pub fn environment(&self) -> &Environment {
        self.backend.environment()
    }

    /// True while at least one refresh has started and not yet settled.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Copy of the current data.
    pub async fn snapshot(&self) -> DashboardData {
        self.data.read().await.clone()
    }

    /// Runs one refresh cycle.
    ///
    /// The status fetch falls back to [`EngineStatus::offline`] on failure.
    /// A failure of the signals or news fetch fails the whole cycle and keeps
    /// the previous data. The error is returned for callers that need it; it
    /// has already been logged and published as an event.
    pub async fn refresh(&self, origin: Origin) -> Result<RefreshOutcome, BackendError> {
        let _loading = LoadingGuard::begin(&self.in_flight);
        self.emit(Event::refresh_started(origin));

        let status = async {
            let status = match self.backend.fetch_status().await {
                Ok(status) => (status, false),
                Err(e) => {
                    log::warn!("Status fetch failed, showing offline: {}", e);
                    self.emit(Event::new(
                        origin,
                        format!("Status unavailable, showing offline: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    ));
                    (EngineStatus::offline(), true)
                }
            };
            Ok::<_, BackendError>(status)
        };

        let fetched = futures::try_join!(
            self.backend.fetch_signals(),
            self.backend.fetch_news(),
            status
        );

        match fetched {
            Ok((signals, news, (status, status_fallback))) => {
                let outcome = RefreshOutcome {
                    signals: signals.len(),
                    news: news.len(),
                    status_fallback,
                };
                {
                    let mut data = self.data.write().await;
                    data.signals = signals;
                    data.news = news;
                    data.status = status;
                    data.last_updated = Some(Local::now());
                    data.refresh_count += 1;
                }
                self.emit(Event::new(
                    origin,
                    format!(
                        "Loaded {} signals and {} news items",
                        outcome.signals, outcome.news
                    ),
                    EventType::Success,
                    LogLevel::Info,
                ));
                Ok(outcome)
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                log::warn!("Error fetching data: {}", e);
                self.emit(Event::new(
                    origin,
                    format!("Refresh failed, keeping previous data: {}", e),
                    EventType::Error,
                    log_level,
                ));
                Err(e)
            }
        }
    }

    /// Starts a refresh in the background and returns immediately.
    ///
    /// The controller reports loading from this call on, before the task is
    /// first polled.
    pub fn spawn_refresh(&self, origin: Origin) -> JoinHandle<()> {
        let pending = LoadingGuard::begin(&self.in_flight);
        let controller = self.clone();
        tokio::spawn(async move {
            let _pending = pending;
            let _ = controller.refresh(origin).await;
        })
    }

    fn emit(&self, event: Event) {
        if let Some(events) = &self.events {
            events.send_event(event);
        }
    }
}
