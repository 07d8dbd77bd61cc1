use crate::backend::error::BackendError;
use crate::environment::Environment;
use crate::models::{EngineStatus, NewsItem, Signal};

pub(crate) mod client;
pub use client::BackendClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Read-only capability the dashboard controller polls.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardBackend: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Latest signals, in display order.
    async fn fetch_signals(&self) -> Result<Vec<Signal>, BackendError>;

    /// Latest news items, in display order.
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, BackendError>;

    /// Current engine status.
    async fn fetch_status(&self) -> Result<EngineStatus, BackendError>;
}
