//! Session setup and initialization

use crate::backend::BackendClient;
use crate::consts::dashboard_consts::EVENT_QUEUE_SIZE;
use crate::controller::DashboardController;
use crate::environment::Environment;
use crate::events::{Event, EventSender};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Owner of the dashboard data, wired to the HTTP backend
    pub controller: DashboardController,
    /// Activity events published by the controller
    pub event_receiver: mpsc::Receiver<Event>,
    /// Shutdown sender to stop the session
    pub shutdown_sender: broadcast::Sender<()>,
    /// Period of the refresh timer
    pub refresh_interval: Duration,
    /// Backend being polled
    pub environment: Environment,
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Creates the HTTP backend client
/// 2. Sets up the event and shutdown channels
/// 3. Returns session data for mode-specific handling
///
/// The refresh timer is not started here; each mode acquires it when its
/// view activates.
pub fn setup_session(env: Environment, refresh_interval: Duration) -> SessionData {
    let backend = BackendClient::new(env.clone());

    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let controller =
        DashboardController::new(Arc::new(backend)).with_events(EventSender::new(event_sender));

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    SessionData {
        controller,
        event_receiver,
        shutdown_sender,
        refresh_interval,
        environment: env,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventType, Origin};

    #[tokio::test]
    async fn failed_refresh_reaches_the_event_channel() {
        // Nothing listens on the discard port.
        let env: Environment = "http://127.0.0.1:9".parse().unwrap();
        let mut session = setup_session(env.clone(), Duration::from_secs(30));
        assert_eq!(session.environment, env);
        assert_eq!(session.controller.environment(), &env);

        assert!(session.controller.refresh(Origin::OneShot).await.is_err());

        let started = session.event_receiver.recv().await.unwrap();
        assert_eq!(started.event_type, EventType::Refresh);
        let mut saw_error = false;
        while let Ok(event) = session.event_receiver.try_recv() {
            saw_error |= event.event_type == EventType::Error;
        }
        assert!(saw_error);
        assert!(!session.controller.is_loading());
    }
}
