pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! Polling cadence, HTTP limits and the fixed strings the dashboard shows,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// Maximum number of buffered activity events between controller and UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Refresh cadence configuration
    pub mod refresh {
        use std::time::Duration;

        /// Seconds between automatic refresh cycles
        pub const DEFAULT_INTERVAL_SECS: u64 = 30;

        /// Shortest interval accepted from the command line or config file
        pub const MIN_INTERVAL_SECS: u64 = 1;

        /// Clamp a user-supplied interval to the accepted range
        pub fn interval_from_secs(secs: u64) -> Duration {
            Duration::from_secs(secs.max(MIN_INTERVAL_SECS))
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod http {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 10;
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    /// Backend used when neither the command line nor the config file names one
    pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

    pub const SIGNALS_ENDPOINT: &str = "/api/signals";
    pub const NEWS_ENDPOINT: &str = "/api/news";
    pub const STATUS_ENDPOINT: &str = "/api/status";

    // =============================================================================
    // DISPLAY STRINGS
    // =============================================================================

    pub const OFFLINE_STATUS: &str = "offline";
    pub const CONNECTING_STATUS: &str = "connecting...";

    pub const NO_SIGNALS_MESSAGE: &str = "No signals generated yet or engine is starting up...";
    pub const NO_NEWS_MESSAGE: &str = "No news found.";
}
