use crate::backend::error::BackendError;
use crate::logging::LogLevel;

/// Maps backend failures to the level they are reported at.
#[derive(Debug, Clone, Default)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &BackendError) -> LogLevel {
        match error {
            // Server errors - temporary issues
            BackendError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Wrong URL or backend without the API
            BackendError::Http { .. } => LogLevel::Error,

            // Backend answered with something that is not the promised shape
            BackendError::Decode { .. } => LogLevel::Error,

            // Network issues - usually temporary
            BackendError::Reqwest(_) => LogLevel::Warn,
        }
    }
}
