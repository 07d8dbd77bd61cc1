use crate::consts::dashboard_consts::DEFAULT_BACKEND_URL;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the backend deployments the dashboard can poll.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Backend running on this machine on its default port.
    #[default]
    Local,
    /// Any other backend, addressed by its base URL.
    Custom { base_url: String },
}

impl Environment {
    /// Returns the base URL the API endpoints are resolved against.
    pub fn backend_url(&self) -> String {
        match self {
            Environment::Local => DEFAULT_BACKEND_URL.to_string(),
            Environment::Custom { base_url } => base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            let base_url = s.trim_end_matches('/').to_string();
            if base_url == DEFAULT_BACKEND_URL {
                return Ok(Environment::Local);
            }
            return Ok(Environment::Custom { base_url });
        }
        Err(())
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { base_url } => write!(f, "Custom ({})", base_url),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.backend_url())
    }
}
