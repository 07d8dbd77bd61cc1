//! Signal Backend Client
//!
//! A JSON-over-HTTP client for the three read endpoints the dashboard polls.

use crate::backend::DashboardBackend;
use crate::backend::error::BackendError;
use crate::consts::dashboard_consts::{NEWS_ENDPOINT, SIGNALS_ENDPOINT, STATUS_ENDPOINT, http};
use crate::environment::Environment;
use crate::models::{EngineStatus, NewsItem, Signal};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("signal-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    environment: Environment,
}

impl BackendClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.backend_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(endpoint: &str, bytes: &[u8]) -> Result<T, BackendError> {
        serde_json::from_slice(bytes).map_err(|e| BackendError::decode(endpoint, e))
    }

    /// Decodes a JSON array, treating a `null` body as an empty list.
    fn decode_list<T: DeserializeOwned>(endpoint: &str, bytes: &[u8]) -> Result<Vec<T>, BackendError> {
        let list: Option<Vec<T>> = Self::decode_response(endpoint, bytes)?;
        Ok(list.unwrap_or_default())
    }

    async fn handle_response_status(response: Response) -> Result<Response, BackendError> {
        if !response.status().is_success() {
            return Err(BackendError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_bytes(&self, endpoint: &str) -> Result<Vec<u8>, BackendError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(response_bytes.to_vec())
    }
}

#[async_trait::async_trait]
impl DashboardBackend for BackendClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_signals(&self) -> Result<Vec<Signal>, BackendError> {
        let bytes = self.get_bytes(SIGNALS_ENDPOINT).await?;
        Self::decode_list(SIGNALS_ENDPOINT, &bytes)
    }

    async fn fetch_news(&self) -> Result<Vec<NewsItem>, BackendError> {
        let bytes = self.get_bytes(NEWS_ENDPOINT).await?;
        Self::decode_list(NEWS_ENDPOINT, &bytes)
    }

    async fn fetch_status(&self) -> Result<EngineStatus, BackendError> {
        let bytes = self.get_bytes(STATUS_ENDPOINT).await?;
        Self::decode_response(STATUS_ENDPOINT, &bytes)
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    //! Minimal HTTP/1.1 responder for exercising the client without a live backend.

    use std::collections::HashMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves `routes` (path -> (status, body)) on an ephemeral port and returns its base URL.
    /// Unknown paths answer 404.
    pub async fn spawn(routes: Vec<(&'static str, u16, &'static str)>) -> String {
        let routes: HashMap<&'static str, (u16, &'static str)> = routes
            .into_iter()
            .map(|(path, status, body)| (path, (status, body)))
            .collect();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let request = String::from_utf8_lossy(&buf);
                    let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                    let (status, body) = routes.get(path.as_str()).copied().unwrap_or((404, "not found"));
                    let response = format!(
                        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}", addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: String) -> BackendClient {
        BackendClient::new(Environment::Custom { base_url })
    }

    #[test]
    fn build_url_joins_without_double_slash() {
        let client = client_for("http://127.0.0.1:8080/".to_string());
        assert_eq!(
            client.build_url("/api/signals"),
            "http://127.0.0.1:8080/api/signals"
        );
    }

    #[test]
    fn null_list_body_decodes_as_empty() {
        let signals: Vec<Signal> = BackendClient::decode_list(SIGNALS_ENDPOINT, b"null").unwrap();
        assert!(signals.is_empty());
    }

    #[test]
    fn error_object_on_list_endpoint_is_a_decode_error() {
        let result: Result<Vec<NewsItem>, _> =
            BackendClient::decode_list(NEWS_ENDPOINT, br#"{"error": "no such table"}"#);
        match result {
            Err(BackendError::Decode { endpoint, .. }) => assert_eq!(endpoint, NEWS_ENDPOINT),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetches_all_three_endpoints() {
        let base_url = test_server::spawn(vec![
            (
                "/api/signals",
                200,
                r#"[{"pair":"EURUSD","time":"2025-01-14 09:15:00","signal":"SELL","confidence":62.5}]"#,
            ),
            (
                "/api/news",
                200,
                r#"[{"id":"n1","source":"FXStreet","date":"2025-01-14","title":"USD firms","sentiment_score":0.3}]"#,
            ),
            ("/api/status", 200, r#"{"status":"running","version":"1.2"}"#),
        ])
        .await;
        let client = client_for(base_url);

        let signals = client.fetch_signals().await.unwrap();
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].pair, "EURUSD");

        let news = client.fetch_news().await.unwrap();
        assert_eq!(news[0].id, "n1");

        let status = client.fetch_status().await.unwrap();
        assert!(status.is_running());
    }

    #[tokio::test]
    async fn server_error_maps_to_http_error() {
        let base_url =
            test_server::spawn(vec![("/api/signals", 500, r#"{"error":"database is locked"}"#)]).await;
        let client = client_for(base_url);

        match client.fetch_signals().await {
            Err(BackendError::Http { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("database is locked"));
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }
}
