//! HTTP client with credentials, retry, exponential backoff, timeout, and gzip.

use std::time::Duration;

use prelude_core::config::{ClientConfig, Credentials, PreludeConfig};
use prelude_core::errors::{PreludeResult, TransportError};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use super::client::AuthenticatedClient;
use super::request::{ApiRequest, ApiResponse, HttpMethod};

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the Prelude API.
    pub base_url: String,
    /// Request timeout, unless a call overrides it.
    pub timeout: Duration,
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl HttpClientConfig {
    /// Delay before the first retry, never above `max_backoff`.
    pub fn first_backoff(&self) -> Duration {
        self.initial_backoff.min(self.max_backoff)
    }
}

impl From<&ClientConfig> for HttpClientConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            max_retries: config.max_retries,
            initial_backoff: config.initial_backoff(),
            max_backoff: config.max_backoff(),
        }
    }
}

/// Authenticated HTTP client for the Prelude API.
///
/// Sends the account handle and token as `account` / `token` headers on
/// every request. Network errors and 5xx answers are retried with backoff;
/// 4xx answers fail immediately.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: HttpClientConfig,
    credentials: Credentials,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig, credentials: Credentials) -> PreludeResult<Self> {
        let http = reqwest::Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| TransportError::Network {
                reason: e.to_string(),
            })?;
        Ok(Self {
            config,
            credentials,
            http,
        })
    }

    /// Build a client from a loaded config, including its `[account]` credentials.
    pub fn from_config(config: &PreludeConfig) -> PreludeResult<Self> {
        let credentials = config.credentials()?;
        Self::new(HttpClientConfig::from(&config.client), credentials)
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn send_once(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut req = self
            .http
            .request(method, url)
            .header("account", self.credentials.account.as_str())
            .header("token", self.credentials.token.as_str())
            .timeout(request.options.timeout.unwrap_or(self.config.timeout));
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(ref body) = request.body {
            req = req.header(CONTENT_TYPE, "application/json").body(body.clone());
        }
        for (name, value) in &request.options.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        let resp = req.send().await.map_err(send_error)?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| TransportError::Network {
            reason: format!("reading body failed: {e}"),
        })?;

        if status.is_success() {
            Ok(ApiResponse::new(status.as_u16(), body))
        } else {
            Err(TransportError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Builder errors never succeed on retry; everything else reqwest reports
/// (connect, timeout, body) is a network failure.
fn send_error(e: reqwest::Error) -> TransportError {
    if e.is_builder() {
        TransportError::InvalidRequest {
            reason: e.to_string(),
        }
    } else {
        TransportError::Network {
            reason: e.to_string(),
        }
    }
}

impl AuthenticatedClient for HttpClient {
    async fn send(&self, request: ApiRequest) -> PreludeResult<ApiResponse> {
        let url = self.url(&request.path);
        let mut backoff = self.config.first_backoff();
        let mut last_err = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                debug!(
                    attempt,
                    max_retries = self.config.max_retries,
                    ?backoff,
                    "prelude: retrying request"
                );
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(self.config.max_backoff);
            }

            debug!(method = %request.method, path = %request.path_and_query(), attempt, "prelude: request");
            match self.send_once(&url, &request).await {
                Ok(resp) => return Ok(resp),
                Err(e) if e.is_transient() => {
                    warn!(attempt, error = %e, "prelude: request failed");
                    last_err = Some(e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let last = last_err.unwrap_or_else(|| TransportError::Network {
            reason: "no attempt made".to_string(),
        });
        if self.config.max_retries == 0 {
            return Err(last.into());
        }
        Err(TransportError::RetriesExhausted {
            attempts: self.config.max_retries + 1,
            last: Box::new(last),
        }
        .into())
    }
}
