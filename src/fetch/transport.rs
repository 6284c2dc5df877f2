//! HTTP transport seam for the GitHub client.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (timeout, DNS, refused connection)
    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid response body from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    pub fn is_status(&self) -> bool {
        matches!(self, FetchError::Status { .. })
    }
}

/// Issues a GET and decodes the body as JSON.
pub trait Transport: Send + Sync {
    fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// Sync HTTP via ureq.
pub struct UreqTransport {
    agent: ureq::Agent,
    user_agent: String,
}

impl UreqTransport {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Self {
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false) // status codes are classified below
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent, user_agent: user_agent.into() }
    }
}

impl Transport for UreqTransport {
    fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .agent
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/vnd.github+json")
            .call()
            .map_err(|e| FetchError::Transport { url: url.to_string(), message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: url.to_string() });
        }

        response
            .into_body()
            .read_json::<Value>()
            .map_err(|e| FetchError::Decode { url: url.to_string(), message: e.to_string() })
    }
}
