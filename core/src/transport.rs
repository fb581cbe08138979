//! HTTP transport seam.
//!
//! # Design
//! The client never talks to the network directly; it hands an absolute URL
//! to a [`Transport`] and gets back a status code and body as plain data.
//! Status interpretation stays in the client, so the transport must return
//! non-2xx responses as data rather than errors. Tests inject a recording
//! double; production code uses [`UreqTransport`].

use crate::error::ApiError;

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes a single HTTP GET. The API is read-only, so GET is the only
/// verb the client ever needs.
pub trait Transport {
    /// Perform a GET against `url`, returning the status and body verbatim.
    /// Fails only on connection-level errors, never on HTTP status.
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a `ureq` agent.
///
/// Configured with `http_status_as_error(false)` so 4xx/5xx responses are
/// returned as data, letting the client map statuses to error variants.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
