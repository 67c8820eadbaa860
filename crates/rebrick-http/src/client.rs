//! HTTP client implementation.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use rebrick_core::error::{Error, RemoteError, TransportError};

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest error body kept in a [`RemoteError`].
const MAX_ERROR_BODY: usize = 512;

/// HTTP client for catalog requests.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new client with a bounded per-request timeout.
    pub(crate) fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("rebrick/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Http {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, timeout })
    }

    /// Returns the per-request timeout.
    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Make a GET request and decode the JSON body.
    #[instrument(skip_all, fields(url = %url))]
    pub(crate) async fn get_json<R>(&self, url: Url) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        debug!("Catalog request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.handle_response(response).await
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "Catalog response");

        if status.is_success() {
            response
                .json::<R>()
                .await
                .map_err(|e| self.transport_error(e))
        } else {
            Err(Error::Remote(self.parse_error_response(response).await))
        }
    }

    /// Build a remote error from a non-success response.
    async fn parse_error_response(&self, response: reqwest::Response) -> RemoteError {
        let status = response.status().as_u16();

        let message = response
            .text()
            .await
            .ok()
            .map(|body| body.trim().chars().take(MAX_ERROR_BODY).collect::<String>())
            .filter(|body| !body.is_empty());

        RemoteError::new(status, message)
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        let err = if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            TransportError::Decode {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        };
        Error::Transport(err)
    }
}
