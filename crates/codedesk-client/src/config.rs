//! Backend address and transport limits injected into each handler.
//!
//! # Design
//! - The backend address is a value, not a global: every handler receives its
//!   own [`ClientConfig`], so tests can point one handler at a mock server.
//! - Endpoint paths are appended to the base URL verbatim, so a base with a
//!   path prefix (`http://host/api`) keeps that prefix.
//! - No timeout is applied unless one is configured.

use std::time::Duration;

use url::Url;

use crate::error::ClientError;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Connection settings shared by every action of one front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address of the backend; endpoint paths are appended to it.
    pub base_url: Url,
    /// Optional whole-request timeout applied by the transport.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Build a configuration with no timeout.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
        }
    }

    /// Parse a base address and build a configuration from it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the input is not an
    /// absolute `http`/`https` URL.
    pub fn parse(base_url: &str) -> Result<Self, ClientError> {
        parse_base_url(base_url).map(Self::new)
    }

    /// Attach a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve an endpoint path (such as `/check-code`) against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] if the concatenated address
    /// does not parse.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let joined = format!("{base}/{}", path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|source| ClientError::InvalidEndpoint {
            url: joined,
            source,
        })
    }
}

/// Parse and vet a backend base address.
///
/// # Errors
///
/// Returns [`ClientError::InvalidBaseUrl`] for unparseable input or a scheme
/// other than `http`/`https`.
pub fn parse_base_url(input: &str) -> Result<Url, ClientError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|err| ClientError::InvalidBaseUrl {
        input: input.to_string(),
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::InvalidBaseUrl {
            input: input.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
