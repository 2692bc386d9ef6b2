//! HTTP seam used by the handler.
//!
//! # Design
//! - One operation: POST a JSON body, return status and raw body bytes.
//! - Reply interpretation lives in [`crate::Outcome`], so every transport
//!   reports non-2xx statuses as ordinary replies.
//! - Any failure to obtain a reply is a [`TransportError`]; the handler does
//!   not distinguish DNS, refused connections, CORS or timeouts.
//! - Futures are not required to be `Send` so the browser transport fits.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// No reply could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Wrap a transport diagnostic.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sends one JSON POST and hands back whatever came back.
#[async_trait(?Send)]
pub trait Transport {
    /// POST `body` to `url` with a JSON content type.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP reply was received or the
    /// reply body could not be read.
    async fn post_json(&self, url: &Url, body: &Value) -> Result<HttpReply, TransportError>;
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use async_trait::async_trait;
    use reqwest::Client;
    use serde_json::Value;
    use url::Url;

    use super::{HttpReply, Transport, TransportError};
    use crate::config::ClientConfig;
    use crate::error::ClientError;

    /// [`Transport`] backed by a `reqwest` client.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        /// Build a client honouring the configured timeout.
        ///
        /// # Errors
        ///
        /// Returns [`ClientError::HttpClient`] if the TLS backend or client
        /// builder fails to initialise.
        pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
            let mut builder = Client::builder();
            if let Some(timeout) = config.timeout {
                builder = builder.timeout(timeout);
            }
            let client = builder.build().map_err(|err| ClientError::HttpClient {
                reason: err.to_string(),
            })?;
            Ok(Self { client })
        }
    }

    #[async_trait(?Send)]
    impl Transport for ReqwestTransport {
        async fn post_json(&self, url: &Url, body: &Value) -> Result<HttpReply, TransportError> {
            let response = self
                .client
                .post(url.clone())
                .json(body)
                .send()
                .await
                .map_err(|err| TransportError::new(format!("request to {url} failed: {err}")))?;
            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(|err| {
                TransportError::new(format!("failed to read reply from {url}: {err}"))
            })?;
            Ok(HttpReply {
                status,
                body: body.to_vec(),
            })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;
