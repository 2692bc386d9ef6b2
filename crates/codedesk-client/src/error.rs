//! Error types for handler construction and dispatch.

use thiserror::Error;

/// Failures that prevent a request from being issued at all.
///
/// Backend rejections and transport failures are not errors at this level;
/// they are rendered into the output region as an [`crate::Outcome`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured backend address is unusable.
    #[error("invalid base URL '{input}': {reason}")]
    InvalidBaseUrl {
        /// Address as supplied.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Joining an endpoint path onto the base URL produced an invalid URL.
    #[error("invalid endpoint URL '{url}'")]
    InvalidEndpoint {
        /// Concatenated URL text.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// The request payload could not be encoded as JSON.
    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),
    /// The native HTTP client could not be constructed.
    #[error("failed to build HTTP client: {reason}")]
    HttpClient {
        /// Builder failure detail.
        reason: String,
    },
}
