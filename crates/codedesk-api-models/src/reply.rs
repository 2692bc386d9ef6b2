//! Reply decoding for action endpoints.
//!
//! # Design
//! - Every endpoint answers with a flat JSON object: a success field
//!   (`message` or `feedback`) on 2xx, a `detail` field otherwise.
//! - Bodies are validated before use; a body that is not an object, or a
//!   relevant field of the wrong type, is a decode error rather than a silent
//!   fallback.
//! - An empty body is not malformed: it decodes to the variant without text.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Success field an endpoint populates on a 2xx reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyField {
    /// `{"message": ...}` (code execution and git endpoints).
    Message,
    /// `{"feedback": ...}` (analysis endpoints).
    Feedback,
}

impl ReplyField {
    /// JSON key carrying the success text.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Feedback => "feedback",
        }
    }
}

/// One entry of a request-validation failure list (HTTP 422).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ValidationIssue {
    /// Path to the offending input, e.g. `["body", "code"]`.
    #[serde(default)]
    pub loc: Vec<Value>,
    /// Human-readable description of the failure.
    pub msg: String,
    /// Machine-readable failure kind when provided.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl ValidationIssue {
    fn render(&self) -> String {
        let location = self
            .loc
            .iter()
            .map(|part| match part {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        if location.is_empty() {
            self.msg.clone()
        } else {
            format!("{} ({location})", self.msg)
        }
    }
}

/// Error detail attached to a non-2xx reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    /// Plain-text detail, surfaced verbatim.
    Text(String),
    /// Structured validation failures.
    Issues(Vec<ValidationIssue>),
}

impl ErrorDetail {
    /// Flatten the detail into the text shown to the user.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Issues(issues) => issues
                .iter()
                .map(ValidationIssue::render)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Validated reply from an action endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionReply {
    /// 2xx reply; `text` is the endpoint's success field when present.
    Success {
        /// Success text, if the backend supplied one.
        text: Option<String>,
    },
    /// Non-2xx reply; `detail` is the backend's error detail when present.
    Failure {
        /// Error detail, if the backend supplied one.
        detail: Option<ErrorDetail>,
    },
}

/// Reasons a reply body could not be trusted.
#[derive(Debug, Error)]
pub enum ReplyDecodeError {
    /// Body was not parseable JSON.
    #[error("reply body is not valid JSON")]
    NotJson(#[source] serde_json::Error),
    /// Body parsed, but not to a JSON object.
    #[error("reply body is not a JSON object")]
    NotAnObject,
    /// A relevant field carried an unexpected type.
    #[error("reply field `{field}` has an unexpected type")]
    InvalidField {
        /// Offending key.
        field: &'static str,
    },
}

impl ActionReply {
    /// Decode a reply given its HTTP status and raw body.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyDecodeError`] when the body is non-empty and is not a
    /// JSON object, or when the success/detail field has the wrong type.
    pub fn decode(status: u16, body: &[u8], field: ReplyField) -> Result<Self, ReplyDecodeError> {
        let success = (200..300).contains(&status);
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(if success {
                Self::Success { text: None }
            } else {
                Self::Failure { detail: None }
            });
        }

        let value: Value = serde_json::from_slice(body).map_err(ReplyDecodeError::NotJson)?;
        let Value::Object(map) = value else {
            return Err(ReplyDecodeError::NotAnObject);
        };

        if success {
            let text = string_field(&map, field.key())?;
            Ok(Self::Success { text })
        } else {
            let detail = detail_field(&map)?;
            Ok(Self::Failure { detail })
        }
    }
}

fn string_field(
    map: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<String>, ReplyDecodeError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(ReplyDecodeError::InvalidField { field: key }),
    }
}

fn detail_field(map: &Map<String, Value>) -> Result<Option<ErrorDetail>, ReplyDecodeError> {
    match map.get("detail") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(ErrorDetail::Text(text.clone()))),
        Some(issues @ Value::Array(_)) => serde_json::from_value(issues.clone())
            .map(|issues| Some(ErrorDetail::Issues(issues)))
            .map_err(|_| ReplyDecodeError::InvalidField { field: "detail" }),
        Some(_) => Err(ReplyDecodeError::InvalidField { field: "detail" }),
    }
}
