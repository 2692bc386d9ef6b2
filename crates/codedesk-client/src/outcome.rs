//! Classification of a finished request into the text the user sees.

use codedesk_api_models::ActionReply;

use crate::action::Action;
use crate::transport::HttpReply;

/// Output text when no response could be obtained.
pub const UNREACHABLE_TEXT: &str = "Error: Unable to connect to the server.";

/// Detail substituted when a rejection carries none.
pub const UNKNOWN_ERROR_DETAIL: &str = "Unknown error.";

/// Terminal state of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx reply; holds the final text, fallback already applied.
    Success(String),
    /// Non-2xx reply.
    Rejected {
        /// HTTP status received.
        status: u16,
        /// Rendered detail, or [`UNKNOWN_ERROR_DETAIL`].
        detail: String,
    },
    /// A reply arrived but its body could not be trusted.
    Malformed {
        /// HTTP status received.
        status: u16,
        /// Decoder diagnostic, for logs.
        reason: String,
    },
    /// No reply at all (DNS, refused connection, CORS, timeout).
    Unreachable,
}

impl Outcome {
    /// Classify a raw reply for `action`.
    #[must_use]
    pub fn from_reply(action: Action, reply: &HttpReply) -> Self {
        match ActionReply::decode(reply.status, &reply.body, action.reply_field()) {
            Ok(ActionReply::Success { text }) => Self::Success(
                text.filter(|text| !text.is_empty())
                    .unwrap_or_else(|| action.completion_text().to_string()),
            ),
            Ok(ActionReply::Failure { detail }) => Self::Rejected {
                status: reply.status,
                detail: detail
                    .map(|detail| detail.render())
                    .filter(|detail| !detail.is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR_DETAIL.to_string()),
            },
            Err(err) => Self::Malformed {
                status: reply.status,
                reason: err.to_string(),
            },
        }
    }

    /// Exact text written to the output region.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Success(text) => text.clone(),
            Self::Rejected { detail, .. } => format!("Error: {detail}"),
            Self::Malformed { status, .. } => {
                format!("Error: Unexpected response from the server (HTTP {status}).")
            }
            Self::Unreachable => UNREACHABLE_TEXT.to_string(),
        }
    }
}
