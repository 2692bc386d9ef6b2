#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub, unused)]
//! Shared HTTP DTOs for the codedesk backend API.
//!
//! The request types mirror the JSON bodies the backend's request models
//! accept, field for field. Replies are decoded through [`ActionReply`], which
//! validates the body shape instead of trusting whatever keys happen to be
//! present.

use serde::{Deserialize, Serialize};

mod reply;

pub use reply::{ActionReply, ErrorDetail, ReplyDecodeError, ReplyField, ValidationIssue};

/// Branch pushed to when the caller leaves the branch field blank.
pub const DEFAULT_BRANCH: &str = "main";

/// Body for `POST /check-code`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunCodeRequest {
    /// Language identifier understood by the backend (e.g. `python`).
    pub language: String,
    /// Source code to execute.
    pub code: String,
    /// Text fed to the program's standard input, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_input: Option<String>,
}

/// Body for `POST /analyze-code`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeCodeRequest {
    /// Language of the submitted code.
    pub language: String,
    /// Source code under analysis.
    pub code: String,
    /// Free-text question put to the model.
    pub query: String,
}

/// Body for `POST /analyze-backend-code`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeBackendCodeRequest {
    /// Backend source code under review.
    pub code: String,
    /// Free-text question put to the model.
    pub query: String,
}

/// Body for `POST /git/clone`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitCloneRequest {
    /// Remote repository URL.
    pub repo_url: String,
    /// Destination directory on the backend host.
    pub local_path: String,
}

/// Body for `POST /git/pull`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitPullRequest {
    /// Working copy on the backend host.
    pub local_path: String,
}

/// Body for `POST /git/commit-push`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitCommitPushRequest {
    /// Working copy on the backend host.
    pub local_path: String,
    /// Commit message recorded by the backend.
    pub commit_message: String,
    /// Branch to push; never empty on the wire.
    pub branch: String,
}

impl GitCommitPushRequest {
    /// Build a commit/push body, substituting [`DEFAULT_BRANCH`] for an empty branch.
    #[must_use]
    pub fn new(
        local_path: impl Into<String>,
        commit_message: impl Into<String>,
        branch: &str,
    ) -> Self {
        let branch = if branch.is_empty() {
            DEFAULT_BRANCH.to_string()
        } else {
            branch.to_string()
        };
        Self {
            local_path: local_path.into(),
            commit_message: commit_message.into(),
            branch,
        }
    }
}
