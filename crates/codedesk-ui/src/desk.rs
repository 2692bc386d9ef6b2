//! Page-wide state that outlives a single render.

use codedesk_client::{Action, ClientConfig, ClientError, DEFAULT_BASE_URL, RequestGeneration};

/// Backend base URL baked in at build time through `CODEDESK_API_URL`.
#[must_use]
pub fn configured_base_url() -> &'static str {
    option_env!("CODEDESK_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Client configuration for the page.
///
/// # Errors
///
/// Returns [`ClientError::InvalidBaseUrl`] when the baked-in URL is not an
/// absolute http(s) URL.
pub fn page_config() -> Result<ClientConfig, ClientError> {
    ClientConfig::parse(configured_base_url())
}

/// One request generation per action, so buttons never cancel each other.
#[derive(Debug, Default)]
pub struct ActionGenerations {
    slots: [RequestGeneration; Action::ALL.len()],
}

impl ActionGenerations {
    /// Fresh counters for every action.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation counter owned by `action`.
    #[must_use]
    pub const fn of(&self, action: Action) -> &RequestGeneration {
        let index = match action {
            Action::RunCode => 0,
            Action::AnalyzeCode => 1,
            Action::AnalyzeBackendCode => 2,
            Action::GitClone => 3,
            Action::GitPull => 4,
            Action::GitCommitPush => 5,
        };
        &self.slots[index]
    }

    /// Whether a request for `action` is still waiting on the backend.
    #[must_use]
    pub fn busy(&self, action: Action) -> bool {
        self.of(action).in_flight()
    }
}
