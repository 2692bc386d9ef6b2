//! Shared context, error types, and URL parsing for the CLI.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use codedesk_client::{
    ActionHandler, ClientConfig, RequestGeneration, ReqwestTransport, parse_base_url,
};
use url::Url;

use crate::output::TerminalOutput;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Application context passed to command handlers.
pub(crate) struct AppContext {
    pub(crate) handler: ActionHandler<ReqwestTransport>,
    pub(crate) generation: RequestGeneration,
    pub(crate) output: TerminalOutput,
}

impl AppContext {
    /// Build the handler for `base_url`, applying the optional timeout.
    pub(crate) fn new(base_url: Url, timeout_secs: Option<u64>) -> CliResult<Self> {
        Self::with_output(base_url, timeout_secs, TerminalOutput::stdout())
    }

    /// Same as [`Self::new`], writing final text to `output`.
    pub(crate) fn with_output(
        base_url: Url,
        timeout_secs: Option<u64>,
        output: TerminalOutput,
    ) -> CliResult<Self> {
        let mut config = ClientConfig::new(base_url);
        if let Some(secs) = timeout_secs {
            if secs == 0 {
                return Err(CliError::validation("timeout must be at least 1 second"));
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }
        let transport = ReqwestTransport::new(&config).map_err(CliError::failure)?;
        Ok(Self {
            handler: ActionHandler::new(config, transport),
            generation: RequestGeneration::new(),
            output,
        })
    }
}

/// Parse the backend URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    parse_base_url(input).map_err(|err| err.to_string())
}
