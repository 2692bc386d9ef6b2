//! Command handlers grouped by concern.
//!
//! Every handler turns its arguments into form fields and hands them to the
//! shared action handler; [`execute`] maps the result onto CLI exit codes.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, anyhow};
use codedesk_client::{Action, Field, FieldValues, Invocation, Outcome};

use crate::client::{AppContext, CliError, CliResult};
use crate::output::TerminalNotifier;

pub(crate) mod code;
pub(crate) mod git;

/// Run `action` with `fields` and translate the invocation into a result.
pub(crate) async fn execute(ctx: &AppContext, action: Action, fields: &FieldValues) -> CliResult<()> {
    let invocation = ctx
        .handler
        .invoke(action, fields, &ctx.output, &TerminalNotifier, &ctx.generation)
        .await
        .map_err(CliError::failure)?;
    ctx.output.finish()?;
    settle(ctx, action, invocation)
}

fn settle(ctx: &AppContext, action: Action, invocation: Invocation) -> CliResult<()> {
    let outcome = match invocation {
        Invocation::Blocked(missing) => {
            let flags = missing
                .fields
                .iter()
                .map(|field| flag_for(*field))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(CliError::validation(format!(
                "missing required input: {flags}"
            )));
        }
        Invocation::Completed(outcome) | Invocation::Superseded(outcome) => outcome,
    };

    match outcome {
        Outcome::Success(_) => Ok(()),
        Outcome::Rejected { status, .. } => Err(CliError::failure(anyhow!(
            "{} was rejected by the backend (HTTP {status})",
            action.endpoint()
        ))),
        Outcome::Malformed { status, reason } => Err(CliError::failure(anyhow!(
            "{} returned an unreadable reply (HTTP {status}): {reason}",
            action.endpoint()
        ))),
        Outcome::Unreachable => Err(CliError::failure(anyhow!(
            "could not reach backend at {}",
            ctx.handler.config().base_url
        ))),
    }
}

/// Flag a user passes to fill `field`.
pub(crate) const fn flag_for(field: Field) -> &'static str {
    match field {
        Field::Language => "--language",
        Field::Code | Field::BackendCode => "--code or --file",
        Field::UserInput => "--input",
        Field::AiQuery | Field::BackendQuery => "--query",
        Field::RepoUrl => "--repo-url",
        Field::LocalPath => "--local-path",
        Field::CommitMessage => "--message",
        Field::Branch => "--branch",
    }
}

/// Source text from `--code`, or from `--file` (`-` reads stdin).
pub(crate) fn read_code(code: Option<String>, file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) if path == Path::new("-") => io::read_to_string(io::stdin())
            .context("failed to read code from stdin")
            .map_err(CliError::failure),
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
            .map_err(CliError::failure),
        None => Ok(code.unwrap_or_default()),
    }
}

/// Context against `base_url` whose final text is captured in memory.
#[cfg(test)]
pub(crate) fn capturing_context(base_url: &str) -> (AppContext, crate::output::CapturedText) {
    let captured = crate::output::CapturedText::default();
    let output = crate::output::TerminalOutput::with_writer(Box::new(captured.clone()), false);
    let url = crate::client::parse_url(base_url).expect("valid URL");
    let ctx = AppContext::with_output(url, Some(5), output).expect("context");
    (ctx, captured)
}
