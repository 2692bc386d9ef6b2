//! Handlers for running and analysing code.

use codedesk_client::{Action, Field, FieldValues};

use crate::cli::{AnalyzeArgs, AnalyzeBackendArgs, RunArgs};
use crate::client::{AppContext, CliResult};
use crate::commands::{execute, read_code};

pub(crate) async fn handle_run(ctx: &AppContext, args: RunArgs) -> CliResult<()> {
    let code = read_code(args.source.code, args.source.file.as_deref())?;
    let fields = FieldValues::new()
        .with(Field::Language, args.language.unwrap_or_default())
        .with(Field::Code, code)
        .with(Field::UserInput, args.input.unwrap_or_default());
    execute(ctx, Action::RunCode, &fields).await
}

pub(crate) async fn handle_analyze(ctx: &AppContext, args: AnalyzeArgs) -> CliResult<()> {
    let code = read_code(args.source.code, args.source.file.as_deref())?;
    let fields = FieldValues::new()
        .with(Field::Language, args.language.unwrap_or_default())
        .with(Field::Code, code)
        .with(Field::AiQuery, args.query.unwrap_or_default());
    execute(ctx, Action::AnalyzeCode, &fields).await
}

pub(crate) async fn handle_analyze_backend(
    ctx: &AppContext,
    args: AnalyzeBackendArgs,
) -> CliResult<()> {
    let code = read_code(args.source.code, args.source.file.as_deref())?;
    let fields = FieldValues::new()
        .with(Field::BackendCode, code)
        .with(Field::BackendQuery, args.query.unwrap_or_default());
    execute(ctx, Action::AnalyzeBackendCode, &fields).await
}
