//! Argument parsing and dispatch for the `codedesk` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use codedesk_client::DEFAULT_BASE_URL;
use codedesk_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
use tracing::debug;
use url::Url;

use crate::client::{AppContext, CliResult, parse_url};
use crate::commands::code::{handle_analyze, handle_analyze_backend, handle_run};
use crate::commands::git::{handle_git_clone, handle_git_commit_push, handle_git_pull};

/// Parses CLI arguments, installs logging, and executes the requested
/// command. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.into(),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: logging disabled: {err:#}");
    }
    debug!(command = command_label(&cli.command), api_url = %cli.api_url, "starting");

    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let ctx = AppContext::new(cli.api_url, cli.timeout)?;

    match cli.command {
        Command::Run(args) => handle_run(&ctx, args).await,
        Command::Analyze(args) => handle_analyze(&ctx, args).await,
        Command::AnalyzeBackend(args) => handle_analyze_backend(&ctx, args).await,
        Command::Git(git) => match git {
            GitCommand::Clone(args) => handle_git_clone(&ctx, args).await,
            GitCommand::Pull(args) => handle_git_pull(&ctx, args).await,
            GitCommand::CommitPush(args) => handle_git_commit_push(&ctx, args).await,
        },
    }
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Run(_) => "run",
        Command::Analyze(_) => "analyze",
        Command::AnalyzeBackend(_) => "analyze-backend",
        Command::Git(GitCommand::Clone(_)) => "git clone",
        Command::Git(GitCommand::Pull(_)) => "git pull",
        Command::Git(GitCommand::CommitPush(_)) => "git commit-push",
    }
}

#[derive(Parser)]
#[command(
    name = "codedesk",
    version,
    about = "Run, analyse, and version code through a codedesk backend"
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "CODEDESK_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_BASE_URL
    )]
    pub(crate) api_url: Url,
    #[arg(
        long,
        global = true,
        env = "CODEDESK_HTTP_TIMEOUT_SECS",
        help = "Abort a request after this many seconds (no limit when unset)"
    )]
    pub(crate) timeout: Option<u64>,
    #[arg(
        long,
        global = true,
        env = "CODEDESK_LOG_LEVEL",
        default_value = DEFAULT_LOG_LEVEL
    )]
    pub(crate) log_level: String,
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub(crate) log_format: LogFormatArg,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Execute code on the backend and print its output.
    Run(RunArgs),
    /// Ask the AI assistant about a piece of code.
    Analyze(AnalyzeArgs),
    /// Ask the AI assistant to review backend code.
    AnalyzeBackend(AnalyzeBackendArgs),
    /// Repository operations performed by the backend.
    #[command(subcommand)]
    Git(GitCommand),
}

#[derive(Subcommand)]
pub(crate) enum GitCommand {
    /// Clone a remote repository into a backend path.
    Clone(GitCloneArgs),
    /// Pull the latest changes for a backend checkout.
    Pull(GitPullArgs),
    /// Commit all changes and push them.
    CommitPush(GitCommitPushArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct CodeSourceArgs {
    /// Source text passed inline.
    #[arg(long, conflicts_with = "file")]
    pub(crate) code: Option<String>,
    /// Read source text from a file; `-` reads stdin.
    #[arg(long, value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RunArgs {
    #[arg(long)]
    pub(crate) language: Option<String>,
    #[command(flatten)]
    pub(crate) source: CodeSourceArgs,
    /// Text supplied to the program on standard input.
    #[arg(long)]
    pub(crate) input: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    #[arg(long)]
    pub(crate) language: Option<String>,
    #[command(flatten)]
    pub(crate) source: CodeSourceArgs,
    #[arg(long)]
    pub(crate) query: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeBackendArgs {
    #[command(flatten)]
    pub(crate) source: CodeSourceArgs,
    #[arg(long)]
    pub(crate) query: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct GitCloneArgs {
    #[arg(long)]
    pub(crate) repo_url: Option<String>,
    #[arg(long)]
    pub(crate) local_path: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct GitPullArgs {
    #[arg(long)]
    pub(crate) local_path: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct GitCommitPushArgs {
    #[arg(long)]
    pub(crate) local_path: Option<String>,
    #[arg(long, short = 'm')]
    pub(crate) message: Option<String>,
    /// Target branch; `main` when omitted or blank.
    #[arg(long)]
    pub(crate) branch: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CliError;
    use codedesk_test_support::backend::{expect_json, watch};
    use codedesk_test_support::fixtures::unreachable_base_url;
    use httpmock::MockServer;
    use serde_json::json;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn defaults_target_local_backend() {
        let cli = parse(&["codedesk", "git", "pull", "--local-path", "/srv/repo"]);
        assert_eq!(cli.api_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(cli.timeout, None);
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.log_format, LogFormatArg::Pretty);
        assert_eq!(command_label(&cli.command), "git pull");
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = parse(&[
            "codedesk",
            "run",
            "--language",
            "python",
            "--code",
            "print(1)",
            "--api-url",
            "https://desk.example.com/api",
            "--timeout",
            "5",
            "--log-format",
            "json",
        ]);
        assert_eq!(cli.api_url.as_str(), "https://desk.example.com/api");
        assert_eq!(cli.timeout, Some(5));
        assert_eq!(cli.log_format, LogFormatArg::Json);
        let Command::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.language.as_deref(), Some("python"));
        assert_eq!(args.source.code.as_deref(), Some("print(1)"));
    }

    #[test]
    fn log_format_flag_selects_subscriber_format() {
        assert_eq!(LogFormat::from(LogFormatArg::Json), LogFormat::Json);
        assert_eq!(LogFormat::from(LogFormatArg::Pretty), LogFormat::Pretty);
    }

    #[test]
    fn invalid_api_url_is_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["codedesk", "--api-url", "ftp://host", "run"]);
        assert!(result.is_err());
    }

    #[test]
    fn inline_code_and_file_conflict() {
        let result = Cli::try_parse_from([
            "codedesk", "run", "--code", "print(1)", "--file", "main.py",
        ]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn dispatch_runs_commit_push_against_backend() {
        let server = MockServer::start_async().await;
        let mock = expect_json(
            &server,
            "/git/commit-push",
            json!({"local_path": "/srv/repo", "commit_message": "wip", "branch": "feature"}),
            200,
            json!({"message": "Pushed to feature"}),
        );
        let cli = parse(&[
            "codedesk",
            "--api-url",
            &server.base_url(),
            "git",
            "commit-push",
            "--local-path",
            "/srv/repo",
            "-m",
            "wip",
            "--branch",
            "feature",
        ]);

        dispatch(cli).await.expect("commit-push should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn dispatch_reports_missing_fields_as_validation() {
        let server = MockServer::start_async().await;
        let mock = watch(&server, "/git/clone");
        let cli = parse(&[
            "codedesk",
            "--api-url",
            &server.base_url(),
            "git",
            "clone",
            "--local-path",
            "/srv/repo",
        ]);

        let err = dispatch(cli).await.expect_err("repo url missing");
        assert!(matches!(err, CliError::Validation(ref message) if message.contains("--repo-url")));
        assert_eq!(err.exit_code(), 2);
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn dispatch_reports_unreachable_backend_as_failure() {
        let base = unreachable_base_url().expect("free port");
        let cli = parse(&[
            "codedesk",
            "--api-url",
            &base,
            "git",
            "pull",
            "--local-path",
            "/srv/repo",
        ]);

        let err = dispatch(cli).await.expect_err("backend is down");
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("could not reach backend"));
    }
}
