//! Handlers for the repository operations.

use codedesk_client::{Action, Field, FieldValues};

use crate::cli::{GitCloneArgs, GitCommitPushArgs, GitPullArgs};
use crate::client::{AppContext, CliResult};
use crate::commands::execute;

pub(crate) async fn handle_git_clone(ctx: &AppContext, args: GitCloneArgs) -> CliResult<()> {
    let fields = FieldValues::new()
        .with(Field::RepoUrl, args.repo_url.unwrap_or_default())
        .with(Field::LocalPath, args.local_path.unwrap_or_default());
    execute(ctx, Action::GitClone, &fields).await
}

pub(crate) async fn handle_git_pull(ctx: &AppContext, args: GitPullArgs) -> CliResult<()> {
    let fields = FieldValues::new().with(Field::LocalPath, args.local_path.unwrap_or_default());
    execute(ctx, Action::GitPull, &fields).await
}

pub(crate) async fn handle_git_commit_push(
    ctx: &AppContext,
    args: GitCommitPushArgs,
) -> CliResult<()> {
    let fields = FieldValues::new()
        .with(Field::LocalPath, args.local_path.unwrap_or_default())
        .with(Field::CommitMessage, args.message.unwrap_or_default())
        .with(Field::Branch, args.branch.unwrap_or_default());
    execute(ctx, Action::GitCommitPush, &fields).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CliError;
    use crate::commands::capturing_context;
    use codedesk_test_support::backend::{expect_json, reply_json, watch};
    use codedesk_test_support::fixtures::unreachable_base_url;
    use httpmock::MockServer;
    use serde_json::json;

    #[tokio::test]
    async fn clone_posts_repo_and_path() {
        let server = MockServer::start_async().await;
        let mock = expect_json(
            &server,
            "/git/clone",
            json!({"repo_url": "https://github.com/example/repo.git", "local_path": "/srv/repo"}),
            200,
            json!({"message": "Cloned."}),
        );
        let (ctx, printed) = capturing_context(&server.base_url());

        handle_git_clone(
            &ctx,
            GitCloneArgs {
                repo_url: Some("https://github.com/example/repo.git".into()),
                local_path: Some("/srv/repo".into()),
            },
        )
        .await
        .expect("clone should succeed");

        mock.assert();
        assert_eq!(printed.text(), "Cloned.\n");
    }

    #[tokio::test]
    async fn pull_without_path_is_blocked() {
        let server = MockServer::start_async().await;
        let mock = watch(&server, "/git/pull");
        let (ctx, printed) = capturing_context(&server.base_url());

        let err = handle_git_pull(&ctx, GitPullArgs { local_path: None })
            .await
            .expect_err("path missing");

        assert!(matches!(err, CliError::Validation(ref message) if message.contains("--local-path")));
        mock.assert_hits(0);
        assert_eq!(printed.text(), "");
    }

    #[tokio::test]
    async fn pull_sends_whitespace_path_verbatim() {
        let server = MockServer::start_async().await;
        let mock = expect_json(
            &server,
            "/git/pull",
            json!({"local_path": "   "}),
            400,
            json!({"detail": "not a git repository"}),
        );
        let (ctx, printed) = capturing_context(&server.base_url());

        let err = handle_git_pull(
            &ctx,
            GitPullArgs {
                local_path: Some("   ".into()),
            },
        )
        .await
        .expect_err("backend rejects the path");

        mock.assert();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(printed.text(), "Error: not a git repository\n");
    }

    #[tokio::test]
    async fn pull_failure_detail_exits_with_failure() {
        let server = MockServer::start_async().await;
        reply_json(
            &server,
            "/git/pull",
            400,
            json!({"detail": "not a git repository"}),
        );
        let (ctx, printed) = capturing_context(&server.base_url());

        let err = handle_git_pull(
            &ctx,
            GitPullArgs {
                local_path: Some("/tmp/plain".into()),
            },
        )
        .await
        .expect_err("pull rejected");

        assert_eq!(err.exit_code(), 3);
        assert_eq!(printed.text(), "Error: not a git repository\n");
    }

    #[tokio::test]
    async fn commit_push_defaults_branch() {
        let server = MockServer::start_async().await;
        let mock = expect_json(
            &server,
            "/git/commit-push",
            json!({"local_path": "/srv/repo", "commit_message": "fix", "branch": "main"}),
            200,
            json!({"message": "Pushed."}),
        );
        let (ctx, printed) = capturing_context(&server.base_url());

        handle_git_commit_push(
            &ctx,
            GitCommitPushArgs {
                local_path: Some("/srv/repo".into()),
                message: Some("fix".into()),
                branch: None,
            },
        )
        .await
        .expect("push should succeed");

        mock.assert();
        assert_eq!(printed.text(), "Pushed.\n");
    }

    #[tokio::test]
    async fn unreachable_backend_prints_connection_error() {
        let base = unreachable_base_url().expect("free port");
        let (ctx, printed) = capturing_context(&base);

        let err = handle_git_pull(
            &ctx,
            GitPullArgs {
                local_path: Some("/srv/repo".into()),
            },
        )
        .await
        .expect_err("backend is down");

        assert_eq!(err.exit_code(), 3);
        assert_eq!(printed.text(), "Error: Unable to connect to the server.\n");
    }
}
