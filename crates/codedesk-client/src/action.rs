//! The six user actions: which fields they read, where they post, and what
//! they show while waiting, on success, and when input is missing.

use codedesk_api_models::{
    AnalyzeBackendCodeRequest, AnalyzeCodeRequest, GitCloneRequest, GitCommitPushRequest,
    GitPullRequest, ReplyField, RunCodeRequest,
};
use serde_json::Value;
use thiserror::Error;

use crate::field::{Field, FieldSource};

/// A user-triggered request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Execute code on the backend.
    RunCode,
    /// Ask the model about the main code editor's contents.
    AnalyzeCode,
    /// Ask the model about the backend code editor's contents.
    AnalyzeBackendCode,
    /// Clone a remote repository on the backend host.
    GitClone,
    /// Pull the latest changes into a working copy.
    GitPull,
    /// Commit all changes in a working copy and push them.
    GitCommitPush,
}

/// Page region an action writes its status and result into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputTarget {
    /// Program output panel.
    ExecutionOutput,
    /// Code analysis panel.
    AiFeedback,
    /// Backend code analysis panel.
    BackendFeedback,
    /// Git operations panel.
    GitOutput,
}

impl OutputTarget {
    /// DOM element id of the region.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::ExecutionOutput => "output-content",
            Self::AiFeedback => "ai-feedback",
            Self::BackendFeedback => "backend-feedback",
            Self::GitOutput => "git-output",
        }
    }
}

impl Action {
    /// Every action, in page order.
    pub const ALL: [Self; 6] = [
        Self::RunCode,
        Self::AnalyzeCode,
        Self::AnalyzeBackendCode,
        Self::GitClone,
        Self::GitPull,
        Self::GitCommitPush,
    ];

    /// Stable name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RunCode => "run_code",
            Self::AnalyzeCode => "analyze_code",
            Self::AnalyzeBackendCode => "analyze_backend_code",
            Self::GitClone => "git_clone",
            Self::GitPull => "git_pull",
            Self::GitCommitPush => "git_commit_push",
        }
    }

    /// Endpoint path, relative to the backend base URL.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::RunCode => "/check-code",
            Self::AnalyzeCode => "/analyze-code",
            Self::AnalyzeBackendCode => "/analyze-backend-code",
            Self::GitClone => "/git/clone",
            Self::GitPull => "/git/pull",
            Self::GitCommitPush => "/git/commit-push",
        }
    }

    /// DOM element id of the button bound to this action.
    #[must_use]
    pub const fn trigger_id(self) -> &'static str {
        match self {
            Self::RunCode => "run-code",
            Self::AnalyzeCode => "analyze-code",
            Self::AnalyzeBackendCode => "analyze-backend-code",
            Self::GitClone => "git-clone",
            Self::GitPull => "git-pull",
            Self::GitCommitPush => "git-commit-push",
        }
    }

    /// Fields that must be non-empty before anything is sent.
    #[must_use]
    pub const fn required_fields(self) -> &'static [Field] {
        match self {
            Self::RunCode => &[Field::Language, Field::Code],
            Self::AnalyzeCode => &[Field::Language, Field::Code, Field::AiQuery],
            Self::AnalyzeBackendCode => &[Field::BackendCode, Field::BackendQuery],
            Self::GitClone => &[Field::RepoUrl, Field::LocalPath],
            Self::GitPull => &[Field::LocalPath],
            Self::GitCommitPush => &[Field::LocalPath, Field::CommitMessage],
        }
    }

    /// Fields read but allowed to be empty.
    #[must_use]
    pub const fn optional_fields(self) -> &'static [Field] {
        match self {
            Self::RunCode => &[Field::UserInput],
            Self::GitCommitPush => &[Field::Branch],
            Self::AnalyzeCode | Self::AnalyzeBackendCode | Self::GitClone | Self::GitPull => &[],
        }
    }

    /// Reply key carrying the success text.
    #[must_use]
    pub const fn reply_field(self) -> ReplyField {
        match self {
            Self::AnalyzeCode | Self::AnalyzeBackendCode => ReplyField::Feedback,
            Self::RunCode | Self::GitClone | Self::GitPull | Self::GitCommitPush => {
                ReplyField::Message
            }
        }
    }

    /// Region the action writes to.
    #[must_use]
    pub const fn output(self) -> OutputTarget {
        match self {
            Self::RunCode => OutputTarget::ExecutionOutput,
            Self::AnalyzeCode => OutputTarget::AiFeedback,
            Self::AnalyzeBackendCode => OutputTarget::BackendFeedback,
            Self::GitClone | Self::GitPull | Self::GitCommitPush => OutputTarget::GitOutput,
        }
    }

    /// Placeholder shown while the request is outstanding.
    #[must_use]
    pub const fn pending_text(self) -> &'static str {
        match self {
            Self::RunCode => "Processing...",
            Self::AnalyzeCode => "Analyzing with AI...",
            Self::AnalyzeBackendCode => "Analyzing backend code with AI...",
            Self::GitClone => "Cloning repository...",
            Self::GitPull => "Pulling latest changes...",
            Self::GitCommitPush => "Committing and pushing changes...",
        }
    }

    /// Text shown when a successful reply carries no text of its own.
    #[must_use]
    pub const fn completion_text(self) -> &'static str {
        match self {
            Self::RunCode => "Execution completed.",
            Self::AnalyzeCode => "AI analysis completed.",
            Self::AnalyzeBackendCode => "Backend code analysis completed.",
            Self::GitClone => "Repository cloned.",
            Self::GitPull => "Pull completed.",
            Self::GitCommitPush => "Commit and push completed.",
        }
    }

    /// Blocking notification raised when a required field is empty.
    #[must_use]
    pub const fn missing_fields_alert(self) -> &'static str {
        match self {
            Self::RunCode => "Please select a language and enter code.",
            Self::AnalyzeCode => {
                "Please select a language, enter code, and provide a query for AI analysis."
            }
            Self::AnalyzeBackendCode => "Please enter backend code and a query for analysis.",
            Self::GitClone => "Please enter a repository URL and a local path.",
            Self::GitPull => "Please enter the local repository path.",
            Self::GitCommitPush => "Please enter the local repository path and a commit message.",
        }
    }

    /// Required fields that are currently empty.
    #[must_use]
    pub fn missing_fields(self, source: &dyn FieldSource) -> Vec<Field> {
        self.required_fields()
            .iter()
            .copied()
            .filter(|field| source.value(*field).is_empty())
            .collect()
    }

    /// Read the action's fields and build its payload.
    ///
    /// Values are taken verbatim. Whitespace counts as a value.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFields`] when any required field is empty.
    pub fn collect(self, source: &dyn FieldSource) -> Result<ActionRequest, MissingFields> {
        let missing = self.missing_fields(source);
        if !missing.is_empty() {
            return Err(MissingFields {
                action: self,
                fields: missing,
            });
        }

        let read = |field| source.value(field);
        let request = match self {
            Self::RunCode => {
                let user_input = read(Field::UserInput);
                ActionRequest::RunCode(RunCodeRequest {
                    language: read(Field::Language),
                    code: read(Field::Code),
                    user_input: (!user_input.is_empty()).then_some(user_input),
                })
            }
            Self::AnalyzeCode => ActionRequest::AnalyzeCode(AnalyzeCodeRequest {
                language: read(Field::Language),
                code: read(Field::Code),
                query: read(Field::AiQuery),
            }),
            Self::AnalyzeBackendCode => {
                ActionRequest::AnalyzeBackendCode(AnalyzeBackendCodeRequest {
                    code: read(Field::BackendCode),
                    query: read(Field::BackendQuery),
                })
            }
            Self::GitClone => ActionRequest::GitClone(GitCloneRequest {
                repo_url: read(Field::RepoUrl),
                local_path: read(Field::LocalPath),
            }),
            Self::GitPull => ActionRequest::GitPull(GitPullRequest {
                local_path: read(Field::LocalPath),
            }),
            Self::GitCommitPush => ActionRequest::GitCommitPush(GitCommitPushRequest::new(
                read(Field::LocalPath),
                read(Field::CommitMessage),
                &read(Field::Branch),
            )),
        };
        Ok(request)
    }
}

/// Presence check failure; its display text is the blocking alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .action.missing_fields_alert())]
pub struct MissingFields {
    /// Action that was blocked.
    pub action: Action,
    /// Required fields found empty, in declaration order.
    pub fields: Vec<Field>,
}

impl MissingFields {
    /// Text for the blocking notification.
    #[must_use]
    pub const fn alert(&self) -> &'static str {
        self.action.missing_fields_alert()
    }
}

/// Payload built for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    /// `POST /check-code`
    RunCode(RunCodeRequest),
    /// `POST /analyze-code`
    AnalyzeCode(AnalyzeCodeRequest),
    /// `POST /analyze-backend-code`
    AnalyzeBackendCode(AnalyzeBackendCodeRequest),
    /// `POST /git/clone`
    GitClone(GitCloneRequest),
    /// `POST /git/pull`
    GitPull(GitPullRequest),
    /// `POST /git/commit-push`
    GitCommitPush(GitCommitPushRequest),
}

impl ActionRequest {
    /// Action this payload belongs to.
    #[must_use]
    pub const fn action(&self) -> Action {
        match self {
            Self::RunCode(_) => Action::RunCode,
            Self::AnalyzeCode(_) => Action::AnalyzeCode,
            Self::AnalyzeBackendCode(_) => Action::AnalyzeBackendCode,
            Self::GitClone(_) => Action::GitClone,
            Self::GitPull(_) => Action::GitPull,
            Self::GitCommitPush(_) => Action::GitCommitPush,
        }
    }

    /// Encode the payload as a JSON value.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` encoding failures.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::RunCode(body) => serde_json::to_value(body),
            Self::AnalyzeCode(body) => serde_json::to_value(body),
            Self::AnalyzeBackendCode(body) => serde_json::to_value(body),
            Self::GitClone(body) => serde_json::to_value(body),
            Self::GitPull(body) => serde_json::to_value(body),
            Self::GitCommitPush(body) => serde_json::to_value(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValues;
    use serde_json::json;

    fn every_field_filled() -> FieldValues {
        Field::ALL
            .iter()
            .fold(FieldValues::new(), |values, field| {
                values.with(*field, format!("{}-value", field.element_id()))
            })
    }

    #[test]
    fn each_required_field_blocks_when_blank() {
        for action in Action::ALL {
            for blank in action.required_fields() {
                let mut values = every_field_filled();
                values.set(*blank, "");
                let missing = action
                    .collect(&values)
                    .expect_err("blank required field must block");
                assert_eq!(missing.fields, vec![*blank], "{action:?} / {blank:?}");
                assert_eq!(missing.alert(), action.missing_fields_alert());
            }
        }
    }

    #[test]
    fn whitespace_only_value_is_present() {
        let values = FieldValues::new()
            .with(Field::Language, "python")
            .with(Field::Code, " ");
        let request = Action::RunCode
            .collect(&values)
            .expect("whitespace is a value");
        assert_eq!(
            request.to_json().expect("encode"),
            json!({"language": "python", "code": " "})
        );
    }

    #[test]
    fn all_blank_reports_every_required_field() {
        let missing = Action::AnalyzeCode
            .collect(&FieldValues::new())
            .expect_err("empty form");
        assert_eq!(
            missing.fields,
            vec![Field::Language, Field::Code, Field::AiQuery]
        );
        assert_eq!(
            missing.to_string(),
            "Please select a language, enter code, and provide a query for AI analysis."
        );
    }

    #[test]
    fn optional_fields_never_block() {
        for action in Action::ALL {
            let mut values = every_field_filled();
            for optional in action.optional_fields() {
                values.set(*optional, "");
            }
            assert!(action.collect(&values).is_ok(), "{action:?}");
        }
    }

    #[test]
    fn payloads_contain_exactly_the_action_fields() {
        let values = every_field_filled();
        let expected = [
            (
                Action::RunCode,
                json!({
                    "language": "language-value",
                    "code": "code-value",
                    "user_input": "user-input-value"
                }),
            ),
            (
                Action::AnalyzeCode,
                json!({
                    "language": "language-value",
                    "code": "code-value",
                    "query": "ai-query-value"
                }),
            ),
            (
                Action::AnalyzeBackendCode,
                json!({"code": "backend-code-value", "query": "backend-query-value"}),
            ),
            (
                Action::GitClone,
                json!({"repo_url": "repo-url-value", "local_path": "local-path-value"}),
            ),
            (Action::GitPull, json!({"local_path": "local-path-value"})),
            (
                Action::GitCommitPush,
                json!({
                    "local_path": "local-path-value",
                    "commit_message": "commit-message-value",
                    "branch": "branch-value"
                }),
            ),
        ];
        for (action, body) in expected {
            let request = action.collect(&values).expect("complete form");
            assert_eq!(request.action(), action);
            assert_eq!(request.to_json().expect("encode"), body, "{action:?}");
        }
    }

    #[test]
    fn values_are_sent_untrimmed() {
        let values = FieldValues::new()
            .with(Field::Language, "python")
            .with(Field::Code, "  print(1)\n");
        let request = Action::RunCode.collect(&values).expect("complete");
        assert_eq!(
            request.to_json().expect("encode"),
            json!({"language": "python", "code": "  print(1)\n"})
        );
    }

    #[test]
    fn blank_branch_becomes_main() {
        let values = FieldValues::new()
            .with(Field::LocalPath, "/srv/repo")
            .with(Field::CommitMessage, "update docs");
        let request = Action::GitCommitPush.collect(&values).expect("complete");
        assert_eq!(request.to_json().expect("encode")["branch"], json!("main"));
    }

    #[test]
    fn git_actions_share_one_region() {
        assert_eq!(Action::GitClone.output(), OutputTarget::GitOutput);
        assert_eq!(Action::GitPull.output(), OutputTarget::GitOutput);
        assert_eq!(Action::GitCommitPush.output(), OutputTarget::GitOutput);
        assert_eq!(Action::RunCode.output().element_id(), "output-content");
    }
}
