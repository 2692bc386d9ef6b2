//! Named form controls and the sources that supply their current text.

use std::collections::BTreeMap;

/// A named input control on the page (or its terminal equivalent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Language selector shared by run and analyze.
    Language,
    /// Main code editor shared by run and analyze.
    Code,
    /// Optional standard input for a run.
    UserInput,
    /// Question for code analysis.
    AiQuery,
    /// Backend code editor.
    BackendCode,
    /// Question for backend code analysis.
    BackendQuery,
    /// Remote repository to clone.
    RepoUrl,
    /// Working copy path on the backend host.
    LocalPath,
    /// Commit message for commit/push.
    CommitMessage,
    /// Branch for commit/push; empty means the default branch.
    Branch,
}

impl Field {
    /// Every field, in page order.
    pub const ALL: [Self; 10] = [
        Self::Language,
        Self::Code,
        Self::UserInput,
        Self::AiQuery,
        Self::BackendCode,
        Self::BackendQuery,
        Self::RepoUrl,
        Self::LocalPath,
        Self::CommitMessage,
        Self::Branch,
    ];

    /// DOM element id of the control.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Code => "code",
            Self::UserInput => "user-input",
            Self::AiQuery => "ai-query",
            Self::BackendCode => "backend-code",
            Self::BackendQuery => "backend-query",
            Self::RepoUrl => "repo-url",
            Self::LocalPath => "local-path",
            Self::CommitMessage => "commit-message",
            Self::Branch => "branch",
        }
    }

    /// Short human label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Code => "code",
            Self::UserInput => "program input",
            Self::AiQuery => "AI query",
            Self::BackendCode => "backend code",
            Self::BackendQuery => "backend query",
            Self::RepoUrl => "repository URL",
            Self::LocalPath => "local path",
            Self::CommitMessage => "commit message",
            Self::Branch => "branch",
        }
    }
}

/// Anything that can report the current text of a field.
pub trait FieldSource {
    /// Current text of `field`; an absent control reads as empty.
    fn value(&self, field: Field) -> String;
}

/// Plain field-to-text map used by front-ends that keep their own form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<Field, String>,
}

impl FieldValues {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Replace the text of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Borrow the text of `field`, or `""` when it was never set.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }
}

impl FieldSource for FieldValues {
    fn value(&self, field: Field) -> String {
        self.get(field).to_string()
    }
}
