//! Static description of the page: sections, their controls, and outputs.

use codedesk_client::{Action, Field, OutputTarget};

/// Languages the backend can execute, as `(value, label)` pairs.
pub const LANGUAGES: [(&str, &str); 5] = [
    ("python", "Python"),
    ("javascript", "JavaScript"),
    ("c", "C"),
    ("cpp", "C++"),
    ("java", "Java"),
];

/// Label of the empty language choice.
pub const LANGUAGE_PLACEHOLDER: &str = "Select a language";

/// Control used to edit a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Drop-down of [`LANGUAGES`].
    LanguageSelect,
    /// Multi-line editor.
    TextArea,
    /// Single-line input.
    TextInput,
}

impl Control {
    /// Control that edits `field`.
    #[must_use]
    pub const fn for_field(field: Field) -> Self {
        match field {
            Field::Language => Self::LanguageSelect,
            Field::Code | Field::BackendCode | Field::UserInput => Self::TextArea,
            Field::AiQuery
            | Field::BackendQuery
            | Field::RepoUrl
            | Field::LocalPath
            | Field::CommitMessage
            | Field::Branch => Self::TextInput,
        }
    }
}

/// One titled block of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    /// Heading shown above the block.
    pub title: &'static str,
    /// Controls in display order.
    pub fields: &'static [Field],
    /// Buttons in display order.
    pub actions: &'static [Action],
    /// Region the buttons write to.
    pub output: OutputTarget,
}

/// Page sections in display order.
pub const SECTIONS: [Section; 4] = [
    Section {
        title: "Run code",
        fields: &[Field::Language, Field::Code, Field::UserInput],
        actions: &[Action::RunCode],
        output: OutputTarget::ExecutionOutput,
    },
    Section {
        title: "Ask the AI",
        fields: &[Field::AiQuery],
        actions: &[Action::AnalyzeCode],
        output: OutputTarget::AiFeedback,
    },
    Section {
        title: "Backend code review",
        fields: &[Field::BackendCode, Field::BackendQuery],
        actions: &[Action::AnalyzeBackendCode],
        output: OutputTarget::BackendFeedback,
    },
    Section {
        title: "Git",
        fields: &[
            Field::RepoUrl,
            Field::LocalPath,
            Field::CommitMessage,
            Field::Branch,
        ],
        actions: &[Action::GitClone, Action::GitPull, Action::GitCommitPush],
        output: OutputTarget::GitOutput,
    },
];

/// Button caption for `action`.
#[must_use]
pub const fn button_label(action: Action) -> &'static str {
    match action {
        Action::RunCode => "Run",
        Action::AnalyzeCode => "Analyze with AI",
        Action::AnalyzeBackendCode => "Analyze backend code",
        Action::GitClone => "Clone",
        Action::GitPull => "Pull",
        Action::GitCommitPush => "Commit & push",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_one_button() {
        for action in Action::ALL {
            let count = SECTIONS
                .iter()
                .filter(|section| section.actions.contains(&action))
                .count();
            assert_eq!(count, 1, "{}", action.name());
        }
    }

    #[test]
    fn buttons_write_to_their_section_output() {
        for section in SECTIONS {
            for action in section.actions {
                assert_eq!(action.output(), section.output);
            }
        }
    }

    #[test]
    fn every_field_read_by_an_action_is_on_the_page() {
        let on_page: Vec<Field> = SECTIONS
            .iter()
            .flat_map(|section| section.fields.iter().copied())
            .collect();
        for action in Action::ALL {
            for field in action
                .required_fields()
                .iter()
                .chain(action.optional_fields())
            {
                assert!(on_page.contains(field), "{} missing", field.element_id());
            }
        }
        assert_eq!(on_page.len(), Field::ALL.len());
    }

    #[test]
    fn language_choices_match_backend() {
        let values: Vec<&str> = LANGUAGES.iter().map(|(value, _)| *value).collect();
        assert_eq!(values, ["python", "javascript", "c", "cpp", "java"]);
        assert_eq!(Control::for_field(Field::Language), Control::LanguageSelect);
        assert_eq!(Control::for_field(Field::Code), Control::TextArea);
    }
}
