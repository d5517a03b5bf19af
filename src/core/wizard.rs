//! Multi-step project inquiry intake.
//!
//! The wizard walks a fixed, ordered list of fields:
//!
//! ```text
//! Idle -> AwaitingField(0) -> ... -> AwaitingField(n-1) -> Submitting -> Idle
//! ```
//!
//! Each non-blank answer advances one step. After the last answer the
//! wizard hands out the finished [`InquiryRecord`] and waits in
//! `Submitting` until the caller reports the commit with
//! [`InquiryWizard::finish`].

use chrono::{DateTime, Utc};

use crate::models::{InquiryAnswer, InquiryField, InquiryRecord};

/// Where the wizard is in its pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardState {
    #[default]
    Idle,
    /// Waiting for the answer to field `i`
    AwaitingField(usize),
    /// All answers in; the record is being committed
    Submitting,
}

/// Result of feeding one line to the wizard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardStep {
    /// Answer stored; this is the next question.
    Prompt(String),
    /// Last answer stored; the record is ready for the sink.
    Complete(InquiryRecord),
    /// Blank input, or the wizard is not collecting. Nothing changed.
    Rejected,
}

#[derive(Clone, Debug)]
pub struct InquiryWizard {
    fields: Vec<InquiryField>,
    answers: Vec<String>,
    state: WizardState,
}

impl InquiryWizard {
    pub fn new(fields: Vec<InquiryField>) -> Self {
        Self {
            fields,
            answers: Vec::new(),
            state: WizardState::Idle,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == WizardState::Idle
    }

    /// Whether submitted lines should be routed to the wizard.
    pub fn is_collecting(&self) -> bool {
        matches!(self.state, WizardState::AwaitingField(_))
    }

    /// Begin a pass and return the first question.
    ///
    /// Returns `None` (and stays put) unless idle with at least one field.
    pub fn start(&mut self) -> Option<&str> {
        if !self.is_idle() {
            return None;
        }
        let first = self.fields.first()?;
        self.answers.clear();
        self.state = WizardState::AwaitingField(0);
        Some(&first.prompt)
    }

    /// Store `input` as the answer to the pending field.
    pub fn accept(&mut self, input: &str, now: DateTime<Utc>) -> WizardStep {
        let WizardState::AwaitingField(index) = self.state else {
            return WizardStep::Rejected;
        };
        let answer = input.trim();
        if answer.is_empty() {
            return WizardStep::Rejected;
        }

        self.answers.push(answer.to_string());
        let next = index + 1;

        match self.fields.get(next) {
            Some(field) => {
                self.state = WizardState::AwaitingField(next);
                WizardStep::Prompt(field.prompt.clone())
            }
            None => {
                self.state = WizardState::Submitting;
                let answers = self
                    .fields
                    .iter()
                    .zip(self.answers.drain(..))
                    .map(|(field, value)| InquiryAnswer {
                        key: field.key.clone(),
                        value,
                    })
                    .collect();
                WizardStep::Complete(InquiryRecord::new(answers, now))
            }
        }
    }

    /// Return to `Idle` once the submitted record has been committed.
    pub fn finish(&mut self) {
        if self.state == WizardState::Submitting {
            self.state = WizardState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InquiryStatus;

    fn fields() -> Vec<InquiryField> {
        vec![
            InquiryField::new("name", "NAME?"),
            InquiryField::new("contact", "CONTACT?"),
            InquiryField::new("details", "DETAILS?"),
        ]
    }

    #[test]
    fn test_full_pass() {
        let mut wizard = InquiryWizard::new(fields());
        assert_eq!(wizard.start(), Some("NAME?"));
        assert_eq!(wizard.state(), WizardState::AwaitingField(0));

        let now = Utc::now();
        assert_eq!(
            wizard.accept("Kim", now),
            WizardStep::Prompt("CONTACT?".to_string())
        );
        assert_eq!(
            wizard.accept("kim@example.com", now),
            WizardStep::Prompt("DETAILS?".to_string())
        );

        let WizardStep::Complete(record) = wizard.accept("A new platform", now) else {
            panic!("Expected Complete");
        };
        assert_eq!(record.values(), vec!["Kim", "kim@example.com", "A new platform"]);
        assert_eq!(record.field("details"), Some("A new platform"));
        assert_eq!(record.status, InquiryStatus::New);
        assert_eq!(wizard.state(), WizardState::Submitting);

        wizard.finish();
        assert!(wizard.is_idle());
    }

    #[test]
    fn test_blank_answer_does_not_advance() {
        let mut wizard = InquiryWizard::new(fields());
        wizard.start();
        assert_eq!(wizard.accept("   ", Utc::now()), WizardStep::Rejected);
        assert_eq!(wizard.state(), WizardState::AwaitingField(0));
    }

    #[test]
    fn test_answers_are_trimmed() {
        let mut wizard = InquiryWizard::new(vec![InquiryField::new("name", "NAME?")]);
        wizard.start();
        let WizardStep::Complete(record) = wizard.accept("  Kim  ", Utc::now()) else {
            panic!("Expected Complete");
        };
        assert_eq!(record.field("name"), Some("Kim"));
    }

    #[test]
    fn test_accept_while_idle_is_rejected() {
        let mut wizard = InquiryWizard::new(fields());
        assert_eq!(wizard.accept("Kim", Utc::now()), WizardStep::Rejected);
        assert!(wizard.is_idle());
    }

    #[test]
    fn test_accept_while_submitting_is_rejected() {
        let mut wizard = InquiryWizard::new(vec![InquiryField::new("name", "NAME?")]);
        wizard.start();
        wizard.accept("Kim", Utc::now());
        assert_eq!(wizard.accept("again", Utc::now()), WizardStep::Rejected);
        assert_eq!(wizard.state(), WizardState::Submitting);
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut wizard = InquiryWizard::new(fields());
        wizard.start();
        wizard.accept("Kim", Utc::now());
        assert_eq!(wizard.start(), None);
        assert_eq!(wizard.state(), WizardState::AwaitingField(1));
    }

    #[test]
    fn test_start_without_fields() {
        let mut wizard = InquiryWizard::new(vec![]);
        assert_eq!(wizard.start(), None);
        assert!(wizard.is_idle());
    }

    #[test]
    fn test_finish_only_leaves_submitting() {
        let mut wizard = InquiryWizard::new(fields());
        wizard.start();
        wizard.finish();
        assert_eq!(wizard.state(), WizardState::AwaitingField(0));
    }

    #[test]
    fn test_second_pass_starts_fresh() {
        let mut wizard = InquiryWizard::new(vec![InquiryField::new("name", "NAME?")]);
        wizard.start();
        wizard.accept("First", Utc::now());
        wizard.finish();

        wizard.start();
        let WizardStep::Complete(record) = wizard.accept("Second", Utc::now()) else {
            panic!("Expected Complete");
        };
        assert_eq!(record.values(), vec!["Second"]);
    }
}
