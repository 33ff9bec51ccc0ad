//! Controlled form validated by the hand-written rules

use super::{deliver, FocusLatch, Form, SubmitOutcome, Variant};
use crate::sink::SubmissionSink;
use crate::state::{FieldName, FormState};
use crate::validation::{rules, ValidationResult};

#[derive(Debug, Clone)]
pub struct ManualForm {
    state: FormState,
    /// Cached `rules::validate(&state)`, refreshed after every change
    result: ValidationResult,
    focus: FocusLatch,
}

impl ManualForm {
    pub fn new() -> Self {
        let state = FormState::new();
        let result = rules::validate(&state);
        Self {
            state,
            result,
            focus: FocusLatch::new(),
        }
    }

    fn revalidate(&mut self) -> bool {
        self.result = rules::validate(&self.state);
        self.focus.update(self.result.is_valid)
    }
}

impl Default for ManualForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ManualForm {
    fn variant(&self) -> Variant {
        Variant::Manual
    }

    fn state(&self) -> &FormState {
        &self.state
    }

    fn on_field_change(&mut self, name: FieldName, value: String) -> bool {
        tracing::trace!(field = name.key(), "manual form field changed");
        self.state.set(name, value);
        self.revalidate()
    }

    fn validation(&self) -> &ValidationResult {
        &self.result
    }

    fn can_submit(&self) -> bool {
        self.result.is_valid
    }

    fn on_submit(&mut self, sink: &mut dyn SubmissionSink) -> SubmitOutcome {
        // Guard against a stale cache; values stay in place after sending.
        self.result = rules::validate(&self.state);
        if !self.result.is_valid {
            tracing::debug!("manual form submit rejected");
            return SubmitOutcome::Rejected;
        }
        deliver(sink, &self.state.to_submission(), Variant::Manual);
        SubmitOutcome::Sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MockSubmissionSink, SinkError};
    use crate::state::Submission;
    use crate::validation::rules::{EMAIL_FORMAT, PASSWORD_COMPLEXITY};
    use pretty_assertions::assert_eq;

    fn fill(form: &mut ManualForm, email: &str, password: &str, repeat: &str) -> Vec<bool> {
        vec![
            form.on_field_change(FieldName::Email, email.to_string()),
            form.on_field_change(FieldName::Password, password.to_string()),
            form.on_field_change(FieldName::DuplicatePassword, repeat.to_string()),
        ]
    }

    #[test]
    fn test_new_form_is_invalid_without_messages() {
        let form = ManualForm::new();
        assert!(!form.can_submit());
        assert_eq!(form.validation().display_text(), "");
    }

    #[test]
    fn test_valid_scenario_requests_focus_once() {
        let mut form = ManualForm::new();
        let focus = fill(&mut form, "a@b.co", "Abcdef1!", "Abcdef1!");
        assert_eq!(focus, vec![false, false, true]);
        assert!(form.validation().is_valid);
        assert!(form.can_submit());
        assert_eq!(form.validation().display_text(), "");
    }

    #[test]
    fn test_bad_email_keeps_submit_disabled() {
        let mut form = ManualForm::new();
        form.on_field_change(FieldName::Email, "bad".to_string());
        assert_eq!(form.validation().email.as_deref(), Some(EMAIL_FORMAT));
        assert!(!form.can_submit());
    }

    #[test]
    fn test_complexity_error_within_length() {
        let mut form = ManualForm::new();
        form.on_field_change(FieldName::Password, "abcdefg1!".to_string());
        assert_eq!(
            form.validation().password.as_deref(),
            Some(PASSWORD_COMPLEXITY)
        );
    }

    #[test]
    fn test_editing_password_revalidates_duplicate() {
        let mut form = ManualForm::new();
        fill(&mut form, "a@b.co", "Abcdef1!", "Abcdef1!");
        assert!(!form.on_field_change(FieldName::Password, "Abcdef1?".to_string()));
        assert!(form.validation().has_error(FieldName::DuplicatePassword));
        assert!(!form.can_submit());
        // Fixing it again is a new transition into validity.
        assert!(form.on_field_change(FieldName::Password, "Abcdef1!".to_string()));
    }

    #[test]
    fn test_submit_sends_and_keeps_values() {
        let mut form = ManualForm::new();
        fill(&mut form, "a@b.co", "Abcdef1!", "Abcdef1!");

        let mut sink = MockSubmissionSink::new();
        sink.expect_send()
            .withf(|s: &Submission| {
                s.email == "a@b.co"
                    && s.password == "Abcdef1!"
                    && s.duplicate_password == "Abcdef1!"
            })
            .times(1)
            .returning(|_| Ok(()));

        assert_eq!(form.on_submit(&mut sink), SubmitOutcome::Sent);
        assert_eq!(form.state().get(FieldName::Email), "a@b.co");
        assert!(form.state().all_filled());
    }

    #[test]
    fn test_invalid_submit_never_reaches_sink() {
        let mut form = ManualForm::new();
        fill(&mut form, "bad", "", "");

        let mut sink = MockSubmissionSink::new();
        sink.expect_send().times(0);

        assert_eq!(form.on_submit(&mut sink), SubmitOutcome::Rejected);
    }

    #[test]
    fn test_sink_failure_is_not_surfaced() {
        let mut form = ManualForm::new();
        fill(&mut form, "a@b.co", "Abcdef1!", "Abcdef1!");

        let mut sink = MockSubmissionSink::new();
        sink.expect_send().times(1).returning(|_| {
            Err(SinkError::Encode(
                serde_json::from_str::<u8>("x").unwrap_err(),
            ))
        });

        assert_eq!(form.on_submit(&mut sink), SubmitOutcome::Sent);
        assert_eq!(form.validation().display_text(), "");
    }
}
