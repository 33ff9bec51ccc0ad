//! Form validated by the declarative registration schema

use super::{deliver, FocusLatch, Form, SubmitBinding, SubmitOutcome, Variant};
use crate::sink::SubmissionSink;
use crate::state::{FieldName, FormState};
use crate::validation::schema::{registration_schema, Schema};
use crate::validation::ValidationResult;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct SchemaForm {
    schema: Schema,
    state: FormState,
    result: ValidationResult,
    /// Fields edited since the last reset; only these show errors
    changed: BTreeSet<FieldName>,
    /// Set by an invalid submit; reveals errors on every field
    submit_attempted: bool,
    binding: SubmitBinding,
    focus: FocusLatch,
}

impl SchemaForm {
    pub fn new(binding: SubmitBinding) -> Self {
        Self::with_schema(registration_schema(), binding)
    }

    pub fn with_schema(schema: Schema, binding: SubmitBinding) -> Self {
        let state = FormState::new();
        let result = schema.validate(&state);
        Self {
            schema,
            state,
            result,
            changed: BTreeSet::new(),
            submit_attempted: false,
            binding,
            focus: FocusLatch::new(),
        }
    }

    fn is_error_visible(&self, name: FieldName) -> bool {
        self.submit_attempted || self.changed.contains(&name)
    }

    fn revalidate(&mut self) -> bool {
        self.result = self.schema.validate(&self.state);
        self.focus
            .update(self.result.is_valid && self.state.all_filled())
    }

    fn reset(&mut self) {
        self.state.reset();
        self.changed.clear();
        self.submit_attempted = false;
        self.result = self.schema.validate(&self.state);
        self.focus.reset();
    }
}

impl Form for SchemaForm {
    fn variant(&self) -> Variant {
        Variant::Schema
    }

    fn state(&self) -> &FormState {
        &self.state
    }

    fn on_field_change(&mut self, name: FieldName, value: String) -> bool {
        tracing::trace!(field = name.key(), "schema form field changed");
        self.state.set(name, value);
        self.changed.insert(name);
        self.revalidate()
    }

    fn validation(&self) -> &ValidationResult {
        &self.result
    }

    fn visible_errors(&self) -> ValidationResult {
        let visible = |name: FieldName| {
            self.result
                .message(name)
                .filter(|_| self.is_error_visible(name))
                .map(str::to_string)
        };
        ValidationResult {
            email: visible(FieldName::Email),
            password: visible(FieldName::Password),
            duplicate_password: visible(FieldName::DuplicatePassword),
            is_valid: self.result.is_valid,
        }
    }

    fn can_submit(&self) -> bool {
        match self.binding {
            SubmitBinding::AlwaysEnabled => true,
            SubmitBinding::Validity => self.result.is_valid,
        }
    }

    fn on_submit(&mut self, sink: &mut dyn SubmissionSink) -> SubmitOutcome {
        self.result = self.schema.validate(&self.state);
        if !self.result.is_valid {
            self.submit_attempted = true;
            tracing::debug!(
                errors = self.result.messages().count(),
                "schema form submit rejected"
            );
            return SubmitOutcome::Rejected;
        }
        deliver(sink, &self.state.to_submission(), Variant::Schema);
        self.reset();
        SubmitOutcome::Sent
    }
}
