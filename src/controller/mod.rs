//! Registration form controllers
//!
//! Two interchangeable implementations of the same contract:
//! - `manual`: hand-written rules, submit disabled until valid
//! - `schema_form`: declarative schema, change-triggered revalidation
//!
//! Both re-derive their [`ValidationResult`] on every field change and report
//! when focus should jump to the submit control.

mod focus;
mod manual;
mod schema_form;

pub use focus::FocusLatch;
pub use manual::ManualForm;
pub use schema_form::SchemaForm;

use crate::sink::SubmissionSink;
use crate::state::{FieldName, FormState, Submission};
use crate::validation::ValidationResult;
use serde::{Deserialize, Serialize};

/// Which form implementation is active
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Manual,
    Schema,
}

impl Variant {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Manual => Self::Schema,
            Self::Schema => Self::Manual,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Manual => "Registration (manual validation)",
            Self::Schema => "Registration (schema validation)",
        }
    }
}

/// How the schema form enables its submit control
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SubmitBinding {
    /// Submit is always enabled; invalid attempts only reveal errors
    #[default]
    AlwaysEnabled,
    /// Submit is enabled only while the form is valid
    Validity,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Data was handed to the sink
    Sent,
    /// The form was invalid; nothing left the form
    Rejected,
}

/// Common operations of both registration forms
pub trait Form {
    fn variant(&self) -> Variant;

    fn state(&self) -> &FormState;

    /// Replace one field and re-derive validation.
    ///
    /// Returns true when this change moved the form into the valid state and
    /// focus should move to the submit control.
    fn on_field_change(&mut self, name: FieldName, value: String) -> bool;

    /// Latest full validation of the current values
    fn validation(&self) -> &ValidationResult;

    /// Errors the user should currently see
    fn visible_errors(&self) -> ValidationResult {
        self.validation().clone()
    }

    /// Whether the submit control is enabled
    fn can_submit(&self) -> bool;

    fn on_submit(&mut self, sink: &mut dyn SubmissionSink) -> SubmitOutcome;

    fn push_char(&mut self, name: FieldName, c: char) -> bool {
        let mut value = self.state().get(name).to_string();
        value.push(c);
        self.on_field_change(name, value)
    }

    fn pop_char(&mut self, name: FieldName) -> bool {
        let mut value = self.state().get(name).to_string();
        value.pop();
        self.on_field_change(name, value)
    }

    fn clear_field(&mut self, name: FieldName) -> bool {
        self.on_field_change(name, String::new())
    }
}

/// Hand a submission to the sink without waiting on or surfacing its result
fn deliver(sink: &mut dyn SubmissionSink, submission: &Submission, variant: Variant) {
    match sink.send(submission) {
        Ok(()) => tracing::debug!(?variant, "submission delivered"),
        Err(err) => tracing::warn!(?variant, "submission sink failed: {err}"),
    }
}

/// The form currently hosted by the app
#[derive(Debug, Clone)]
pub enum ActiveForm {
    Manual(ManualForm),
    Schema(SchemaForm),
}

impl ActiveForm {
    /// A fresh, empty form of the given variant
    pub fn new(variant: Variant, binding: SubmitBinding) -> Self {
        match variant {
            Variant::Manual => ActiveForm::Manual(ManualForm::new()),
            Variant::Schema => ActiveForm::Schema(SchemaForm::new(binding)),
        }
    }

    pub fn as_form(&self) -> &dyn Form {
        match self {
            ActiveForm::Manual(f) => f,
            ActiveForm::Schema(f) => f,
        }
    }

    pub fn as_form_mut(&mut self) -> &mut dyn Form {
        match self {
            ActiveForm::Manual(f) => f,
            ActiveForm::Schema(f) => f,
        }
    }
}
