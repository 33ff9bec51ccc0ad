//! Field validation for the registration form
//!
//! Two independent rule sets produce the same [`ValidationResult`]:
//! - `rules`: hand-written checks evaluated by plain functions
//! - `schema`: a declarative per-field rule chain
//!
//! Messages are plain data. Nothing here returns an error or panics on input.

mod patterns;
pub mod rules;
pub mod schema;

use crate::state::{FieldName, FormState};

/// Per-field error messages plus the derived overall validity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub email: Option<String>,
    pub password: Option<String>,
    pub duplicate_password: Option<String>,
    pub is_valid: bool,
}

impl ValidationResult {
    /// Build a result from per-field messages.
    ///
    /// Validity is derived here so that it can never disagree with the
    /// messages: every field must be filled and no message may be present.
    pub fn from_messages(
        state: &FormState,
        email: Option<String>,
        password: Option<String>,
        duplicate_password: Option<String>,
    ) -> Self {
        let is_valid = state.all_filled()
            && email.is_none()
            && password.is_none()
            && duplicate_password.is_none();
        Self {
            email,
            password,
            duplicate_password,
            is_valid,
        }
    }

    pub fn message(&self, name: FieldName) -> Option<&str> {
        match name {
            FieldName::Email => self.email.as_deref(),
            FieldName::Password => self.password.as_deref(),
            FieldName::DuplicatePassword => self.duplicate_password.as_deref(),
        }
    }

    pub fn has_error(&self, name: FieldName) -> bool {
        self.message(name).is_some()
    }

    /// Present messages in field order
    pub fn messages(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL
            .into_iter()
            .filter_map(move |name| self.message(name).map(|m| (name, m)))
    }

    /// Newline-joined messages, empty when there are none
    pub fn display_text(&self) -> String {
        self.messages()
            .map(|(_, m)| m)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
