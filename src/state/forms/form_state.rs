//! Registration form state

use super::field::FormField;
use serde::{Deserialize, Serialize};

/// The three inputs of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Email,
    Password,
    DuplicatePassword,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [
        FieldName::Email,
        FieldName::Password,
        FieldName::DuplicatePassword,
    ];

    /// Key used for this field in submitted records and log output
    pub fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::DuplicatePassword => "duplicatePassword",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::DuplicatePassword => "Repeat password",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Email => 0,
            Self::Password => 1,
            Self::DuplicatePassword => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Flat record handed to the submission sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub email: String,
    pub password: String,
    pub duplicate_password: String,
}

/// Current values of the three registration inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub email: FormField,
    pub password: FormField,
    pub duplicate_password: FormField,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            email: FormField::text(FieldName::Email, FieldName::Email.label()),
            password: FormField::masked(FieldName::Password, FieldName::Password.label()),
            duplicate_password: FormField::masked(
                FieldName::DuplicatePassword,
                FieldName::DuplicatePassword.label(),
            ),
        }
    }

    #[cfg(test)]
    pub fn with_values(email: &str, password: &str, duplicate_password: &str) -> Self {
        let mut state = Self::new();
        state.set(FieldName::Email, email);
        state.set(FieldName::Password, password);
        state.set(FieldName::DuplicatePassword, duplicate_password);
        state
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::DuplicatePassword => &self.duplicate_password,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::DuplicatePassword => &mut self.duplicate_password,
        }
    }

    pub fn get(&self, name: FieldName) -> &str {
        self.field(name).as_text()
    }

    /// Replace one field's value, leaving the others untouched
    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).set_text(value);
    }

    /// Iterate the fields in display order
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        FieldName::ALL.into_iter().map(move |name| self.field(name))
    }

    /// True when none of the three inputs is empty
    pub fn all_filled(&self) -> bool {
        self.fields().all(|f| !f.is_empty())
    }

    /// Reset every input to an empty string
    pub fn reset(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
    }

    pub fn to_submission(&self) -> Submission {
        Submission {
            email: self.email.value.clone(),
            password: self.password.value.clone(),
            duplicate_password: self.duplicate_password.value.clone(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
