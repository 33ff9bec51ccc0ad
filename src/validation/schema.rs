//! Declarative validation schema for the schema-driven form
//!
//! A [`Schema`] maps each field to an ordered chain of [`Rule`]s. A field
//! declared `required` that is empty reports the required message and nothing
//! else; otherwise the first failing rule in declaration order wins.

use super::patterns::{char_count, is_complex_password, is_email_shaped};
use super::ValidationResult;
use crate::state::{FieldName, FormState};

/// Value test used by [`Rule::Matches`]
pub type Predicate = fn(&str) -> bool;

#[derive(Debug, Clone)]
pub enum Rule {
    Required(String),
    Matches(Predicate, String),
    Min(usize, String),
    Max(usize, String),
    /// Value must equal the current value of another field
    EqualsField(FieldName, String),
}

impl Rule {
    /// Message when the rule rejects `value`; `Required` is handled by the chain
    fn check(&self, value: &str, state: &FormState) -> Option<&str> {
        let failed = match self {
            Rule::Required(_) => false,
            Rule::Matches(test, _) => !test(value),
            Rule::Min(min, _) => char_count(value) < *min,
            Rule::Max(max, _) => char_count(value) > *max,
            Rule::EqualsField(other, _) => value != state.get(*other),
        };
        failed.then(|| self.message())
    }

    fn message(&self) -> &str {
        match self {
            Rule::Required(m)
            | Rule::Matches(_, m)
            | Rule::Min(_, m)
            | Rule::Max(_, m)
            | Rule::EqualsField(_, m) => m,
        }
    }
}

/// Rule chain for one string field
#[derive(Debug, Clone, Default)]
pub struct FieldSchema {
    rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn string() -> Self {
        Self::default()
    }

    pub fn required(mut self, message: &str) -> Self {
        self.rules.push(Rule::Required(message.to_string()));
        self
    }

    pub fn matches(mut self, test: Predicate, message: &str) -> Self {
        self.rules.push(Rule::Matches(test, message.to_string()));
        self
    }

    pub fn min(mut self, len: usize, message: &str) -> Self {
        self.rules.push(Rule::Min(len, message.to_string()));
        self
    }

    pub fn max(mut self, len: usize, message: &str) -> Self {
        self.rules.push(Rule::Max(len, message.to_string()));
        self
    }

    pub fn equals_field(mut self, other: FieldName, message: &str) -> Self {
        self.rules
            .push(Rule::EqualsField(other, message.to_string()));
        self
    }

    fn required_message(&self) -> Option<&str> {
        self.rules.iter().find_map(|rule| match rule {
            Rule::Required(m) => Some(m.as_str()),
            _ => None,
        })
    }

    /// First message produced for `value`, if any
    pub fn check(&self, value: &str, state: &FormState) -> Option<String> {
        if value.is_empty() {
            if let Some(message) = self.required_message() {
                return Some(message.to_string());
            }
        }
        self.rules
            .iter()
            .find_map(|rule| rule.check(value, state))
            .map(str::to_string)
    }
}

/// Per-field rule chains for the whole form
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(FieldName, FieldSchema)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the rules of one field, replacing any earlier declaration
    pub fn field(mut self, name: FieldName, schema: FieldSchema) -> Self {
        self.fields.retain(|(existing, _)| *existing != name);
        self.fields.push((name, schema));
        self
    }

    /// Message for a single field; fields without rules never fail
    pub fn validate_field(&self, name: FieldName, state: &FormState) -> Option<String> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .and_then(|(_, schema)| schema.check(state.get(name), state))
    }

    pub fn validate(&self, state: &FormState) -> ValidationResult {
        ValidationResult::from_messages(
            state,
            self.validate_field(FieldName::Email, state),
            self.validate_field(FieldName::Password, state),
            self.validate_field(FieldName::DuplicatePassword, state),
        )
    }
}

pub const EMAIL_FORMAT: &str = "Email must be in the format example@domain.com";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_COMPLEXITY: &str =
    "Password must contain uppercase and lowercase letters, digits and symbols.";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_TOO_LONG: &str = "Password must be at most 16 characters";
pub const REPEAT_REQUIRED: &str = "Please repeat the password";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";

/// The registration form's rules
pub fn registration_schema() -> Schema {
    Schema::new()
        .field(
            FieldName::Email,
            FieldSchema::string()
                .matches(is_email_shaped, EMAIL_FORMAT)
                .required(EMAIL_REQUIRED),
        )
        .field(
            FieldName::Password,
            FieldSchema::string()
                .matches(is_complex_password, PASSWORD_COMPLEXITY)
                .required(PASSWORD_REQUIRED)
                .min(8, PASSWORD_TOO_SHORT)
                .max(16, PASSWORD_TOO_LONG),
        )
        .field(
            FieldName::DuplicatePassword,
            FieldSchema::string()
                .required(REPEAT_REQUIRED)
                .equals_field(FieldName::Password, PASSWORDS_MISMATCH),
        )
}
