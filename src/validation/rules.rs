//! Hand-written validation rules for the manual form

use super::patterns::{char_count, is_complex_password, is_email_shaped};
use super::ValidationResult;
use crate::state::FormState;

pub const EMAIL_FORMAT: &str = "Enter an email in the format example@domain.com";
pub const PASSWORD_LENGTH: &str = "Password must be 8 to 16 characters long.";
pub const PASSWORD_COMPLEXITY: &str =
    "Password must contain uppercase and lowercase letters, digits and symbols.";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match!";

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 16;

/// Validate all three fields from scratch
pub fn validate(state: &FormState) -> ValidationResult {
    let email = check_email(state.email.as_text());
    let password = check_password(state.password.as_text());
    let duplicate_password =
        check_duplicate(state.password.as_text(), state.duplicate_password.as_text());

    ValidationResult::from_messages(state, email, password, duplicate_password)
}

/// Empty email is not an error here; it only keeps the form invalid
pub fn check_email(email: &str) -> Option<String> {
    if !email.is_empty() && !is_email_shaped(email) {
        return Some(EMAIL_FORMAT.to_string());
    }
    None
}

/// Length is checked before complexity and wins when both fail
pub fn check_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return None;
    }
    let len = char_count(password);
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        Some(PASSWORD_LENGTH.to_string())
    } else if !is_complex_password(password) {
        Some(PASSWORD_COMPLEXITY.to_string())
    } else {
        None
    }
}

pub fn check_duplicate(password: &str, duplicate: &str) -> Option<String> {
    if !duplicate.is_empty() && duplicate != password {
        return Some(PASSWORDS_MISMATCH.to_string());
    }
    None
}
