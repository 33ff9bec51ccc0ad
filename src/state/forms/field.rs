//! Form field value objects

use super::form_state::FieldName;

/// Character shown in place of each character of a masked value
pub const MASK_CHAR: char = '•';

/// Represents a single form input with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub value: String,
    pub is_masked: bool,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(name: FieldName, label: &str) -> Self {
        Self {
            name,
            label: label.to_string(),
            value: String::new(),
            is_masked: false,
        }
    }

    /// Create a new field whose value is masked when rendered
    pub fn masked(name: FieldName, label: &str) -> Self {
        Self {
            is_masked: true,
            ..Self::text(name, label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_masked {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }
}
