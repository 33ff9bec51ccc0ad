//! Application state definitions

use super::forms::FieldName;
use crate::controller::{ActiveForm, SubmitBinding, Variant};

/// Keyboard focus: one of the three inputs or the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Email,
    Password,
    DuplicatePassword,
    Submit,
}

impl FocusTarget {
    pub const COUNT: usize = 4;

    pub fn index(&self) -> usize {
        match self {
            Self::Email => 0,
            Self::Password => 1,
            Self::DuplicatePassword => 2,
            Self::Submit => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => Self::Email,
            1 => Self::Password,
            2 => Self::DuplicatePassword,
            _ => Self::Submit,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// The input this target edits, if it is an input
    pub fn field(&self) -> Option<FieldName> {
        FieldName::from_index(self.index())
    }
}

impl From<FieldName> for FocusTarget {
    fn from(name: FieldName) -> Self {
        Self::from_index(name.index())
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: ActiveForm,
    pub focus: FocusTarget,
    pub submit_binding: SubmitBinding,
    /// Last status line message (cleared on the next key press)
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(variant: Variant, submit_binding: SubmitBinding) -> Self {
        Self {
            form: ActiveForm::new(variant, submit_binding),
            focus: FocusTarget::default(),
            submit_binding,
            status_message: None,
        }
    }

    pub fn variant(&self) -> Variant {
        self.form.as_form().variant()
    }

    /// Replace the active form with an empty form of the other variant
    pub fn switch_variant(&mut self) {
        let next = self.variant().toggle();
        self.form = ActiveForm::new(next, self.submit_binding);
        self.focus = FocusTarget::default();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Variant::default(), SubmitBinding::default())
    }
}
