//! Form domain layer
//!
//! Value objects for the registration form: the individual inputs and the
//! three-field state they make up.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{FieldName, FormState, Submission};
