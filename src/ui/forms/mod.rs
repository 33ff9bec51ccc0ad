//! Form rendering module
//!
//! - `field_renderer`: single input rendering
//! - `registration_form`: the registration form with errors and submit button

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
