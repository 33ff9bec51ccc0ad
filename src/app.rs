//! Application state and core logic

use crate::config::Settings;
use crate::controller::SubmitOutcome;
use crate::sink::SubmissionSink;
use crate::state::{AppState, FieldName, FocusTarget};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receiver of validated submissions
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: Settings, sink: Box<dyn SubmissionSink>) -> Self {
        tracing::info!(
            variant = ?settings.variant,
            submit_binding = ?settings.submit_binding,
            "starting registration form"
        );
        Self {
            state: AppState::new(settings.variant, settings.submit_binding),
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the submit button is currently enabled
    pub fn can_submit(&self) -> bool {
        self.state.form.as_form().can_submit()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL) && !is_alt_gr(key.modifiers);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('u') if ctrl => {
                if let Some(name) = self.state.focus.field() {
                    let focus = self.state.form.as_form_mut().clear_field(name);
                    self.apply_focus_request(focus);
                }
            }
            KeyCode::F(2) => self.switch_variant(),
            KeyCode::Tab | KeyCode::Down => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus = self.state.focus.prev(),
            _ => match self.state.focus.field() {
                Some(name) => self.handle_field_key(name, key),
                None => self.handle_submit_key(key),
            },
        }
        Ok(())
    }

    /// Keys while one of the inputs has focus
    fn handle_field_key(&mut self, name: FieldName, key: KeyEvent) {
        let form = self.state.form.as_form_mut();
        let focus = match key.code {
            KeyCode::Enter => {
                self.state.focus = self.state.focus.next();
                return;
            }
            KeyCode::Backspace => form.pop_char(name),
            KeyCode::Char(c)
                if is_alt_gr(key.modifiers)
                    || !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.push_char(name, c)
            }
            _ => return,
        };
        self.apply_focus_request(focus);
    }

    /// Keys while the submit button has focus
    fn handle_submit_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.submit();
        }
    }

    /// Move focus to the submit button when the form asked for it
    fn apply_focus_request(&mut self, requested: bool) {
        if requested {
            tracing::debug!("form became valid, focusing submit");
            self.state.focus = FocusTarget::Submit;
        }
    }

    /// Submit the active form if its submit button is enabled
    pub fn submit(&mut self) {
        if !self.can_submit() {
            self.state.status_message =
                Some("Submit is disabled until the form is valid".to_string());
            return;
        }
        let outcome = self.state.form.as_form_mut().on_submit(self.sink.as_mut());
        self.state.status_message = Some(match outcome {
            SubmitOutcome::Sent => "Registration sent".to_string(),
            SubmitOutcome::Rejected => "Fix the errors before submitting".to_string(),
        });
    }

    /// Swap to the other form implementation, starting from an empty form
    pub fn switch_variant(&mut self) {
        self.state.switch_variant();
        let variant = self.state.variant();
        tracing::info!(?variant, "switched form variant");
        self.state.status_message = Some(format!("Switched to {}", variant.title()));
    }
}

/// AltGr arrives as Ctrl+Alt on Windows; such keys are text, not shortcuts
fn is_alt_gr(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
