//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_registration(frame, main_area, app);

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::controller::{SubmitBinding, Variant};
    use crate::sink::LogSink;
    use crate::state::FieldName;
    use crate::validation::rules::{EMAIL_FORMAT, PASSWORD_COMPLEXITY};
    use ratatui::{backend::TestBackend, Terminal};

    fn app(variant: Variant) -> App {
        let settings = Settings {
            variant,
            submit_binding: SubmitBinding::AlwaysEnabled,
            redact_passwords: true,
        };
        App::new(settings, Box::new(LogSink::default()))
    }

    fn render(app: &App) -> String {
        render_sized(app, 80, 30)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_title_inputs_and_button() {
        let text = render(&app(Variant::Manual));
        assert!(text.contains(Variant::Manual.title()));
        assert!(text.contains("Email"));
        assert!(text.contains("Repeat password"));
        assert!(text.contains("Register"));
        assert!(!text.contains("Errors"));
    }

    #[test]
    fn test_renders_errors_when_present() {
        let mut app = app(Variant::Manual);
        app.state
            .form
            .as_form_mut()
            .on_field_change(FieldName::Email, "bad".to_string());
        let text = render(&app);
        assert!(text.contains("Errors"));
        assert!(text.contains(EMAIL_FORMAT));
    }

    #[test]
    fn test_masks_passwords() {
        let mut app = app(Variant::Schema);
        app.state
            .form
            .as_form_mut()
            .on_field_change(FieldName::Password, "Secret1!".to_string());
        let text = render(&app);
        assert!(!text.contains("Secret1!"));
        assert!(text.contains("••••••••"));
    }

    #[test]
    fn test_wrapped_errors_are_shown_in_full() {
        let mut app = app(Variant::Manual);
        let form = app.state.form.as_form_mut();
        form.on_field_change(FieldName::Email, "bad".to_string());
        form.on_field_change(FieldName::Password, "abcdefg1!".to_string());
        assert!(PASSWORD_COMPLEXITY.ends_with("digits and symbols."));

        let text = render_sized(&app, 60, 30);
        assert!(text.contains(EMAIL_FORMAT));
        assert!(text.contains("lowercase letters,"));
        assert!(text.contains("digits and symbols."));
    }
}
