//! Registration form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldName, FocusTarget};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const INPUT_HEIGHT: u16 = 3;
const SUBMIT_LABEL: &str = "Register";

/// Rows needed by the error region at `width` columns; zero hides it
pub fn error_region_height(errors_text: &str, width: u16) -> u16 {
    if errors_text.is_empty() {
        return 0;
    }
    let text_width = usize::from(width.saturating_sub(2)).max(1);
    let rows: usize = errors_text
        .lines()
        .map(|line| wrapped_rows(line, text_width))
        .sum();
    // Wrapped messages plus borders
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

/// Rows a greedy word wrap takes for one line
fn wrapped_rows(line: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut used = 0;
    for word in line.split(' ') {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if needed <= width {
            used = needed;
        } else if len <= width {
            rows += 1;
            used = len;
        } else {
            // Words wider than the region are broken across rows
            if used > 0 {
                rows += 1;
            }
            rows += (len - 1) / width;
            used = len % width;
            if used == 0 {
                used = width;
            }
        }
    }
    rows
}

/// Draw the active registration form
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.state.form.as_form();
    let errors = form.visible_errors();
    let errors_text = errors.display_text();

    let block = Block::default()
        .title(format!(" {} ", form.variant().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let errors_height = error_region_height(&errors_text, inner.width.saturating_sub(2));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),                     // Email
            Constraint::Length(INPUT_HEIGHT),                     // Password
            Constraint::Length(INPUT_HEIGHT),                     // Repeat password
            Constraint::Length(errors_height),                    // Errors
            Constraint::Length(BUTTON_HEIGHT),                    // Submit
            Constraint::Min(0),                                   // remaining space
        ])
        .margin(1)
        .split(inner);

    for name in FieldName::ALL {
        draw_field(
            frame,
            chunks[name.index()],
            form.state().field(name),
            app.state.focus == FocusTarget::from(name),
            errors.has_error(name),
        );
    }

    if !errors_text.is_empty() {
        let lines: Vec<Line> = errors_text.lines().map(Line::from).collect();
        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Errors ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
        frame.render_widget(paragraph, chunks[3]);
    }

    let button_area = Rect {
        width: chunks[4].width.min(24),
        ..chunks[4]
    };
    render_button(
        frame,
        button_area,
        SUBMIT_LABEL,
        app.state.focus == FocusTarget::Submit,
        app.can_submit(),
    );
}
