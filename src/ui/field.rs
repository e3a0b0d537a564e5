use crate::app::state::{AppState, Focus};
use crate::form::FieldId;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Render one labeled input group: label row, bordered input, and the
/// inline error line beneath it when the last submit flagged this field.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, field: FieldId) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Min(3),    // Input
            Constraint::Length(1), // Error line
        ])
        .split(area);

    let label = Paragraph::new(state.config.form.label(field)).style(Theme::label());
    frame.render_widget(label, rows[0]);

    let focused = state.focus == Focus::Field(field);
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(rows[1]);
    frame.render_widget(block, rows[1]);

    let editor = state.editor(field);
    if editor.text.is_empty() && !focused {
        let placeholder =
            Paragraph::new(state.config.form.placeholder(field)).style(Theme::placeholder());
        frame.render_widget(placeholder, inner);
    } else {
        let paragraph = Paragraph::new(editor.text.as_str()).style(Theme::input_text());
        frame.render_widget(paragraph, inner);
    }

    if focused && inner.width > 0 {
        let cursor_x = inner.x + editor.text[..editor.cursor].width() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }

    if let Some(message) = state.errors.get(field) {
        let error = Paragraph::new(message).style(Theme::error_text());
        frame.render_widget(error, rows[2]);
    }
}
