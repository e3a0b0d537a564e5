use crate::app::state::{AppState, Focus};
use crate::form::FieldId;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Acknowledgment takes priority over the key hints
    if let Some(ref ack) = state.acknowledgment {
        parts.push(Span::styled(format!(" {} ", ack), Theme::acknowledgment()));
    } else {
        parts.push(Span::styled(
            " Tab: next field | Enter: submit | Esc: quit ",
            Theme::status_bar(),
        ));
    }

    if state.submissions > 0 {
        parts.push(Span::styled(
            format!(" Submitted: {} ", state.submissions),
            Theme::status_bar(),
        ));
    }

    // Focus indicator
    let focus_name = match state.focus {
        Focus::Field(FieldId::Name) => "NAME",
        Focus::Field(FieldId::Email) => "EMAIL",
        Focus::Field(FieldId::Message) => "MESSAGE",
        Focus::Submit => "SUBMIT",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppState;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;
    use ratatui::Terminal;

    fn render_row(state: &AppState, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, Rect::new(0, 0, width, 1), state))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..width)
            .map(|x| buffer.cell(Position::new(x, 0)).unwrap().symbol())
            .collect()
    }

    #[test]
    fn test_focus_indicator_stays_right_aligned() {
        let state = AppState::new(AppConfig::default());
        let row = render_row(&state, 60);
        assert!(row.ends_with("[NAME]"), "{row:?}");
    }

    #[test]
    fn test_right_alignment_with_multibyte_status_text() {
        let mut state = AppState::new(AppConfig::default());
        // "✓" is three bytes but one cell wide; padding must use display
        // width or the indicator drifts off the right edge.
        state.acknowledgment = Some("Submitted ✓".to_string());
        let row = render_row(&state, 60);
        assert!(row.contains("Submitted ✓"), "{row:?}");
        assert!(row.ends_with("[NAME]"), "{row:?}");
    }
}

