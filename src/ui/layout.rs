use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct AppLayout {
    pub title: Rect,
    pub name_field: Rect,
    pub email_field: Rect,
    pub message_field: Rect,
    pub submit_button: Rect,
    pub status_bar: Rect,
}

/// A field group is label (1) + bordered input (3) + error line (1); the
/// message group gets a taller input for longer text.
pub fn compute_layout(area: Rect, form_width: u16) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Form content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Center the form column horizontally
    let width = form_width.min(content.width);
    let h_chunks = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(content);

    let column = h_chunks[0];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(5), // Name
            Constraint::Length(5), // Email
            Constraint::Length(7), // Message
            Constraint::Length(3), // Submit button
            Constraint::Min(0),    // Remainder
        ])
        .split(column);

    AppLayout {
        title: rows[0],
        name_field: rows[1],
        email_field: rows[2],
        message_field: rows[3],
        submit_button: rows[4],
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_is_centered_and_capped() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30), 46);
        assert_eq!(layout.name_field.width, 46);
        assert_eq!(layout.name_field.x, 27);
        assert_eq!(layout.status_bar.y, 29);
    }

    #[test]
    fn test_narrow_terminal_shrinks_the_column() {
        let layout = compute_layout(Rect::new(0, 0, 30, 30), 46);
        assert_eq!(layout.name_field.width, 30);
    }
}
