use crate::app::state::{AppState, Focus};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Submit;
    let (border_style, text_style) = if focused {
        (Theme::border_focused(), Theme::button_focused())
    } else {
        (Theme::border(), Theme::button())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Paragraph::new(state.config.form.submit_label.as_str())
        .style(text_style)
        .alignment(Alignment::Center);
    frame.render_widget(label, inner);
}
