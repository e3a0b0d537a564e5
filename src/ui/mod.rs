mod field;
mod layout;
mod status_bar;
mod submit_button;
mod theme;

use crate::app::state::AppState;
use crate::form::FieldId;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.config.ui.form_width);

    let title = Paragraph::new(state.config.form.title.as_str())
        .style(theme::Theme::title())
        .alignment(Alignment::Center);
    frame.render_widget(title, app_layout.title);

    field::render(frame, app_layout.name_field, state, FieldId::Name);
    field::render(frame, app_layout.email_field, state, FieldId::Email);
    field::render(frame, app_layout.message_field, state, FieldId::Message);
    submit_button::render(frame, app_layout.submit_button, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
