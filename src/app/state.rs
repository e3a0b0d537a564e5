use crate::config::AppConfig;
use crate::form::{FieldId, FormErrors, FormValues};
use std::time::{Duration, Instant};

/// Acknowledgment shown in the status bar after a successful submit.
pub const ACK_TEXT: &str = "Form submitted successfully.";

/// How long the acknowledgment stays visible.
pub const ACK_DURATION: Duration = Duration::from_secs(4);

/// Where keyboard input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Submit,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Field(FieldId::Name) => Focus::Field(FieldId::Email),
            Focus::Field(FieldId::Email) => Focus::Field(FieldId::Message),
            Focus::Field(FieldId::Message) => Focus::Submit,
            Focus::Submit => Focus::Field(FieldId::Name),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Field(FieldId::Name) => Focus::Submit,
            Focus::Field(FieldId::Email) => Focus::Field(FieldId::Name),
            Focus::Field(FieldId::Message) => Focus::Field(FieldId::Email),
            Focus::Submit => Focus::Field(FieldId::Message),
        }
    }
}

/// Single-line text editor backing one form field. The cursor is a byte
/// offset that always sits on a char boundary.
#[derive(Debug, Default)]
pub struct FieldEditor {
    pub text: String,
    pub cursor: usize,
}

impl FieldEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub name: FieldEditor,
    pub email: FieldEditor,
    pub message: FieldEditor,
    pub errors: FormErrors,
    pub focus: Focus,
    pub acknowledgment: Option<String>,
    pub ack_expires_at: Option<Instant>,
    pub submissions: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            name: FieldEditor::new(),
            email: FieldEditor::new(),
            message: FieldEditor::new(),
            errors: FormErrors::default(),
            focus: Focus::Field(FieldId::Name),
            acknowledgment: None,
            ack_expires_at: None,
            submissions: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn editor(&self, field: FieldId) -> &FieldEditor {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    pub fn editor_mut(&mut self, field: FieldId) -> &mut FieldEditor {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        }
    }

    /// Snapshot the current field values for validation or logging.
    pub fn values(&self) -> FormValues {
        FormValues {
            name: self.name.text.clone(),
            email: self.email.text.clone(),
            message: self.message.text.clone(),
        }
    }

    /// Clear all fields and errors and return focus to the first field.
    /// Called after a successful submit.
    pub fn reset_form(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.errors = FormErrors::default();
        self.focus = Focus::Field(FieldId::Name);
        self.dirty = true;
    }

    pub fn show_acknowledgment(&mut self) {
        self.acknowledgment = Some(ACK_TEXT.to_string());
        self.ack_expires_at = Some(Instant::now() + ACK_DURATION);
        self.dirty = true;
    }

    pub fn clear_acknowledgment(&mut self) {
        if self.acknowledgment.take().is_some() {
            self.dirty = true;
        }
        self.ack_expires_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_insert_and_delete() {
        let mut ed = FieldEditor::new();
        for c in "abc".chars() {
            ed.insert_char(c);
        }
        assert_eq!(ed.text, "abc");
        assert_eq!(ed.cursor, 3);
        ed.delete_back();
        assert_eq!(ed.text, "ab");
        ed.move_home();
        ed.delete_forward();
        assert_eq!(ed.text, "b");
        assert_eq!(ed.cursor, 0);
    }

    #[test]
    fn test_editor_multibyte_cursor() {
        let mut ed = FieldEditor::new();
        for c in "héllo".chars() {
            ed.insert_char(c);
        }
        assert_eq!(ed.text, "héllo");
        ed.move_left();
        ed.move_left();
        ed.move_left();
        ed.move_left();
        // Cursor now sits after 'h', before the two-byte 'é'.
        assert_eq!(ed.cursor, 1);
        ed.delete_forward();
        assert_eq!(ed.text, "hllo");
        ed.insert_char('ö');
        assert_eq!(ed.text, "höllo");
    }

    #[test]
    fn test_editor_delete_word_back() {
        let mut ed = FieldEditor::new();
        for c in "hello world  ".chars() {
            ed.insert_char(c);
        }
        ed.delete_word_back();
        assert_eq!(ed.text, "hello ");
        ed.delete_word_back();
        assert_eq!(ed.text, "");
    }

    #[test]
    fn test_focus_cycle_wraps() {
        let mut focus = Focus::Field(FieldId::Name);
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Field(FieldId::Name));
        assert_eq!(focus.prev(), Focus::Submit);
    }

    #[test]
    fn test_editing_one_field_leaves_others_untouched() {
        let mut state = AppState::new(AppConfig::default());
        state.name.insert_char('A');
        state.message.insert_char('m');
        let before_name = state.name.text.clone();
        let before_message = state.message.text.clone();

        for c in "a@b.co".chars() {
            state.email.insert_char(c);
        }

        assert_eq!(state.name.text, before_name);
        assert_eq!(state.message.text, before_message);
        assert_eq!(state.email.text, "a@b.co");
    }

    #[test]
    fn test_reset_form_clears_values_and_errors() {
        let mut state = AppState::new(AppConfig::default());
        state.name.insert_char('x');
        state.errors.set(FieldId::Email, "email required.");
        state.focus = Focus::Submit;

        state.reset_form();

        assert_eq!(state.values(), FormValues::default());
        assert!(state.errors.is_empty());
        assert_eq!(state.focus, Focus::Field(FieldId::Name));
    }
}
