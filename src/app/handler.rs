use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::form::validator;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    if let Some(deadline) = state.ack_expires_at {
        if Instant::now() >= deadline {
            state.clear_acknowledgment();
        }
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Esc => vec![Action::Quit],
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.prev();
            vec![]
        }
        // Enter advances through the fields and submits on the button.
        KeyCode::Enter => match state.focus {
            Focus::Submit => submit(state),
            Focus::Field(_) => {
                state.focus = state.focus.next();
                vec![]
            }
        },
        KeyCode::Char(c) => {
            if let Focus::Field(field) = state.focus {
                let editor = state.editor_mut(field);
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match c {
                        'a' => editor.move_home(),
                        'e' => editor.move_end(),
                        'w' => editor.delete_word_back(),
                        'u' => editor.clear(),
                        _ => {}
                    }
                } else {
                    editor.insert_char(c);
                }
            }
            vec![]
        }
        KeyCode::Backspace => {
            if let Focus::Field(field) = state.focus {
                state.editor_mut(field).delete_back();
            }
            vec![]
        }
        KeyCode::Delete => {
            if let Focus::Field(field) = state.focus {
                state.editor_mut(field).delete_forward();
            }
            vec![]
        }
        KeyCode::Left => {
            if let Focus::Field(field) = state.focus {
                state.editor_mut(field).move_left();
            }
            vec![]
        }
        KeyCode::Right => {
            if let Focus::Field(field) = state.focus {
                state.editor_mut(field).move_right();
            }
            vec![]
        }
        KeyCode::Home => {
            if let Focus::Field(field) = state.focus {
                state.editor_mut(field).move_home();
            }
            vec![]
        }
        KeyCode::End => {
            if let Focus::Field(field) = state.focus {
                state.editor_mut(field).move_end();
            }
            vec![]
        }
        _ => vec![],
    }
}

/// Validate the current values and branch. Failing fields get their messages
/// replaced wholesale and the values stay put; a clean pass resets the form,
/// shows the acknowledgment, and emits exactly one diagnostic record.
///
/// Errors recorded here stay on screen until the next submit attempt, even
/// if the user corrects the field in between. Editing never revalidates.
fn submit(state: &mut AppState) -> Vec<Action> {
    let values = state.values();
    let errors = validator::validate(&values);
    if errors.is_empty() {
        state.reset_form();
        state.submissions += 1;
        state.show_acknowledgment();
        vec![Action::RecordSubmission { values }]
    } else {
        state.errors = errors;
        state.clear_acknowledgment();
        vec![]
    }
}
