//! Keyboard input dispatch — navigation, text editing, triggers.
//!
//! The form is always in edit mode: printable characters go into the active
//! text field, so quitting is on Esc rather than a letter key.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, FormRow};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.cursor = app.form.cursor.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.cursor = app.form.cursor.prev();
        }
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Left if app.form.cursor == FormRow::Timeframe => {
            app.cycle_timeframe(false);
        }
        KeyCode::Right if app.form.cursor == FormRow::Timeframe => {
            app.cycle_timeframe(true);
        }
        KeyCode::Backspace => {
            if let Some(value) = app.form.value_mut(app.form.cursor) {
                value.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(value) = app.form.value_mut(app.form.cursor) {
                value.push(c);
            }
        }
        _ => {}
    }
}
