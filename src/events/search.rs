use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppState;

/// Handle key events while the Search pane is focused.
///
/// Printable characters edit the term; arrows move the results cursor so the
/// listing can be browsed without leaving the input.
pub fn handle_search_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Char(c) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(c);
        }
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Enter => app.focus = crate::state::Focus::Results,
        _ => {}
    }
}
