use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, ViewMode};

/// Handle key events while the results pane is focused.
pub fn handle_results_key(ke: KeyEvent, app: &mut AppState) {
    let row = super::vertical_step(app);
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-row),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(row),
        KeyCode::Left | KeyCode::Char('h') if app.view_mode == ViewMode::Grid => {
            app.move_selection(-1);
        }
        KeyCode::Right | KeyCode::Char('l') if app.view_mode == ViewMode::Grid => {
            app.move_selection(1);
        }
        KeyCode::PageUp => app.move_selection(-10 * row),
        KeyCode::PageDown => app.move_selection(10 * row),
        KeyCode::Home => {
            let sel = isize::try_from(app.selected).unwrap_or(isize::MAX);
            app.move_selection(-sel);
        }
        KeyCode::End => app.move_selection(isize::MAX / 2),
        _ => {}
    }
}
