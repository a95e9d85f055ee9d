use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppState;

/// Handle key events while the facet pane is focused.
///
/// Left/Right switch dimension, Up/Down move within the options, and
/// Space or Enter toggles the option under the cursor.
pub fn handle_facets_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Left | KeyCode::Char('h') => app.cycle_dimension(-1),
        KeyCode::Right | KeyCode::Char('l') => app.cycle_dimension(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_facet_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_facet_cursor(1),
        KeyCode::Char(' ') | KeyCode::Enter => {
            let dim = app.current_dimension();
            let selected = app.toggle_current_facet();
            tracing::debug!(dimension = dim.label(), selected, "[Events] facet toggled");
        }
        _ => {}
    }
}
