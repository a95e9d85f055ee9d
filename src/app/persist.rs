use crate::state::AppState;

/// Persist sort mode to settings.conf if it changed since the last save.
pub fn maybe_save_sort(app: &mut AppState) {
    if !app.sort_dirty {
        return;
    }
    crate::config::save_sort_mode(app.filter.sort);
    app.sort_dirty = false;
}

/// Persist view mode to settings.conf if it changed since the last save.
pub fn maybe_save_view(app: &mut AppState) {
    if !app.view_dirty {
        return;
    }
    crate::config::save_view_mode(app.view_mode);
    app.view_dirty = false;
}
