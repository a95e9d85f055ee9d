//! Event handling layer for the catalog browser.
//!
//! Global shortcuts are resolved here; pane-specific keys are delegated to
//! submodules by the focused pane.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{AppState, Focus, ViewMode};

mod facets;
mod results;
mod search;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(*ke, app),
        _ => false,
    }
}

/// What: Apply one key press to the application state.
///
/// Inputs:
/// - `ke`: Key event (press only)
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when the application should quit.
///
/// Details:
/// - Function keys and `Ctrl` chords work from every pane; everything else
///   goes to the focused pane.
pub fn handle_key(ke: KeyEvent, app: &mut AppState) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('x') if ctrl => {
            app.clear_filters();
            app.status = Some("Filters cleared".to_string());
            return false;
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return false;
        }
        KeyCode::F(2) => {
            app.cycle_sort();
            app.status = Some(format!("Sort: {}", app.filter.sort.label()));
            return false;
        }
        KeyCode::F(3) => {
            app.toggle_view_mode();
            return false;
        }
        KeyCode::F(4) => {
            app.toggle_vehicle_matching();
            return false;
        }
        KeyCode::F(5) => {
            app.switch_kind();
            app.status = Some(format!("Browsing {}", app.kind.label()));
            return false;
        }
        _ => {}
    }
    match app.focus {
        Focus::Search => search::handle_search_key(ke, app),
        Focus::Facets => facets::handle_facets_key(ke, app),
        Focus::Results => results::handle_results_key(ke, app),
    }
    false
}

/// Rows moved by one vertical step in the results pane.
fn vertical_step(app: &AppState) -> isize {
    match app.view_mode {
        ViewMode::List => 1,
        ViewMode::Grid => isize::try_from(app.grid_columns.max(1)).unwrap_or(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FacetDimension, Product, ProductFeed, ProductKind, SortMode};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn app_with_items() -> AppState {
        let mut app = AppState::default();
        app.set_feed(
            ProductKind::Tires,
            ProductFeed::ready(vec![
                Product::new("1", "Road Grip")
                    .with_facet(FacetDimension::Brand, "Acme")
                    .with_price(90.0),
                Product::new("2", "Snow Bite")
                    .with_facet(FacetDimension::Brand, "Zenith")
                    .with_price(70.0),
            ]),
        );
        app
    }

    #[test]
    /// What: Esc and Ctrl+C quit; other keys do not
    fn events_quit_keys() {
        let mut app = AppState::default();
        assert!(handle_key(key(KeyCode::Esc), &mut app));
        assert!(handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app
        ));
        assert!(!handle_key(key(KeyCode::Char('c')), &mut app));
    }

    #[test]
    /// What: Typing edits the search and narrows results
    ///
    /// - Input: "snow" typed then one Backspace
    /// - Output: One match, search "sno"
    fn events_typing_filters() {
        let mut app = app_with_items();
        for c in "snow".chars() {
            handle_key(key(KeyCode::Char(c)), &mut app);
        }
        assert_eq!(app.view.count(), 1);
        handle_key(key(KeyCode::Backspace), &mut app);
        assert_eq!(app.filter.search, "sno");
        assert_eq!(app.view.count(), 1);
    }

    #[test]
    /// What: Facet pane keys pick a dimension and toggle options
    fn events_facet_toggle() {
        let mut app = app_with_items();
        handle_key(key(KeyCode::Tab), &mut app);
        assert_eq!(app.focus, Focus::Facets);
        handle_key(key(KeyCode::Down), &mut app);
        handle_key(key(KeyCode::Char(' ')), &mut app);
        assert!(app.filter.brand.contains("Zenith"));
        assert_eq!(app.view.count(), 1);
        handle_key(key(KeyCode::Right), &mut app);
        assert_eq!(app.current_dimension(), FacetDimension::Category);
        handle_key(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert!(!app.filter.has_facet_selection());
    }

    #[test]
    /// What: Function keys cycle sort, view, and catalog
    fn events_function_keys() {
        let mut app = app_with_items();
        handle_key(key(KeyCode::F(2)), &mut app);
        assert_eq!(app.filter.sort, SortMode::PriceLow);
        assert_eq!(app.view.products[0].id, "2");
        handle_key(key(KeyCode::F(3)), &mut app);
        assert_eq!(app.view_mode, ViewMode::Grid);
        handle_key(key(KeyCode::F(5)), &mut app);
        assert_eq!(app.kind, ProductKind::Wheels);
    }

    #[test]
    /// What: Results navigation moves by rows in grid view
    fn events_results_navigation() {
        let mut app = app_with_items();
        app.focus = Focus::Results;
        handle_key(key(KeyCode::Down), &mut app);
        assert_eq!(app.selected, 1);
        handle_key(key(KeyCode::Home), &mut app);
        assert_eq!(app.selected, 0);
        app.view_mode = ViewMode::Grid;
        app.grid_columns = 2;
        handle_key(key(KeyCode::Right), &mut app);
        assert_eq!(app.selected, 1);
        handle_key(key(KeyCode::Up), &mut app);
        assert_eq!(app.selected, 0);
    }
}
