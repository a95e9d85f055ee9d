//! Central `AppState` container for the interactive browser.

use ratatui::widgets::ListState;
use std::collections::HashMap;

use crate::config::Settings;
use crate::logic::CatalogView;
use crate::state::feed::ProductFeed;
use crate::state::filter_state::FilterState;
use crate::state::types::{Focus, ProductKind, SavedVehicle, ViewMode};

mod methods;


/// Global application state shared by the event, fetch, and UI layers.
///
/// Every user action mutates the filter inputs and then calls
/// [`AppState::refresh_view`], which recomputes `view` from the current feed.
/// The view is never edited in place.
#[derive(Debug)]
pub struct AppState {
    /// Catalog currently browsed.
    pub kind: ProductKind,
    /// Latest feed per catalog kind, as delivered by the fetch worker.
    pub feeds: HashMap<ProductKind, ProductFeed>,
    /// Facet selections, search term and sort mode.
    pub filter: FilterState,
    /// Vehicles loaded from the saved-vehicle store.
    pub saved_vehicles: Vec<SavedVehicle>,
    /// Whether `saved_vehicles` narrow the listing.
    pub apply_vehicles: bool,
    /// Result of the last recompute.
    pub view: CatalogView,
    /// List or grid presentation.
    pub view_mode: ViewMode,
    /// Pane owning keyboard input.
    pub focus: Focus,
    /// Index into `view.products` that is highlighted.
    pub selected: usize,
    /// Selection state for the results list.
    pub list_state: ListState,
    /// Index into the current kind's facet dimensions.
    pub facet_dim: usize,
    /// Highlighted option within the current facet dimension.
    pub facet_cursor: usize,
    /// Selection state for the facet option list.
    pub facet_state: ListState,
    /// Cards per row in grid view; updated by the renderer.
    pub grid_columns: usize,
    /// Prefix for prices.
    pub currency_symbol: String,
    /// Transient message shown in the footer.
    pub status: Option<String>,
    /// Sort mode changed and should be persisted.
    pub sort_dirty: bool,
    /// View mode changed and should be persisted.
    pub view_dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default(), Vec::new())
    }
}

impl AppState {
    /// What: Build the initial state from settings and saved vehicles.
    ///
    /// Inputs:
    /// - `settings`: Loaded settings (kind, sort, view, vehicle matching, currency)
    /// - `saved_vehicles`: Vehicles from the saved-vehicle store
    ///
    /// Output:
    /// - State with both feeds marked loading and an empty view.
    #[must_use]
    pub fn new(settings: &Settings, saved_vehicles: Vec<SavedVehicle>) -> Self {
        let feeds = [ProductKind::Tires, ProductKind::Wheels]
            .into_iter()
            .map(|k| (k, ProductFeed::loading()))
            .collect();
        Self {
            kind: settings.default_kind,
            feeds,
            filter: FilterState {
                sort: settings.sort_mode,
                ..FilterState::default()
            },
            saved_vehicles,
            apply_vehicles: settings.apply_saved_vehicles,
            view: CatalogView::default(),
            view_mode: settings.view_mode,
            focus: Focus::default(),
            selected: 0,
            list_state: ListState::default(),
            facet_dim: 0,
            facet_cursor: 0,
            facet_state: ListState::default(),
            grid_columns: 1,
            currency_symbol: settings.currency_symbol.clone(),
            status: None,
            sort_dirty: false,
            view_dirty: false,
        }
    }
}
