use super::AppState;
use crate::logic::recompute;
use crate::state::feed::ProductFeed;
use crate::state::product::Product;
use crate::state::types::{FacetDimension, ProductKind, SavedVehicle};

/// Move `idx` by `delta` within `0..len`, clamping at both ends.
fn step(idx: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    idx.saturating_add_signed(delta).min(len - 1)
}

impl AppState {
    /// Feed of the catalog currently browsed, if one was ever registered.
    #[must_use]
    pub fn current_feed(&self) -> Option<&ProductFeed> {
        self.feeds.get(&self.kind)
    }

    /// What: Store a feed delivered by the fetch worker.
    ///
    /// Inputs:
    /// - `kind`: Catalog the feed belongs to
    /// - `feed`: Loaded, loading or failed feed
    ///
    /// Details:
    /// - Recomputes the view only when `kind` is the one on screen.
    pub fn set_feed(&mut self, kind: ProductKind, feed: ProductFeed) {
        if let Some(err) = &feed.error {
            self.status = Some(format!("{} unavailable: {err}", kind.label()));
        }
        self.feeds.insert(kind, feed);
        if kind == self.kind {
            self.refresh_view();
        }
    }

    /// Vehicles applied to the listing; empty when matching is off.
    #[must_use]
    pub fn active_vehicles(&self) -> &[SavedVehicle] {
        if self.apply_vehicles {
            &self.saved_vehicles
        } else {
            &[]
        }
    }

    /// What: Recompute the listing and keep the highlighted product when possible.
    ///
    /// Inputs: none (reads feed, filter and vehicles from `self`)
    ///
    /// Output:
    /// - Updates `view`, `selected`, `list_state` and the facet cursor.
    ///
    /// Details:
    /// - The previously highlighted product is found again by id; otherwise
    ///   the index is clamped into the new list.
    pub fn refresh_view(&mut self) {
        let prev_id = self.selected_product().map(|p| p.id.clone());
        let empty = ProductFeed::default();
        let feed = self.feeds.get(&self.kind).unwrap_or(&empty);
        self.view = recompute(feed, &self.filter, self.active_vehicles());

        let len = self.view.products.len();
        if let Some(id) = prev_id
            && let Some(pos) = self.view.products.iter().position(|p| p.id == id)
        {
            self.selected = pos;
        } else {
            self.selected = self.selected.min(len.saturating_sub(1));
        }
        self.list_state
            .select(if len == 0 { None } else { Some(self.selected) });
        self.clamp_facet_cursor();
    }

    /// Product under the results cursor.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.view.products.get(self.selected)
    }

    /// What: Move the results cursor.
    ///
    /// Inputs:
    /// - `delta`: Signed step (grid view passes whole rows)
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.view.products.len();
        self.selected = step(self.selected, delta, len);
        self.list_state
            .select(if len == 0 { None } else { Some(self.selected) });
    }

    /// Facet dimension currently shown in the facet pane.
    #[must_use]
    pub fn current_dimension(&self) -> FacetDimension {
        let dims = self.kind.facet_dimensions();
        dims[self.facet_dim.min(dims.len() - 1)]
    }

    /// Options of the current facet dimension.
    #[must_use]
    pub fn current_facet_options(&self) -> &[String] {
        self.view.facets.options(self.current_dimension())
    }

    /// Switch to the previous or next facet dimension, wrapping around.
    pub fn cycle_dimension(&mut self, delta: isize) {
        let n = self.kind.facet_dimensions().len();
        let cur = isize::try_from(self.facet_dim).unwrap_or(0);
        let n_signed = isize::try_from(n).unwrap_or(1);
        self.facet_dim = usize::try_from((cur + delta).rem_euclid(n_signed)).unwrap_or(0);
        self.facet_cursor = 0;
        self.clamp_facet_cursor();
    }

    /// Move the facet option cursor.
    pub fn move_facet_cursor(&mut self, delta: isize) {
        let len = self.current_facet_options().len();
        self.facet_cursor = step(self.facet_cursor, delta, len);
        self.clamp_facet_cursor();
    }

    fn clamp_facet_cursor(&mut self) {
        let len = self.current_facet_options().len();
        self.facet_cursor = self.facet_cursor.min(len.saturating_sub(1));
        self.facet_state
            .select(if len == 0 { None } else { Some(self.facet_cursor) });
    }

    /// What: Toggle the facet option under the cursor and recompute.
    ///
    /// Output:
    /// - `true` when the option became selected, `false` when deselected or
    ///   when there is nothing to toggle.
    pub fn toggle_current_facet(&mut self) -> bool {
        let dim = self.current_dimension();
        let Some(value) = self.current_facet_options().get(self.facet_cursor).cloned() else {
            return false;
        };
        let now_selected = self.filter.toggle(dim, &value);
        self.refresh_view();
        now_selected
    }

    /// Replace the search term and recompute.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
        self.refresh_view();
    }

    /// Append one character to the search term.
    pub fn push_search_char(&mut self, c: char) {
        self.filter.search.push(c);
        self.refresh_view();
    }

    /// Remove the last character of the search term.
    pub fn pop_search_char(&mut self) {
        if self.filter.search.pop().is_some() {
            self.refresh_view();
        }
    }

    /// Advance to the next sort mode and mark it for persistence.
    pub fn cycle_sort(&mut self) {
        self.filter.sort = self.filter.sort.next();
        self.sort_dirty = true;
        self.refresh_view();
    }

    /// Flip between list and grid and mark it for persistence.
    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
        self.view_dirty = true;
    }

    /// Enable or disable saved-vehicle matching.
    pub fn toggle_vehicle_matching(&mut self) {
        self.apply_vehicles = !self.apply_vehicles;
        self.status = Some(if self.apply_vehicles {
            format!("Matching {} saved vehicle(s)", self.saved_vehicles.len())
        } else {
            "Vehicle matching off".to_string()
        });
        self.refresh_view();
    }

    /// What: Switch between the tire and wheel catalogs.
    ///
    /// Details:
    /// - Facet selections are cleared since option sets differ per catalog;
    ///   the search term and sort mode carry over.
    pub fn switch_kind(&mut self) {
        self.kind = self.kind.toggled();
        let search = std::mem::take(&mut self.filter.search);
        self.filter.clear_filters();
        self.filter.search = search;
        self.facet_dim = 0;
        self.facet_cursor = 0;
        self.selected = 0;
        self.refresh_view();
    }

    /// Clear facet selections and the search term; sort mode is kept.
    pub fn clear_filters(&mut self) {
        self.filter.clear_filters();
        self.refresh_view();
    }
}
