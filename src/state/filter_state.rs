//! Explicit filter state consumed by the catalog pipeline.

use std::collections::BTreeSet;

use crate::state::types::{FacetDimension, SortMode};

/// Everything the user can change to narrow or reorder a listing.
///
/// Each facet set holds selected display strings. An empty set means "no
/// filter on this dimension", never "match nothing".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Selected brand names.
    pub brand: BTreeSet<String>,
    /// Selected vehicle makes.
    pub make: BTreeSet<String>,
    /// Selected vehicle models.
    pub model: BTreeSet<String>,
    /// Selected trims.
    pub trim: BTreeSet<String>,
    /// Selected category names.
    pub category: BTreeSet<String>,
    /// Selected model years (display strings).
    pub year: BTreeSet<String>,
    /// Selected driving types.
    pub driving_type: BTreeSet<String>,
    /// Free-text term; empty disables the search predicate.
    pub search: String,
    /// Ordering applied after filtering.
    pub sort: SortMode,
}

impl FilterState {
    /// Selected values for one dimension.
    #[must_use]
    pub const fn selection(&self, dim: FacetDimension) -> &BTreeSet<String> {
        match dim {
            FacetDimension::Brand => &self.brand,
            FacetDimension::Make => &self.make,
            FacetDimension::Model => &self.model,
            FacetDimension::Trim => &self.trim,
            FacetDimension::Category => &self.category,
            FacetDimension::Year => &self.year,
            FacetDimension::DrivingType => &self.driving_type,
        }
    }

    /// Mutable access to the selected values for one dimension.
    pub const fn selection_mut(&mut self, dim: FacetDimension) -> &mut BTreeSet<String> {
        match dim {
            FacetDimension::Brand => &mut self.brand,
            FacetDimension::Make => &mut self.make,
            FacetDimension::Model => &mut self.model,
            FacetDimension::Trim => &mut self.trim,
            FacetDimension::Category => &mut self.category,
            FacetDimension::Year => &mut self.year,
            FacetDimension::DrivingType => &mut self.driving_type,
        }
    }

    /// What: Toggle membership of `value` in a dimension's selection.
    ///
    /// Inputs:
    /// - `dim`: Facet dimension
    /// - `value`: Display string
    ///
    /// Output:
    /// - `true` if the value is selected afterwards.
    pub fn toggle(&mut self, dim: FacetDimension, value: &str) -> bool {
        let set = self.selection_mut(dim);
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    /// Whether any facet selection is non-empty.
    #[must_use]
    pub fn has_facet_selection(&self) -> bool {
        FacetDimension::ALL
            .iter()
            .any(|d| !self.selection(*d).is_empty())
    }

    /// Active `(dimension, value)` pairs in dimension order, for chips.
    #[must_use]
    pub fn active_chips(&self) -> Vec<(FacetDimension, &str)> {
        FacetDimension::ALL
            .iter()
            .flat_map(|d| self.selection(*d).iter().map(move |v| (*d, v.as_str())))
            .collect()
    }

    /// What: Reset every facet selection and the search term.
    ///
    /// Inputs: none
    ///
    /// Output: none
    ///
    /// Details:
    /// - The sort mode is kept; clearing filters should not reorder results.
    pub fn clear_filters(&mut self) {
        for d in FacetDimension::ALL {
            self.selection_mut(d).clear();
        }
        self.search.clear();
    }
}
