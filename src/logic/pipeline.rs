use crate::logic::facets::{FacetOptions, extract_facets};
use crate::logic::filter::filter_products;
use crate::logic::sort::sort_in_place;
use crate::logic::vehicle::retain_compatible;
use crate::state::{FilterState, Product, ProductFeed, SavedVehicle};

/// Everything the presentation layer needs after one recompute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogView {
    /// Filtered, vehicle-matched and sorted products.
    pub products: Vec<Product>,
    /// Options per facet dimension, derived from the whole feed.
    pub facets: FacetOptions,
}

impl CatalogView {
    /// Number of products shown ("showing N products").
    #[must_use]
    pub fn count(&self) -> usize {
        self.products.len()
    }
}

/// What: Recompute the listing from scratch.
///
/// Inputs:
/// - `feed`: Raw product list with loading/error flags
/// - `state`: Facet selections, search term and sort mode
/// - `vehicles`: Saved vehicles; pass an empty slice to disable matching
///
/// Output:
/// - `CatalogView` with sorted products and facet options.
///
/// Details:
/// - A loading or failed feed behaves as an empty list.
/// - Facets come from the unfiltered feed so options do not vanish as the
///   user narrows the listing.
/// - Stages run filter, then vehicle match, then sort; none mutate `feed`.
#[must_use]
pub fn recompute(feed: &ProductFeed, state: &FilterState, vehicles: &[SavedVehicle]) -> CatalogView {
    let items = feed.usable_items();
    let facets = extract_facets(items);
    let filtered = filter_products(items, state);
    let mut products = retain_compatible(filtered, vehicles);
    sort_in_place(&mut products, state.sort);
    tracing::trace!(
        input = items.len(),
        output = products.len(),
        sort = state.sort.as_config_key(),
        vehicles = vehicles.len(),
        "[Pipeline] recomputed catalog view"
    );
    CatalogView { products, facets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FacetDimension, SortMode};

    #[test]
    /// What: Loading and failed feeds yield empty products and facets
    fn pipeline_degrades_on_unready_feed() {
        let st = FilterState::default();
        for feed in [ProductFeed::loading(), ProductFeed::failed("502")] {
            let view = recompute(&feed, &st, &[]);
            assert_eq!(view.count(), 0);
            assert!(view.facets.is_empty());
        }
    }

    #[test]
    /// What: Facets cover the whole feed while products are filtered
    fn pipeline_facets_from_unfiltered_feed() {
        let feed = ProductFeed::ready(vec![
            Product::new("1", "a").with_facet(FacetDimension::Brand, "Acme"),
            Product::new("2", "b").with_facet(FacetDimension::Brand, "Zenith"),
        ]);
        let mut st = FilterState {
            sort: SortMode::PriceHigh,
            ..FilterState::default()
        };
        st.toggle(FacetDimension::Brand, "Acme");
        let view = recompute(&feed, &st, &[]);
        assert_eq!(view.count(), 1);
        assert_eq!(view.facets.brand, vec!["Acme", "Zenith"]);
    }
}
