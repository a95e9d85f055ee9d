use crate::state::{FacetDimension, FilterState, Product};

/// What: Check the free-text search predicate for one product.
///
/// Inputs:
/// - `product`: Candidate product
/// - `term_lower`: Search term already lowercased; empty disables the check
///
/// Output:
/// - `true` when the term is empty or a substring of the name or description.
///
/// Details:
/// - Only name and description are inspected; brand and other facets are not.
#[must_use]
pub fn matches_search(product: &Product, term_lower: &str) -> bool {
    term_lower.is_empty()
        || product.name.to_lowercase().contains(term_lower)
        || product.description.to_lowercase().contains(term_lower)
}

/// What: Check every facet predicate for one product.
///
/// Inputs:
/// - `product`: Candidate product
/// - `state`: Filter state with per-dimension selections
///
/// Output:
/// - `true` when, for each dimension with a non-empty selection, the product's
///   value is a member of it.
///
/// Details:
/// - A product without a value never matches a non-empty selection.
#[must_use]
pub fn matches_facets(product: &Product, state: &FilterState) -> bool {
    FacetDimension::ALL.iter().all(|dim| {
        let selected = state.selection(*dim);
        selected.is_empty()
            || product
                .facet_value(*dim)
                .is_some_and(|v| selected.contains(v))
    })
}

/// What: Apply the search and facet predicates to a product list.
///
/// Inputs:
/// - `products`: Raw product list
/// - `state`: Filter state (search term and selections)
///
/// Output:
/// - The matching products, cloned, in their original relative order.
///
/// Details:
/// - Cheap facet checks run before the lowercase search comparison.
#[must_use]
pub fn filter_products(products: &[Product], state: &FilterState) -> Vec<Product> {
    let term_lower = state.search.to_lowercase();
    let mut filtered: Vec<Product> = Vec::with_capacity(products.len());
    for it in products {
        if matches_facets(it, state) && matches_search(it, &term_lower) {
            filtered.push(it.clone());
        }
    }
    filtered
}
