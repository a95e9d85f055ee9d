use std::cmp::Ordering;

use crate::state::{Product, SortMode};

/// What: Produce a sorted copy of `products` for the given sort mode.
///
/// Inputs:
/// - `products`: Filtered products (left untouched)
/// - `mode`: Sort mode
///
/// Output:
/// - New vector in the requested order.
///
/// Details:
/// - `Featured` keeps input order.
/// - All comparators run through a stable sort, so ties keep input order.
/// - Years that are absent or non-numeric compare as negative infinity and
///   land at the end under `Newest`.
#[must_use]
pub fn sorted(products: &[Product], mode: SortMode) -> Vec<Product> {
    let mut out = products.to_vec();
    sort_in_place(&mut out, mode);
    out
}

/// What: Sort `products` in place for the given sort mode.
///
/// Inputs:
/// - `products`: Vector to reorder
/// - `mode`: Sort mode
///
/// Output:
/// - None (reorders `products`).
pub fn sort_in_place(products: &mut [Product], mode: SortMode) {
    match mode {
        SortMode::Featured => {}
        SortMode::PriceLow => {
            products.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal));
        }
        SortMode::PriceHigh => {
            products.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));
        }
        SortMode::Newest => {
            products.sort_by(|a, b| {
                b.year_number()
                    .partial_cmp(&a.year_number())
                    .unwrap_or(Ordering::Equal)
            });
        }
    }
}
