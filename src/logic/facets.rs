use std::collections::BTreeSet;

use crate::state::{FacetDimension, Product};

/// Selectable options per facet dimension, derived from a product list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetOptions {
    /// Brand names, ascending.
    pub brand: Vec<String>,
    /// Vehicle makes, ascending.
    pub make: Vec<String>,
    /// Vehicle models, ascending.
    pub model: Vec<String>,
    /// Trims, ascending.
    pub trim: Vec<String>,
    /// Category names, ascending.
    pub category: Vec<String>,
    /// Model years, newest first.
    pub year: Vec<String>,
    /// Driving types, ascending.
    pub driving_type: Vec<String>,
}

impl FacetOptions {
    /// Options for one dimension.
    #[must_use]
    pub fn options(&self, dim: FacetDimension) -> &[String] {
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

    /// Whether every dimension is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FacetDimension::ALL
            .iter()
            .all(|d| self.options(*d).is_empty())
    }
}

/// What: Derive the distinct option set of every facet dimension.
///
/// Inputs:
/// - `products`: Raw product list (may be empty)
///
/// Output:
/// - `FacetOptions` with duplicate-free, ordered sequences.
///
/// Details:
/// - Products without a value for a dimension contribute nothing to it.
/// - Identity is the display string: two brands named "Acme" with different
///   ids collapse into one option.
/// - Text dimensions sort ascending by byte order; years sort newest first.
#[must_use]
pub fn extract_facets(products: &[Product]) -> FacetOptions {
    FacetOptions {
        brand: distinct(products, FacetDimension::Brand),
        make: distinct(products, FacetDimension::Make),
        model: distinct(products, FacetDimension::Model),
        trim: distinct(products, FacetDimension::Trim),
        category: distinct(products, FacetDimension::Category),
        year: years_newest_first(distinct(products, FacetDimension::Year)),
        driving_type: distinct(products, FacetDimension::DrivingType),
    }
}

fn distinct(products: &[Product], dim: FacetDimension) -> Vec<String> {
    products
        .iter()
        .filter_map(|p| p.facet_value(dim))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// What: Order year display strings by numeric value, newest first.
///
/// Inputs:
/// - `years`: Distinct year strings in ascending text order
///
/// Output:
/// - Numeric years descending, followed by non-numeric entries in text order.
fn years_newest_first(mut years: Vec<String>) -> Vec<String> {
    // Stable sort keeps the ascending text order among non-numeric ties.
    years.sort_by(|a, b| {
        let na = crate::util::year_number(Some(a.as_str()));
        let nb = crate::util::year_number(Some(b.as_str()));
        nb.partial_cmp(&na).unwrap_or(std::cmp::Ordering::Equal)
    });
    years
}
