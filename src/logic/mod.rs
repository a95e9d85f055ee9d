//! Catalog filtering engine: facet extraction, predicates, vehicle
//! matching and sorting, composed by [`pipeline::recompute`].

pub mod facets;
pub mod filter;
pub mod pipeline;
pub mod sort;
pub mod vehicle;

// Re-export public APIs to keep call sites short (crate::logic::...)
pub use facets::{FacetOptions, extract_facets};
pub use filter::{filter_products, matches_facets, matches_search};
pub use pipeline::{CatalogView, recompute};
pub use sort::{sort_in_place, sorted};
pub use vehicle::{fits_vehicle, retain_compatible};
