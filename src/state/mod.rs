//! Catalog state: product records, filter selections, feeds and the TUI container.

pub mod app_state;
pub mod feed;
pub mod filter_state;
pub mod product;
pub mod types;

// Public re-exports so callers can use `crate::state::*`
pub use app_state::AppState;
pub use feed::ProductFeed;
pub use filter_state::FilterState;
pub use product::Product;
pub use types::{FacetDimension, Focus, ProductKind, SavedVehicle, SortMode, ViewMode};
