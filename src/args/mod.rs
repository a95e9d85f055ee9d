//! Command-line argument parsing and handling.

pub mod cache;
pub mod definition;
pub mod listing;
pub mod utils;
pub mod vehicles;

// Re-export commonly used items
pub use definition::{Args, process_args};
pub use utils::determine_log_level;
