//! Saved-vehicle persistence.
//!
//! `saved_vehicles.json` may hold a single vehicle object or an array of them.
//! Both shapes are read; an array is always written back.

mod store;

pub use store::{
    add_saved_vehicle, clear_saved_vehicles, load_saved_vehicles, normalize_saved_vehicles,
    parse_saved_vehicles, remove_saved_vehicle, save_saved_vehicles, saved_vehicles_path,
};
