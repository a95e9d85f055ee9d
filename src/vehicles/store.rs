use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::state::SavedVehicle;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Default location of the saved-vehicle list.
#[must_use]
pub fn saved_vehicles_path() -> PathBuf {
    crate::config::lists_dir().join("saved_vehicles.json")
}

/// What: Turn a persisted JSON value into a list of saved vehicles.
///
/// Inputs:
/// - `v`: Parsed JSON (object, array, or anything else)
///
/// Output:
/// - One vehicle for an object, each object entry for an array, empty otherwise.
///
/// Details:
/// - Non-object array entries are skipped rather than failing the whole list.
#[must_use]
pub fn normalize_saved_vehicles(v: &Value) -> Vec<SavedVehicle> {
    match v {
        Value::Array(items) => items.iter().filter_map(SavedVehicle::from_value).collect(),
        Value::Object(_) => SavedVehicle::from_value(v).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// What: Parse the persisted saved-vehicle text.
///
/// Inputs:
/// - `text`: Raw file content
///
/// Output:
/// - Normalized vehicles; empty for blank or unparseable content.
#[must_use]
pub fn parse_saved_vehicles(text: &str) -> Vec<SavedVehicle> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(text) {
        Ok(v) => normalize_saved_vehicles(&v),
        Err(e) => {
            tracing::warn!(error = %e, "[Vehicles] saved vehicles are not valid JSON; ignoring");
            Vec::new()
        }
    }
}

/// What: Load saved vehicles from `path`.
///
/// Inputs:
/// - `path`: Saved-vehicle file
///
/// Output:
/// - Normalized vehicles; empty when the file is missing or unreadable.
#[must_use]
pub fn load_saved_vehicles(path: &Path) -> Vec<SavedVehicle> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let list = parse_saved_vehicles(&text);
            tracing::debug!(
                path = %path.display(),
                count = list.len(),
                "[Vehicles] loaded saved vehicles"
            );
            list
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "[Vehicles] no saved vehicles");
            Vec::new()
        }
    }
}

/// What: Write the saved-vehicle list as a pretty JSON array.
///
/// Inputs:
/// - `path`: Destination file
/// - `vehicles`: Vehicles to persist
///
/// Output:
/// - `Ok(())` once written.
///
/// # Errors
/// - Serialization or file write failures
pub fn save_saved_vehicles(path: &Path, vehicles: &[SavedVehicle]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(vehicles)?;
    fs::write(path, json)?;
    tracing::debug!(
        path = %path.display(),
        count = vehicles.len(),
        "[Vehicles] saved vehicles persisted"
    );
    Ok(())
}

/// What: Keep a copy of an unparseable saved-vehicle file before it is rewritten.
///
/// Inputs:
/// - `path`: Saved-vehicle file
///
/// Output:
/// - Path of the backup when one was written.
///
/// Details:
/// - Missing, blank or valid JSON files are left alone.
/// - The backup sits next to the file as `saved_vehicles.json.bak`.
fn back_up_unreadable(path: &Path) -> Option<PathBuf> {
    let text = fs::read_to_string(path).ok()?;
    if text.trim().is_empty() || serde_json::from_str::<Value>(&text).is_ok() {
        return None;
    }
    let mut name = path.file_name()?.to_os_string();
    name.push(".bak");
    let backup = path.with_file_name(name);
    match fs::write(&backup, &text) {
        Ok(()) => {
            tracing::warn!(
                path = %path.display(),
                backup = %backup.display(),
                "[Vehicles] replacing unreadable saved vehicles; previous content backed up"
            );
            Some(backup)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "[Vehicles] replacing unreadable saved vehicles; backup failed"
            );
            None
        }
    }
}

/// What: Append a vehicle unless an identical one is already saved.
///
/// Inputs:
/// - `path`: Saved-vehicle file
/// - `vehicle`: Vehicle to add
///
/// Output:
/// - `Ok(true)` when added, `Ok(false)` when it was a duplicate.
///
/// # Errors
/// - File write failures
pub fn add_saved_vehicle(path: &Path, vehicle: SavedVehicle) -> Result<bool> {
    let mut list = load_saved_vehicles(path);
    if list.contains(&vehicle) {
        return Ok(false);
    }
    list.push(vehicle);
    back_up_unreadable(path);
    save_saved_vehicles(path, &list)?;
    Ok(true)
}

/// What: Remove the vehicle at `index` (zero-based).
///
/// Inputs:
/// - `path`: Saved-vehicle file
/// - `index`: Position in the list
///
/// Output:
/// - `Ok(Some(vehicle))` when removed, `Ok(None)` when out of range.
///
/// # Errors
/// - File write failures
pub fn remove_saved_vehicle(path: &Path, index: usize) -> Result<Option<SavedVehicle>> {
    let mut list = load_saved_vehicles(path);
    if index >= list.len() {
        return Ok(None);
    }
    let removed = list.remove(index);
    save_saved_vehicles(path, &list)?;
    Ok(Some(removed))
}

/// What: Remove every saved vehicle.
///
/// Inputs:
/// - `path`: Saved-vehicle file
///
/// Output:
/// - Number of vehicles that were saved before clearing.
///
/// # Errors
/// - File removal failures other than "not found"
pub fn clear_saved_vehicles(path: &Path) -> Result<usize> {
    let count = load_saved_vehicles(path).len();
    back_up_unreadable(path);
    match fs::remove_file(path) {
        Ok(()) => Ok(count),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e.into()),
    }
}
