//! Saved-vehicle maintenance from the command line.

use std::path::Path;

use tirecat::state::SavedVehicle;
use tirecat::vehicles::{
    add_saved_vehicle, clear_saved_vehicles, load_saved_vehicles, remove_saved_vehicle,
    saved_vehicles_path,
};

/// What: Build a vehicle from the five `--add-vehicle` values.
///
/// Inputs:
/// - `fields`: `[year, make, model, trim, tire_size]`
///
/// Output:
/// - The vehicle with each field trimmed; missing trailing values are empty.
pub fn vehicle_from_fields(fields: &[String]) -> SavedVehicle {
    let get = |i: usize| fields.get(i).map(|s| s.trim().to_string()).unwrap_or_default();
    SavedVehicle {
        year: get(0),
        make: get(1),
        model: get(2),
        trim: get(3),
        tire_size: get(4),
    }
}

/// What: Render the saved-vehicle list with 1-based positions.
///
/// Inputs:
/// - `list`: Saved vehicles
///
/// Output:
/// - One line per vehicle, or a hint when the list is empty.
pub fn format_vehicle_list(list: &[SavedVehicle]) -> String {
    if list.is_empty() {
        return "No saved vehicles. Add one with --add-vehicle YEAR MAKE MODEL TRIM TIRE_SIZE\n"
            .to_string();
    }
    list.iter()
        .enumerate()
        .map(|(i, v)| format!("{:>3}. {}\n", i + 1, v.summary()))
        .collect()
}

fn add_in(path: &Path, fields: &[String]) -> i32 {
    let vehicle = vehicle_from_fields(fields);
    if vehicle.model.is_empty() {
        tracing::warn!("vehicle saved without a model; it will match every product");
    }
    let summary = vehicle.summary();
    match add_saved_vehicle(path, vehicle) {
        Ok(true) => {
            println!("Saved vehicle: {summary}");
            0
        }
        Ok(false) => {
            println!("Vehicle already saved: {summary}");
            0
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to save vehicle");
            eprintln!("Failed to save vehicle: {e}");
            1
        }
    }
}

/// Handle `--add-vehicle YEAR MAKE MODEL TRIM TIRE_SIZE`.
pub fn handle_add_vehicle(fields: &[String]) -> i32 {
    add_in(&saved_vehicles_path(), fields)
}

fn remove_in(path: &Path, position: usize) -> i32 {
    let Some(index) = position.checked_sub(1) else {
        eprintln!("Vehicle positions start at 1");
        return 1;
    };
    match remove_saved_vehicle(path, index) {
        Ok(Some(v)) => {
            println!("Removed vehicle: {}", v.summary());
            0
        }
        Ok(None) => {
            eprintln!("No saved vehicle at position {position}");
            1
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to remove vehicle");
            eprintln!("Failed to remove vehicle: {e}");
            1
        }
    }
}

/// Handle `--remove-vehicle N` (1-based, as printed by `--list-vehicles`).
pub fn handle_remove_vehicle(position: usize) -> i32 {
    remove_in(&saved_vehicles_path(), position)
}

/// Handle `--list-vehicles`.
pub fn handle_list_vehicles() -> i32 {
    print!("{}", format_vehicle_list(&load_saved_vehicles(&saved_vehicles_path())));
    0
}

/// Handle `--clear-vehicles`.
pub fn handle_clear_vehicles() -> i32 {
    match clear_saved_vehicles(&saved_vehicles_path()) {
        Ok(n) => {
            println!("Removed {n} saved vehicle(s)");
            0
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to clear vehicles");
            eprintln!("Failed to clear saved vehicles: {e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(v: &[&str]) -> Vec<String> {
        v.iter().map(ToString::to_string).collect()
    }

    #[test]
    /// What: Field order maps to year, make, model, trim, tire size
    fn vehicles_from_fields_order() {
        let v = vehicle_from_fields(&fields(&["2021", " Tesla ", "Model3", "", "235/45R18"]));
        assert_eq!(v.make, "Tesla");
        assert_eq!(v.model, "Model3");
        assert_eq!(v.summary(), "2021 Tesla Model3 (235/45R18)");
    }

    #[test]
    /// What: Add and remove report exit codes and 1-based positions
    fn vehicles_add_remove_exit_codes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("saved_vehicles.json");
        assert_eq!(add_in(&path, &fields(&["2020", "Tesla", "Model3", "", ""])), 0);
        assert_eq!(add_in(&path, &fields(&["2020", "Tesla", "Model3", "", ""])), 0);
        assert_eq!(load_saved_vehicles(&path).len(), 1);
        assert_eq!(remove_in(&path, 0), 1);
        assert_eq!(remove_in(&path, 2), 1);
        assert_eq!(remove_in(&path, 1), 0);
        assert!(load_saved_vehicles(&path).is_empty());
    }

    #[test]
    /// What: Listing numbers vehicles from one
    fn vehicles_format_list() {
        let list = vec![vehicle_from_fields(&fields(&["", "", "ModelY", "", ""]))];
        assert_eq!(format_vehicle_list(&list), "  1. ModelY\n");
        assert!(format_vehicle_list(&[]).starts_with("No saved vehicles"));
    }
}
