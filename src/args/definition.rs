//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;
use tirecat::state::{ProductKind, SortMode, ViewMode};

/// tirecat - browse, filter and sort a tire and wheel storefront catalog
#[derive(Parser, Debug, Default)]
#[command(name = "tirecat")]
#[command(version)]
#[command(about = "Browse, filter and sort a tire and wheel storefront catalog", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Catalog to browse (tires, wheels)
    #[arg(short, long, value_parser = parse_kind)]
    pub kind: Option<ProductKind>,

    /// Storefront REST API base URL (overrides settings.conf)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Read the catalog from a local JSON file instead of the API
    #[arg(long, value_name = "FILE")]
    pub products_file: Option<PathBuf>,

    /// Free-text search over product names and descriptions
    #[arg(short, long)]
    pub search: Option<String>,

    /// Keep only this brand (repeatable)
    #[arg(long)]
    pub brand: Vec<String>,

    /// Keep only this vehicle make (repeatable)
    #[arg(long)]
    pub make: Vec<String>,

    /// Keep only this vehicle model (repeatable)
    #[arg(long)]
    pub model: Vec<String>,

    /// Keep only this trim (repeatable)
    #[arg(long)]
    pub trim: Vec<String>,

    /// Keep only this category (repeatable)
    #[arg(long)]
    pub category: Vec<String>,

    /// Keep only this model year (repeatable)
    #[arg(long)]
    pub year: Vec<String>,

    /// Keep only this driving type (repeatable, tires only)
    #[arg(long)]
    pub driving_type: Vec<String>,

    /// Sort order (featured, price-low, price-high, newest)
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortMode>,

    /// Results layout for the TUI (list, grid)
    #[arg(long, value_parser = parse_view)]
    pub view: Option<ViewMode>,

    /// Print the filtered listing and exit
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Print listing output as JSON (use with --list or --facets)
    #[arg(long)]
    pub json: bool,

    /// Print facet options of the catalog and exit
    #[arg(long)]
    pub facets: bool,

    /// Do not narrow results to saved vehicles
    #[arg(long)]
    pub ignore_vehicles: bool,

    /// Save a vehicle (use "" for unknown fields)
    #[arg(long, num_args = 5, value_names = ["YEAR", "MAKE", "MODEL", "TRIM", "TIRE_SIZE"])]
    pub add_vehicle: Option<Vec<String>>,

    /// Remove the saved vehicle at position N (as shown by --list-vehicles)
    #[arg(long, value_name = "N")]
    pub remove_vehicle: Option<usize>,

    /// List saved vehicles and exit
    #[arg(long)]
    pub list_vehicles: bool,

    /// Remove every saved vehicle and exit
    #[arg(long)]
    pub clear_vehicles: bool,

    /// Clear downloaded catalog caches and exit
    #[arg(long)]
    pub clear_cache: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_kind(s: &str) -> Result<ProductKind, String> {
    ProductKind::from_config_key(s).ok_or_else(|| format!("unknown kind '{s}' (tires, wheels)"))
}

fn parse_sort(s: &str) -> Result<SortMode, String> {
    SortMode::from_config_key(s)
        .ok_or_else(|| format!("unknown sort '{s}' (featured, price-low, price-high, newest)"))
}

fn parse_view(s: &str) -> Result<ViewMode, String> {
    ViewMode::from_config_key(s).ok_or_else(|| format!("unknown view '{s}' (list, grid)"))
}

/// What: Process all command-line arguments and handle early-exit flags.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Some(exit_code)` when a one-shot command ran; `None` to continue to the TUI.
///
/// Details:
/// - Vehicle and cache maintenance run first, then `--list` / `--facets`.
/// - Several maintenance flags may be combined; the first failure wins.
pub async fn process_args(args: &Args) -> Option<i32> {
    use crate::args::{cache, listing, vehicles};

    let mut ran = false;
    let mut code = 0;
    let mut record = |result: i32| {
        ran = true;
        if code == 0 {
            code = result;
        }
    };

    if args.clear_cache {
        record(cache::handle_clear_cache());
    }
    if args.clear_vehicles {
        record(vehicles::handle_clear_vehicles());
    }
    if let Some(index) = args.remove_vehicle {
        record(vehicles::handle_remove_vehicle(index));
    }
    if let Some(fields) = &args.add_vehicle {
        record(vehicles::handle_add_vehicle(fields));
    }
    if args.list_vehicles {
        record(vehicles::handle_list_vehicles());
    }
    if args.list || args.facets {
        record(listing::handle_listing(args).await);
    }

    ran.then_some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Typed flags parse and repeatable filters accumulate
    fn args_parse_typed_flags() {
        let args = Args::parse_from([
            "tirecat", "--kind", "wheels", "--sort", "price_low", "--brand", "Acme", "--brand",
            "Zenith", "--year", "2021", "--list", "--json",
        ]);
        assert_eq!(args.kind, Some(ProductKind::Wheels));
        assert_eq!(args.sort, Some(SortMode::PriceLow));
        assert_eq!(args.brand, vec!["Acme", "Zenith"]);
        assert_eq!(args.year, vec!["2021"]);
        assert!(args.list && args.json);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    /// What: Unknown enum values and short vehicle lists are rejected
    fn args_reject_invalid_values() {
        assert!(Args::try_parse_from(["tirecat", "--sort", "cheapest-first"]).is_err());
        assert!(Args::try_parse_from(["tirecat", "--kind", "boats"]).is_err());
        assert!(Args::try_parse_from(["tirecat", "--add-vehicle", "2020", "Tesla"]).is_err());
        let ok = Args::try_parse_from([
            "tirecat", "--add-vehicle", "2020", "Tesla", "Model3", "", "235/45R18",
        ])
        .expect("five values");
        assert_eq!(ok.add_vehicle.map(|v| v.len()), Some(5));
    }
}
