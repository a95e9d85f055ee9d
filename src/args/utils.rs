//! Shared utilities for argument processing.

use tirecat::config::Settings;
use tirecat::sources::CatalogRequest;
use tirecat::state::{FacetDimension, FilterState, SavedVehicle};

use crate::args::Args;

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides log_level argument.
/// - `TIRECAT_TRACE=1` enables TRACE level for pipeline timing.
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else if std::env::var("TIRECAT_TRACE").ok().as_deref() == Some("1") {
        "trace".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Apply CLI overrides on top of loaded settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Settings loaded from settings.conf
///
/// Output:
/// - Settings with `--kind`, `--api-url`, `--sort`, `--view` and
///   `--ignore-vehicles` applied.
pub fn effective_settings(args: &Args, mut settings: Settings) -> Settings {
    if let Some(kind) = args.kind {
        settings.default_kind = kind;
    }
    if let Some(url) = &args.api_url {
        settings.api_base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(sort) = args.sort {
        settings.sort_mode = sort;
    }
    if let Some(view) = args.view {
        settings.view_mode = view;
    }
    if args.ignore_vehicles {
        settings.apply_saved_vehicles = false;
    }
    settings
}

/// What: Build the initial filter state from CLI filter flags.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Effective settings (sort mode)
///
/// Output:
/// - `FilterState` with every repeatable facet flag and the search term.
///
/// Details:
/// - Driving-type values are dropped for wheels, which have no such facet.
pub fn filter_from_args(args: &Args, settings: &Settings) -> FilterState {
    let mut st = FilterState {
        search: args.search.clone().unwrap_or_default(),
        sort: settings.sort_mode,
        ..FilterState::default()
    };
    let pairs: [(FacetDimension, &Vec<String>); 7] = [
        (FacetDimension::Brand, &args.brand),
        (FacetDimension::Make, &args.make),
        (FacetDimension::Model, &args.model),
        (FacetDimension::Trim, &args.trim),
        (FacetDimension::Category, &args.category),
        (FacetDimension::Year, &args.year),
        (FacetDimension::DrivingType, &args.driving_type),
    ];
    let dims = settings.default_kind.facet_dimensions();
    for (dim, values) in pairs {
        if !dims.contains(&dim) {
            if !values.is_empty() {
                tracing::warn!(dimension = dim.label(), "facet not available for this catalog; ignored");
            }
            continue;
        }
        st.selection_mut(dim).extend(values.iter().cloned());
    }
    st
}

/// What: Catalog request for the effective settings.
///
/// Inputs:
/// - `settings`: Effective settings
///
/// Output:
/// - Request using the lists directory for disk caching.
pub fn catalog_request(settings: &Settings) -> CatalogRequest {
    CatalogRequest::from_settings(settings, tirecat::config::lists_dir())
}

/// Saved vehicles to apply, or none when matching is disabled.
pub fn vehicles_for(settings: &Settings) -> Vec<SavedVehicle> {
    if settings.apply_saved_vehicles {
        tirecat::vehicles::load_saved_vehicles(&tirecat::vehicles::saved_vehicles_path())
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tirecat::state::{ProductKind, SortMode, ViewMode};

    #[test]
    /// What: CLI overrides replace settings values
    fn utils_effective_settings_overrides() {
        let args = Args::parse_from([
            "tirecat",
            "--kind",
            "wheels",
            "--api-url",
            "http://h/api/",
            "--sort",
            "newest",
            "--view",
            "grid",
            "--ignore-vehicles",
        ]);
        let s = effective_settings(&args, Settings::default());
        assert_eq!(s.default_kind, ProductKind::Wheels);
        assert_eq!(s.api_base_url, "http://h/api");
        assert_eq!(s.sort_mode, SortMode::Newest);
        assert_eq!(s.view_mode, ViewMode::Grid);
        assert!(!s.apply_saved_vehicles);
        assert!(vehicles_for(&s).is_empty());
    }

    #[test]
    /// What: Facet flags land in the filter state; wheel driving types are dropped
    fn utils_filter_from_args() {
        let args = Args::parse_from([
            "tirecat",
            "--search",
            "grip",
            "--brand",
            "Acme",
            "--driving-type",
            "AWD",
        ]);
        let tires = effective_settings(&args, Settings::default());
        let st = filter_from_args(&args, &tires);
        assert_eq!(st.search, "grip");
        assert!(st.brand.contains("Acme"));
        assert!(st.driving_type.contains("AWD"));

        let wheels = Settings {
            default_kind: ProductKind::Wheels,
            ..Settings::default()
        };
        let st = filter_from_args(&args, &wheels);
        assert!(st.driving_type.is_empty());
        assert!(st.brand.contains("Acme"));
    }

    #[test]
    /// What: Verbose flag wins over --log-level
    fn utils_log_level_verbose() {
        let args = Args::parse_from(["tirecat", "--log-level", "warn", "-v"]);
        assert_eq!(determine_log_level(&args), "debug");
    }
}
