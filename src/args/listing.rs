//! One-shot listing and facet output (`--list`, `--facets`).

use serde_json::{Map, Value, json};
use tirecat::config::Settings;
use tirecat::logic::{CatalogView, FacetOptions, recompute};
use tirecat::sources::{load_feed, load_products_file};
use tirecat::state::{FilterState, ProductFeed, ProductKind};
use tirecat::ui::format::{pad_to_width, price_label, product_subtitle, truncate_to_width};

use crate::args::Args;
use crate::args::utils::{catalog_request, effective_settings, filter_from_args, vehicles_for};

/// Column width of product names in text listings.
const NAME_COLUMN: usize = 36;

/// What: Render a listing as plain text.
///
/// Inputs:
/// - `kind`: Catalog kind
/// - `state`: Applied filter state
/// - `view`: Recomputed view
/// - `currency`: Currency prefix
///
/// Output:
/// - Header line, one line per product, and active filters when present.
pub fn render_listing(
    kind: ProductKind,
    state: &FilterState,
    view: &CatalogView,
    currency: &str,
) -> String {
    let mut out = format!(
        "Showing {} {} (sort: {})\n",
        view.count(),
        kind.label().to_lowercase(),
        state.sort.label()
    );
    let chips = state.active_chips();
    if !chips.is_empty() || !state.search.is_empty() {
        let mut parts: Vec<String> = chips
            .iter()
            .map(|(d, v)| format!("{}: {v}", d.label()))
            .collect();
        if !state.search.is_empty() {
            parts.push(format!("search: \"{}\"", state.search));
        }
        out.push_str(&format!("Filters: {}\n", parts.join(", ")));
    }
    for p in &view.products {
        let name = pad_to_width(&truncate_to_width(&p.name, NAME_COLUMN), NAME_COLUMN);
        let line = format!("  {name}  {:<24}  {}", price_label(p, currency), product_subtitle(p));
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// What: Render facet options as plain text.
///
/// Inputs:
/// - `kind`: Catalog kind (selects the dimensions shown)
/// - `facets`: Derived options
///
/// Output:
/// - One `Label: a, b, c` line per dimension; `(none)` when empty.
pub fn render_facets(kind: ProductKind, facets: &FacetOptions) -> String {
    kind.facet_dimensions()
        .iter()
        .map(|d| {
            let opts = facets.options(*d);
            let body = if opts.is_empty() {
                "(none)".to_string()
            } else {
                opts.join(", ")
            };
            format!("{}: {body}\n", d.label())
        })
        .collect()
}

/// What: Build the JSON document printed by `--json`.
///
/// Inputs:
/// - `kind`: Catalog kind
/// - `state`: Applied filter state
/// - `view`: Recomputed view
/// - `with_products` / `with_facets`: Sections to include
///
/// Output:
/// - Object with `kind`, `sort`, `count` and the requested sections.
pub fn listing_json(
    kind: ProductKind,
    state: &FilterState,
    view: &CatalogView,
    with_products: bool,
    with_facets: bool,
) -> Value {
    let mut doc = json!({
        "kind": kind.as_config_key(),
        "sort": state.sort.as_config_key(),
        "count": view.count(),
    });
    if with_products {
        doc["products"] = Value::Array(view.products.iter().cloned().map(Value::from).collect());
    }
    if with_facets {
        let facets: Map<String, Value> = kind
            .facet_dimensions()
            .iter()
            .map(|d| (d.label().to_lowercase().replace(' ', "_"), json!(view.facets.options(*d))))
            .collect();
        doc["facets"] = Value::Object(facets);
    }
    doc
}

async fn obtain_feed(args: &Args, settings: &Settings) -> ProductFeed {
    match &args.products_file {
        Some(path) => match load_products_file(path) {
            Ok(items) => ProductFeed::ready(items),
            Err(e) => ProductFeed::failed(e.to_string()),
        },
        None => load_feed(&catalog_request(settings), settings.default_kind).await,
    }
}

/// What: Handle `--list` and `--facets`.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - Exit code: `0` on success, `1` when the catalog could not be loaded.
pub async fn handle_listing(args: &Args) -> i32 {
    let settings = effective_settings(args, tirecat::config::settings());
    let kind = settings.default_kind;
    let feed = obtain_feed(args, &settings).await;
    if let Some(err) = &feed.error {
        eprintln!("Could not load {}: {err}", kind.label().to_lowercase());
        return 1;
    }
    let state = filter_from_args(args, &settings);
    let view = recompute(&feed, &state, &vehicles_for(&settings));
    tracing::info!(
        kind = kind.as_config_key(),
        shown = view.count(),
        total = feed.items.len(),
        "listing computed"
    );

    if args.json {
        match serde_json::to_string_pretty(&listing_json(kind, &state, &view, args.list, args.facets)) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode listing: {e}");
                return 1;
            }
        }
        return 0;
    }
    if args.list {
        print!("{}", render_listing(kind, &state, &view, &settings.currency_symbol));
    }
    if args.facets {
        print!("{}", render_facets(kind, &view.facets));
    }
    0
}
