//! End-to-end catalog pipeline tests against wire-shaped product JSON.

use serde_json::json;
use tirecat::logic::{extract_facets, recompute};
use tirecat::sources::parse_catalog_body;
use tirecat::state::{FacetDimension, FilterState, Product, ProductFeed, SavedVehicle, SortMode};
use tirecat::vehicles::parse_saved_vehicles;

/// Three-tire catalog shared by the scenario tests.
fn scenario_feed() -> ProductFeed {
    let body = json!([
        {"id": "a", "name": "Alpha", "brand": {"name": "Acme"}, "price": 100, "year": {"year": 2020}},
        {"id": "b", "name": "Beta", "brand": {"name": "Zenith"}, "price": 50, "year": {"year": 2022}},
        {"id": "g", "name": "Gamma", "brand": {"name": "Acme"}, "price": 75, "year": {"year": 2021}}
    ]);
    ProductFeed::ready(parse_catalog_body(&body).expect("array body"))
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[test]
/// What: Brand filter plus price-low sort
///
/// - Input: Brand {Acme}, sort price-low
/// - Output: Gamma then Alpha
fn pipeline_scenario_brand_and_price_low() {
    let mut st = FilterState {
        sort: SortMode::PriceLow,
        ..FilterState::default()
    };
    st.toggle(FacetDimension::Brand, "Acme");
    let view = recompute(&scenario_feed(), &st, &[]);
    assert_eq!(names(&view.products), vec!["Gamma", "Alpha"]);
    assert_eq!(view.count(), 2);
}

#[test]
/// What: Search inspects name and description only, never the brand
fn pipeline_scenario_search_ignores_brand() {
    let st = FilterState {
        search: "zen".into(),
        ..FilterState::default()
    };
    assert_eq!(recompute(&scenario_feed(), &st, &[]).count(), 0);
}

#[test]
/// What: A saved vehicle keeps only products for its model
fn pipeline_scenario_vehicle_model_match() {
    let body = json!([
        {"id": "1", "name": "Fits 3", "model": {"model": "Model3"}},
        {"id": "2", "name": "Fits S", "model": {"model": "ModelS"}}
    ]);
    let feed = ProductFeed::ready(parse_catalog_body(&body).expect("array"));
    let vehicles =
        parse_saved_vehicles(r#"[{"model":"Model3","year":"","make":"","trim":"","tireSize":""}]"#);
    let view = recompute(&feed, &FilterState::default(), &vehicles);
    assert_eq!(names(&view.products), vec!["Fits 3"]);
}

#[test]
/// What: Recompute is idempotent and never mutates its input
fn pipeline_recompute_idempotent() {
    let feed = scenario_feed();
    let before = feed.clone();
    let st = FilterState {
        sort: SortMode::Newest,
        ..FilterState::default()
    };
    let first = recompute(&feed, &st, &[]);
    let second = recompute(&feed, &st, &[]);
    assert_eq!(first, second);
    assert_eq!(feed, before);
    assert_eq!(names(&first.products), vec!["Beta", "Gamma", "Alpha"]);
}

#[test]
/// What: Empty filter under featured sort returns the feed unchanged
fn pipeline_empty_filter_identity() {
    let feed = scenario_feed();
    let view = recompute(&feed, &FilterState::default(), &[]);
    assert_eq!(view.products, feed.items);
}

#[test]
/// What: Selections across dimensions narrow conjunctively
///
/// - Input: Brand {Acme} alone, then Brand {Acme} and Year {2022}
/// - Output: Two products, then none
fn pipeline_conjunctive_narrowing() {
    let feed = scenario_feed();
    let mut st = FilterState::default();
    st.toggle(FacetDimension::Brand, "Acme");
    let narrowed = recompute(&feed, &st, &[]);
    st.toggle(FacetDimension::Year, "2022");
    let both = recompute(&feed, &st, &[]);
    assert_eq!(narrowed.count(), 2);
    assert_eq!(both.count(), 0);
    assert!(both.products.iter().all(|p| narrowed.products.contains(p)));
}

#[test]
/// What: Newest keeps input order among equal years
fn pipeline_newest_is_stable() {
    let body = json!([
        {"id": "1", "name": "First", "year": {"year": 2021}},
        {"id": "2", "name": "Undated"},
        {"id": "3", "name": "Second", "year": {"year": "2021"}},
        {"id": "4", "name": "Latest", "year": {"year": 2023}}
    ]);
    let feed = ProductFeed::ready(parse_catalog_body(&body).expect("array"));
    let st = FilterState {
        sort: SortMode::Newest,
        ..FilterState::default()
    };
    let view = recompute(&feed, &st, &[]);
    assert_eq!(
        names(&view.products),
        vec!["Latest", "First", "Second", "Undated"]
    );
}

#[test]
/// What: Products missing facet references are safe to extract and filter
fn pipeline_absence_safety() {
    let body = json!([
        {"id": "1", "name": "Bare"},
        {"id": "2", "name": "Odd", "brand": "Acme", "year": null, "make": {"make": "  "}},
        {"id": "3", "name": "Full", "brand": {"name": "Acme"}}
    ]);
    let items = parse_catalog_body(&body).expect("array");
    let facets = extract_facets(&items);
    assert_eq!(facets.brand, vec!["Acme"]);
    assert!(facets.year.is_empty());
    assert!(facets.make.is_empty());

    let mut st = FilterState::default();
    st.toggle(FacetDimension::Brand, "Acme");
    let view = recompute(&ProductFeed::ready(items), &st, &[]);
    assert_eq!(names(&view.products), vec!["Full"]);
}

#[test]
/// What: Loading and failed feeds produce nothing, even with vehicles applied
fn pipeline_unready_feeds_are_empty() {
    let vehicles = vec![SavedVehicle::default()];
    for feed in [ProductFeed::loading(), ProductFeed::failed("timeout")] {
        let view = recompute(&feed, &FilterState::default(), &vehicles);
        assert_eq!(view.count(), 0);
        assert!(view.facets.is_empty());
    }
}

#[test]
/// What: Wire normalization handles ids, string prices and bad discounts
fn pipeline_wire_normalization() {
    let body = json!({"data": [
        {"_id": "x1", "name": "Sale", "price": "120.5", "discountPrice": 99},
        {"_id": "x2", "name": "Bogus", "price": 50, "discountPrice": 80, "year": {"year": "2019"}}
    ]});
    let items = parse_catalog_body(&body).expect("wrapped");
    assert_eq!(items[0].id, "x1");
    assert!((items[0].price - 120.5).abs() < f64::EPSILON);
    assert_eq!(items[0].discount_price, Some(99.0));
    assert_eq!(items[1].discount_price, None);
    assert_eq!(items[1].year.as_deref(), Some("2019"));
}
