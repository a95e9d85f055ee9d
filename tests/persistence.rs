//! Filesystem-backed behavior: saved vehicles, settings write-back and catalog caches.

use std::time::Duration;

use serde_json::json;
use tirecat::config::{Settings, parse_settings, save_key_in};
use tirecat::sources::{CatalogRequest, disk_cache_path_in, load_feed};
use tirecat::state::{ProductKind, SavedVehicle, SortMode, ViewMode};
use tirecat::vehicles::{add_saved_vehicle, load_saved_vehicles};

#[test]
/// What: A single persisted object loads as a one-element list; garbage loads empty
/// and is backed up before the next save replaces it
fn persistence_saved_vehicle_shapes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("saved_vehicles.json");
    std::fs::write(
        &path,
        r#"{"year": 2020, "make": "Tesla", "model": "Model3", "trim": "LR", "tireSize": "235/45R18"}"#,
    )
    .expect("write");
    let list = load_saved_vehicles(&path);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].year, "2020");

    std::fs::write(&path, "definitely not json").expect("write");
    assert!(load_saved_vehicles(&path).is_empty());

    assert!(
        add_saved_vehicle(
            &path,
            SavedVehicle {
                model: "ModelY".into(),
                ..SavedVehicle::default()
            }
        )
        .expect("add")
    );
    assert_eq!(load_saved_vehicles(&path).len(), 1);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("saved_vehicles.json.bak")).expect("backup"),
        "definitely not json"
    );
}

#[test]
/// What: Sort and view modes written back to settings.conf parse again
fn persistence_settings_write_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.conf");
    std::fs::write(&path, "# mine\napi_base_url = https://shop.example/api\n").expect("write");
    save_key_in(&path, "sort_mode", SortMode::PriceHigh.as_config_key()).expect("save sort");
    save_key_in(&path, "view_mode", ViewMode::Grid.as_config_key()).expect("save view");

    let content = std::fs::read_to_string(&path).expect("read");
    assert!(content.starts_with("# mine\n"));
    let mut s = Settings::default();
    parse_settings(&content, &mut s);
    assert_eq!(s.api_base_url, "https://shop.example/api");
    assert_eq!(s.sort_mode, SortMode::PriceHigh);
    assert_eq!(s.view_mode, ViewMode::Grid);
}

#[tokio::test]
/// What: A fresh disk cache serves the catalog without reaching the network
///
/// - Input: Cache file saved just now; API base on a closed local port
/// - Output: Ready feed with the cached products
async fn persistence_disk_cache_serves_feed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let entry = json!({
        "data": [{"id": "w1", "name": "Forged 18", "brand": {"name": "Rota"}, "price": 240}],
        "saved_at": chrono::Utc::now().timestamp(),
    });
    std::fs::write(
        disk_cache_path_in(dir.path(), ProductKind::Wheels),
        entry.to_string(),
    )
    .expect("write cache");

    let req = CatalogRequest {
        base_url: "http://127.0.0.1:9/disk-cache-test".to_string(),
        timeout: Duration::from_secs(2),
        disk_ttl_secs: 600,
        cache_dir: dir.path().to_path_buf(),
        use_cache: true,
    };
    let feed = load_feed(&req, ProductKind::Wheels).await;
    assert!(feed.error.is_none());
    assert_eq!(feed.items.len(), 1);
    assert_eq!(feed.items[0].brand.as_deref(), Some("Rota"));

    let stale = CatalogRequest {
        base_url: "http://127.0.0.1:9/disk-cache-test-stale".to_string(),
        disk_ttl_secs: 0,
        ..req
    };
    let feed = load_feed(&stale, ProductKind::Wheels).await;
    assert!(feed.error.is_some());
}
