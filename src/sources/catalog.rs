//! Catalog download and JSON body normalization.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::{HTTP_CLIENT, Result, cache};
use crate::config::Settings;
use crate::state::{Product, ProductFeed, ProductKind};

/// Keys under which an object-shaped response may carry the product array.
const WRAPPER_KEYS: [&str; 5] = ["data", "items", "products", "tires", "wheels"];

/// Everything needed to obtain one catalog.
#[derive(Clone, Debug)]
pub struct CatalogRequest {
    /// REST base URL without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Disk cache lifetime in seconds; `0` disables the disk cache.
    pub disk_ttl_secs: i64,
    /// Directory holding the disk cache files.
    pub cache_dir: PathBuf,
    /// When `false`, both caches are bypassed (still refreshed on success).
    pub use_cache: bool,
}

impl CatalogRequest {
    /// What: Build a request from user settings.
    ///
    /// Inputs:
    /// - `settings`: Loaded settings
    /// - `cache_dir`: Lists directory for disk caches
    ///
    /// Output:
    /// - Request with caching enabled.
    #[must_use]
    pub fn from_settings(settings: &Settings, cache_dir: PathBuf) -> Self {
        let ttl_minutes = i64::try_from(settings.catalog_cache_ttl_minutes).unwrap_or(i64::MAX / 60);
        Self {
            base_url: settings.api_base_url.clone(),
            timeout: Duration::from_secs(settings.request_timeout_secs),
            disk_ttl_secs: ttl_minutes.saturating_mul(60),
            cache_dir,
            use_cache: true,
        }
    }
}

/// What: Build the collection URL for a catalog kind.
///
/// Inputs:
/// - `base`: REST base URL (a trailing `/` is tolerated)
/// - `kind`: Catalog kind
///
/// Output:
/// - `"{base}/tires"` or `"{base}/wheels"`.
#[must_use]
pub fn catalog_url(base: &str, kind: ProductKind) -> String {
    format!("{}/{}", base.trim_end_matches('/'), kind.as_config_key())
}

/// What: Extract products from a catalog response body.
///
/// Inputs:
/// - `body`: Parsed JSON body
///
/// Output:
/// - `Some(products)` for a bare array or an object wrapping one under a
///   known key; `None` for any other shape.
///
/// Details:
/// - Array entries that are not product objects are skipped.
#[must_use]
pub fn parse_catalog_body(body: &Value) -> Option<Vec<Product>> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(map) => WRAPPER_KEYS
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_array))?,
        _ => return None,
    };
    let products: Vec<Product> = items.iter().filter_map(Product::from_value).collect();
    if products.len() != items.len() {
        debug!(
            skipped = items.len() - products.len(),
            "non-object catalog entries skipped"
        );
    }
    Some(products)
}

/// What: Read a catalog from a local JSON file.
///
/// Inputs:
/// - `path`: File holding a catalog response body
///
/// Output:
/// - Parsed products.
///
/// # Errors
/// - Read failures, invalid JSON, or an unrecognized body shape
pub fn load_products_file(path: &Path) -> Result<Vec<Product>> {
    let text = std::fs::read_to_string(path)?;
    let body: Value = serde_json::from_str(&text)?;
    parse_catalog_body(&body).ok_or_else(|| {
        format!("{}: expected a product array or an object wrapping one", path.display()).into()
    })
}

/// What: Download one catalog from the REST API.
///
/// Inputs:
/// - `req`: Request parameters
/// - `kind`: Catalog kind
///
/// Output:
/// - Parsed products in backend order.
///
/// # Errors
/// - Network failures, timeouts, non-success status, invalid JSON, or an
///   unrecognized body shape
pub async fn fetch_catalog(req: &CatalogRequest, kind: ProductKind) -> Result<Vec<Product>> {
    let url = catalog_url(&req.base_url, kind);
    debug!(url = %url, "fetching catalog");
    let resp = HTTP_CLIENT
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/json")
        .timeout(req.timeout)
        .send()
        .await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("{url} returned HTTP {status}").into());
    }
    let body: Value = resp.json().await?;
    let products = parse_catalog_body(&body)
        .ok_or_else(|| format!("{url}: unexpected response shape"))?;
    info!(kind = kind.as_config_key(), items = products.len(), "catalog fetched");
    Ok(products)
}

/// What: Obtain a catalog feed, consulting caches before the network.
///
/// Inputs:
/// - `req`: Request parameters
/// - `kind`: Catalog kind
///
/// Output:
/// - A ready feed on success, or a failed feed carrying the error text.
///
/// Details:
/// - Lookup order is memory, then disk, then network. A network success
///   refreshes both caches.
pub async fn load_feed(req: &CatalogRequest, kind: ProductKind) -> ProductFeed {
    let url = catalog_url(&req.base_url, kind);
    if req.use_cache {
        if let Some(items) = cache::memory_get(&url) {
            return ProductFeed::ready(items);
        }
        if let Some(items) = cache::load_from_disk_cache_in(&req.cache_dir, kind, req.disk_ttl_secs)
        {
            cache::memory_put(&url, &items);
            return ProductFeed::ready(items);
        }
    }
    match fetch_catalog(req, kind).await {
        Ok(items) => {
            cache::memory_put(&url, &items);
            if req.disk_ttl_secs > 0 {
                cache::save_to_disk_cache_in(&req.cache_dir, kind, &items);
            }
            ProductFeed::ready(items)
        }
        Err(e) => {
            warn!(kind = kind.as_config_key(), error = %e, "catalog fetch failed");
            ProductFeed::failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    /// What: URLs join the base and the collection segment
    fn catalog_url_joins_segments() {
        assert_eq!(
            catalog_url("http://h/api/", ProductKind::Tires),
            "http://h/api/tires"
        );
        assert_eq!(
            catalog_url("http://h/api", ProductKind::Wheels),
            "http://h/api/wheels"
        );
    }

    #[test]
    /// What: Bare arrays and wrapped arrays are both accepted
    ///
    /// - Input: Array with one junk entry; `{data: [...]}`; `{wheels: [...]}`; scalar; object without array
    /// - Output: Products for the array shapes; `None` otherwise
    fn parse_body_shapes() {
        let arr = json!([{"id": "1", "name": "A", "price": 10}, "junk"]);
        assert_eq!(parse_catalog_body(&arr).map(|v| v.len()), Some(1));
        let wrapped = json!({"data": [{"_id": "2", "name": "B"}], "total": 1});
        let items = parse_catalog_body(&wrapped).expect("wrapped");
        assert_eq!(items[0].id, "2");
        let wheels = json!({"wheels": [{"id": "w"}, {"id": "x"}]});
        assert_eq!(parse_catalog_body(&wheels).map(|v| v.len()), Some(2));
        assert!(parse_catalog_body(&json!(42)).is_none());
        assert!(parse_catalog_body(&json!({"message": "ok"})).is_none());
    }

    #[test]
    /// What: Local catalog files load and bad files report errors
    fn products_file_loads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good = dir.path().join("tires.json");
        std::fs::write(&good, r#"{"products":[{"id":"t1","name":"Grip","brand":{"name":"Acme"}}]}"#)
            .expect("write");
        let items = load_products_file(&good).expect("load");
        assert_eq!(items[0].brand.as_deref(), Some("Acme"));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{\"message\": 1}").expect("write");
        assert!(load_products_file(&bad).is_err());
        assert!(load_products_file(&dir.path().join("missing.json")).is_err());
    }

    #[tokio::test]
    /// What: An unreachable backend yields a failed feed instead of an error
    ///
    /// - Input: Base URL on a closed local port, caches disabled
    /// - Output: Feed with an error message and no items
    async fn load_feed_reports_network_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let req = CatalogRequest {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
            disk_ttl_secs: 0,
            cache_dir: dir.path().to_path_buf(),
            use_cache: false,
        };
        let feed = load_feed(&req, ProductKind::Tires).await;
        assert!(feed.error.is_some());
        assert!(feed.usable_items().is_empty());
    }
}
