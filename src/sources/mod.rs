//! Catalog retrieval from the storefront REST API, with memory and disk caches.

use std::sync::LazyLock;
use std::time::Duration;

mod cache;
mod catalog;

pub use cache::{clear_disk_cache_in, clear_memory_cache, disk_cache_path_in};
pub use catalog::{
    CatalogRequest, catalog_url, fetch_catalog, load_feed, load_products_file,
    parse_catalog_body,
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Shared HTTP client with connection pooling for catalog requests.
/// Per-request timeouts come from settings; only the connect timeout is fixed here.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .user_agent(format!("tirecat/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});
