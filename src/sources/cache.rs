//! Cache management for catalogs (in-memory and disk).
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex};
use std::time::{Duration, Instant};

use lru::LruCache;
use tracing::{debug, info, warn};

use crate::state::{Product, ProductKind};

/// Cache entry with data and timestamp (in-memory).
struct CacheEntry {
    /// Cached catalog products.
    data: Vec<Product>,
    /// When the entry was stored.
    timestamp: Instant,
}

/// Disk cache entry with data and Unix timestamp (for serialization).
#[derive(serde::Serialize, serde::Deserialize, Debug)]
struct DiskCacheEntry {
    /// Cached catalog products.
    data: Vec<Product>,
    /// Unix timestamp (seconds since epoch) when the cache was saved.
    saved_at: i64,
}

/// Number of catalog URLs kept in memory.
const MEMORY_CAPACITY: usize = 8;
/// In-memory entries older than this are refetched.
pub(super) const MEMORY_TTL: Duration = Duration::from_secs(900);

/// In-memory catalog cache keyed by request URL.
static MEMORY_CACHE: LazyLock<Mutex<LruCache<String, CacheEntry>>> = LazyLock::new(|| {
    Mutex::new(LruCache::new(
        NonZeroUsize::new(MEMORY_CAPACITY).unwrap_or(NonZeroUsize::MIN),
    ))
});

/// What: Look up a fresh in-memory catalog.
///
/// Inputs:
/// - `url`: Catalog request URL
///
/// Output:
/// - `Some(products)` when cached within [`MEMORY_TTL`]; `None` otherwise.
pub(super) fn memory_get(url: &str) -> Option<Vec<Product>> {
    let mut cache = MEMORY_CACHE.lock().ok()?;
    let entry = cache.get(url)?;
    if entry.timestamp.elapsed() < MEMORY_TTL {
        debug!(url, items = entry.data.len(), "catalog served from memory");
        Some(entry.data.clone())
    } else {
        cache.pop(url);
        None
    }
}

/// Store a catalog in memory under its request URL.
pub(super) fn memory_put(url: &str, data: &[Product]) {
    if let Ok(mut cache) = MEMORY_CACHE.lock() {
        cache.put(
            url.to_string(),
            CacheEntry {
                data: data.to_vec(),
                timestamp: Instant::now(),
            },
        );
    }
}

/// Drop every in-memory catalog.
pub fn clear_memory_cache() {
    if let Ok(mut cache) = MEMORY_CACHE.lock() {
        cache.clear();
    }
}

/// What: Get the path to the disk cache file for a catalog kind.
///
/// Inputs:
/// - `dir`: Lists directory
/// - `kind`: Catalog kind
///
/// Output:
/// - `PathBuf` to the cache file.
#[must_use]
pub fn disk_cache_path_in(dir: &Path, kind: ProductKind) -> PathBuf {
    dir.join(format!("{}_catalog_cache.json", kind.as_config_key()))
}

/// What: Load cached data from disk if available and not expired.
///
/// Inputs:
/// - `dir`: Lists directory
/// - `kind`: Catalog kind
/// - `ttl_secs`: Maximum age; `<= 0` disables the disk cache
///
/// Output:
/// - `Some(Vec<Product>)` if a valid cache exists, `None` otherwise.
///
/// Details:
/// - Returns `None` if the file doesn't exist, is corrupted, or is older than `ttl_secs`.
pub(super) fn load_from_disk_cache_in(
    dir: &Path,
    kind: ProductKind,
    ttl_secs: i64,
) -> Option<Vec<Product>> {
    if ttl_secs <= 0 {
        return None;
    }
    let path = disk_cache_path_in(dir, kind);
    let content = std::fs::read_to_string(&path).ok()?;
    let entry: DiskCacheEntry = match serde_json::from_str(&content) {
        Ok(e) => e,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt catalog cache ignored");
            return None;
        }
    };
    let age = chrono::Utc::now().timestamp() - entry.saved_at;
    if (0..ttl_secs).contains(&age) {
        info!(
            kind = kind.as_config_key(),
            items = entry.data.len(),
            age_secs = age,
            "loaded catalog from disk cache"
        );
        Some(entry.data)
    } else {
        debug!(kind = kind.as_config_key(), age_secs = age, "disk cache expired");
        None
    }
}

/// What: Save a catalog to the disk cache with the current timestamp.
///
/// Inputs:
/// - `dir`: Lists directory
/// - `kind`: Catalog kind
/// - `data`: Products to cache
///
/// Details:
/// - Logs errors but does not propagate them.
pub(super) fn save_to_disk_cache_in(dir: &Path, kind: ProductKind, data: &[Product]) {
    let entry = DiskCacheEntry {
        data: data.to_vec(),
        saved_at: chrono::Utc::now().timestamp(),
    };
    let path = disk_cache_path_in(dir, kind);
    match serde_json::to_string(&entry) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                warn!(error = %e, path = %path.display(), "failed to write catalog cache");
            } else {
                debug!(kind = kind.as_config_key(), items = data.len(), "saved catalog to disk cache");
            }
        }
        Err(e) => warn!(error = %e, "failed to serialize catalog cache"),
    }
}

/// What: Remove the disk cache files of every catalog kind.
///
/// Inputs:
/// - `dir`: Lists directory
///
/// Output:
/// - Number of files removed.
#[must_use]
pub fn clear_disk_cache_in(dir: &Path) -> usize {
    [ProductKind::Tires, ProductKind::Wheels]
        .into_iter()
        .filter(|k| std::fs::remove_file(disk_cache_path_in(dir, *k)).is_ok())
        .count()
}
