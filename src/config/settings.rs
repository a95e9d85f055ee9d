use std::fs;
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

use tracing::{debug, warn};

use crate::state::{ProductKind, SortMode, ViewMode};
use crate::util::config::{parse_bool, parse_key_value, skip_comment_or_empty};

/// User-tunable settings loaded from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Storefront REST API base URL, without trailing slash.
    pub api_base_url: String,
    /// Catalog shown on startup.
    pub default_kind: ProductKind,
    /// Initial results ordering.
    pub sort_mode: SortMode,
    /// Initial results layout.
    pub view_mode: ViewMode,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Disk cache lifetime in minutes; `0` disables it.
    pub catalog_cache_ttl_minutes: u64,
    /// Whether saved vehicles narrow listings by default.
    pub apply_saved_vehicles: bool,
    /// Prefix for prices.
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            default_kind: ProductKind::Tires,
            sort_mode: SortMode::Featured,
            view_mode: ViewMode::List,
            request_timeout_secs: 10,
            catalog_cache_ttl_minutes: 30,
            apply_saved_vehicles: true,
            currency_symbol: "$".to_string(),
        }
    }
}

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys are ignored; malformed values leave the current value untouched.
/// - A trailing `/` on `api_base_url` is removed.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "api_base_url" | "api_url" => {
                let url = val.trim_end_matches('/');
                if !url.is_empty() {
                    settings.api_base_url = url.to_string();
                }
            }
            "default_kind" | "kind" => {
                if let Some(k) = ProductKind::from_config_key(&val) {
                    settings.default_kind = k;
                }
            }
            "sort_mode" | "results_sort" => {
                if let Some(sm) = SortMode::from_config_key(&val) {
                    settings.sort_mode = sm;
                }
            }
            "view_mode" | "results_view" => {
                if let Some(vm) = ViewMode::from_config_key(&val) {
                    settings.view_mode = vm;
                }
            }
            "request_timeout_secs" | "timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.request_timeout_secs = v;
                }
            }
            "catalog_cache_ttl_minutes" | "cache_ttl_minutes" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.catalog_cache_ttl_minutes = v;
                }
            }
            "apply_saved_vehicles" | "match_saved_vehicles" => {
                if let Some(b) = parse_bool(&val) {
                    settings.apply_saved_vehicles = b;
                }
            }
            "currency_symbol" | "currency" => {
                settings.currency_symbol = val;
            }
            _ => {}
        }
    }
}

struct SettingsCache {
    settings: Settings,
    mtime: Option<SystemTime>,
    initialized: bool,
}

static SETTINGS_CACHE: OnceLock<Mutex<SettingsCache>> = OnceLock::new();

/// What: Load user settings from `settings.conf`.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
///
/// Details:
/// - Re-reads the file only when its modification time changed since the last call.
#[must_use]
pub fn settings() -> Settings {
    let lock = SETTINGS_CACHE.get_or_init(|| {
        Mutex::new(SettingsCache {
            settings: Settings::default(),
            mtime: None,
            initialized: false,
        })
    });
    let Ok(mut cache) = lock.lock() else {
        warn!("[Config] Settings cache lock poisoned, using defaults");
        return Settings::default();
    };

    let path = super::settings_config_path();
    let mtime = fs::metadata(&path).and_then(|m| m.modified()).ok();
    if cache.initialized && cache.mtime == mtime {
        return cache.settings.clone();
    }

    let mut out = Settings::default();
    match fs::read_to_string(&path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Err(e) => {
            debug!(
                path = %path.display(),
                error = %e,
                "[Config] settings.conf missing or unreadable, using defaults"
            );
        }
    }
    cache.settings = out.clone();
    cache.mtime = mtime;
    cache.initialized = true;
    out
}
