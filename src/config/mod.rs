//! Settings and filesystem locations for tirecat.
//!
//! Settings live in `settings.conf` under the config directory as simple
//! `key = value` lines. Public re-exports keep the `crate::config::*` API flat.

/// Path resolution for config, lists and logs directories.
mod paths;
/// Writing individual keys back to settings.conf.
mod save;
/// Settings access, parsing and caching.
mod settings;
/// Default settings file content.
mod skeleton;

pub use paths::{config_dir, lists_dir, logs_dir, settings_config_path};
pub use save::{ensure_settings_file, save_key_in, save_sort_mode, save_view_mode};
pub use settings::{Settings, parse_settings, settings};
pub use skeleton::SETTINGS_SKELETON_CONTENT;

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize tests that touch `HOME`/`XDG_CONFIG_HOME`.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
