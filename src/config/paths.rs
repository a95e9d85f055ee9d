use std::env;
use std::path::{Path, PathBuf};

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// What: Return the tirecat config directory without creating it.
///
/// Inputs: none
///
/// Output:
/// - `$XDG_CONFIG_HOME/tirecat` when set, otherwise `$HOME/.config/tirecat`.
fn config_dir_path() -> PathBuf {
    xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("tirecat")
}

/// XDG config directory for tirecat (ensured to exist)
#[must_use]
pub fn config_dir() -> PathBuf {
    let dir = config_dir_path();
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$XDG_CONFIG_HOME/tirecat/logs" (ensured to exist)
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Lists directory under config: saved vehicles and catalog caches (ensured to exist)
#[must_use]
pub fn lists_dir() -> PathBuf {
    let dir = config_dir().join("lists");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Location of `settings.conf`.
///
/// Inputs: none
///
/// Output:
/// - Path of the settings file (may not exist yet).
#[must_use]
pub fn settings_config_path() -> PathBuf {
    settings_path_in(&config_dir_path())
}

fn settings_path_in(dir: &Path) -> PathBuf {
    dir.join("settings.conf")
}
