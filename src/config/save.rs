use std::fs;
use std::path::Path;

use crate::config::skeleton::SETTINGS_SKELETON_CONTENT;
use crate::state::{SortMode, ViewMode};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Write the default settings file when none exists yet.
///
/// Inputs: none
///
/// Output:
/// - None; failures are logged.
pub fn ensure_settings_file() {
    let path = super::settings_config_path();
    if path.exists() {
        return;
    }
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match fs::write(&path, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => tracing::info!(path = %path.display(), "[Config] wrote default settings.conf"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "[Config] failed to write default settings.conf"),
    }
}

/// What: Set one key in a settings file, preserving comments and other keys.
///
/// Inputs:
/// - `path`: Settings file path
/// - `key_norm`: Normalized key (lowercase, `_` separated)
/// - `value`: New value text
///
/// Output:
/// - `Ok(())` once written.
///
/// Details:
/// - A missing or empty file starts from the default skeleton.
/// - The first matching line is rewritten; otherwise the key is appended.
///
/// # Errors
/// - Directory creation or file write failures
pub fn save_key_in(path: &Path, key_norm: &str, value: &str) -> Result<()> {
    let existing = fs::read_to_string(path).unwrap_or_default();
    let source = if existing.trim().is_empty() {
        SETTINGS_SKELETON_CONTENT
    } else {
        existing.as_str()
    };
    let mut lines: Vec<String> = source.lines().map(ToString::to_string).collect();
    let mut replaced = false;
    for line in &mut lines {
        if crate::util::config::skip_comment_or_empty(line) {
            continue;
        }
        if let Some((key, _)) = crate::util::config::parse_key_value(line)
            && key == key_norm
            && !replaced
        {
            *line = format!("{key_norm} = {value}");
            replaced = true;
        }
    }
    if !replaced {
        lines.push(format!("{key_norm} = {value}"));
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

/// Persist selected sort mode back to settings.conf.
pub fn save_sort_mode(sm: SortMode) {
    let path = super::settings_config_path();
    if let Err(e) = save_key_in(&path, "sort_mode", sm.as_config_key()) {
        tracing::warn!(path = %path.display(), error = %e, "[Config] failed to save sort_mode");
    }
}

/// Persist selected view mode back to settings.conf.
pub fn save_view_mode(vm: ViewMode) {
    let path = super::settings_config_path();
    if let Err(e) = save_key_in(&path, "view_mode", vm.as_config_key()) {
        tracing::warn!(path = %path.display(), error = %e, "[Config] failed to save view_mode");
    }
}
