//! Small utility helpers for lenient JSON extraction and number formatting.
//!
//! Catalog data comes from a storefront backend that is not strict about
//! types: years arrive as numbers or strings, prices sometimes as text, and
//! reference fields may be unpopulated ids instead of objects. The helpers
//! here read such values without failing so callers can treat anything
//! unusable as "absent".

pub mod config;

use serde_json::Value;

/// What: Extract a string value from a JSON object by key, defaulting to empty string.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - Returns the string value if found, or an empty string if the key is missing or not a string.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// What: Extract the first textual rendering found under any of the given keys.
///
/// Inputs:
/// - `v`: JSON object to search.
/// - `keys`: Candidate keys checked in order.
///
/// Output:
/// - `Some(String)` for the first key holding a string or a number; `None` otherwise.
///
/// Details:
/// - Numbers are rendered with [`format_number`], so `2020` and `2020.0` both
///   become `"2020"`.
/// - Strings are returned verbatim (no trimming).
#[must_use]
pub fn text_of(v: &Value, keys: &[&str]) -> Option<String> {
    for k in keys {
        match v.get(*k) {
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Number(n)) => {
                if let Some(f) = n.as_f64() {
                    return Some(format_number(f));
                }
            }
            _ => {}
        }
    }
    None
}

/// What: Extract a floating-point number from a JSON value under any of the given keys.
///
/// Inputs:
/// - `v`: JSON object to search.
/// - `keys`: Candidate keys checked in order.
///
/// Output:
/// - `Some(f64)` for the first key holding a finite number or a numeric string.
///
/// Details:
/// - Numeric strings are trimmed before parsing; `"$75"` is not numeric.
#[must_use]
pub fn f64_of(v: &Value, keys: &[&str]) -> Option<f64> {
    for k in keys {
        if let Some(n) = v.get(*k) {
            if let Some(f) = n.as_f64()
                && f.is_finite()
            {
                return Some(f);
            }
            if let Some(s) = n.as_str()
                && let Ok(f) = s.trim().parse::<f64>()
                && f.is_finite()
            {
                return Some(f);
            }
        }
    }
    None
}

/// What: Collect string entries of a JSON array under any of the given keys.
///
/// Inputs:
/// - `v`: JSON object to search.
/// - `keys`: Candidate keys checked in order.
///
/// Output:
/// - Strings of the first array found; non-string entries are skipped.
#[must_use]
pub fn arrs(v: &Value, keys: &[&str]) -> Vec<String> {
    for k in keys {
        if let Some(arr) = v.get(*k).and_then(Value::as_array) {
            return arr
                .iter()
                .filter_map(|e| e.as_str().map(ToOwned::to_owned))
                .collect();
        }
    }
    Vec::new()
}

/// What: Render a number the way a storefront would display a year or count.
///
/// Inputs:
/// - `f`: Number to render.
///
/// Output:
/// - Integer text when `f` is integral and within exact `f64` range, otherwise
///   the default float rendering.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_number(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

/// What: Parse a year display string into a sortable number.
///
/// Inputs:
/// - `year`: Optional year display value.
///
/// Output:
/// - Parsed finite number, or `f64::NEG_INFINITY` when absent, non-numeric or infinite.
#[must_use]
pub fn year_number(year: Option<&str>) -> f64 {
    year.and_then(|y| y.trim().parse::<f64>().ok())
        .filter(|f| f.is_finite())
        .unwrap_or(f64::NEG_INFINITY)
}
