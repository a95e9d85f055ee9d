//! Command-line cache management functionality.

use tirecat::{config, sources};

/// What: Handle the clear cache flag by removing catalog caches.
///
/// Inputs:
/// - None (uses `config::lists_dir()` to locate cache files).
///
/// Output:
/// - Process exit code (always `0`).
///
/// Details:
/// - Removes the disk catalog caches of both kinds and empties the in-memory cache.
/// - Prints the number of cleared files to stdout.
pub fn handle_clear_cache() -> i32 {
    tracing::info!("Clear cache requested from CLI");
    sources::clear_memory_cache();
    let cleared = sources::clear_disk_cache_in(&config::lists_dir());
    if cleared > 0 {
        tracing::info!(cleared_count = cleared, "cleared cache files");
        println!("Cleared {cleared} catalog cache file(s)");
    } else {
        tracing::info!("No cache files found to clear");
        println!("No catalog cache files found");
    }
    0
}
