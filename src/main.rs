//! tirecat binary entrypoint kept minimal. The interactive runtime lives in `tirecat::app`.

mod args;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use tirecat::app::FeedSource;
use tirecat::state::{AppState, ProductFeed};

struct TirecatTimer;

impl tracing_subscriber::fmt::time::FormatTime for TirecatTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        // "YYYY-MM-DD-T HH:MM:SS"
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `{config}/logs/tirecat.log`, falling back to stderr.
///
/// Inputs:
/// - `level`: Default filter used when `RUST_LOG` is unset
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = tirecat::config::logs_dir().join("tirecat.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(TirecatTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(TirecatTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tirecat starting");

    tirecat::config::ensure_settings_file();
    if let Some(code) = args::process_args(&args).await {
        std::process::exit(code);
    }

    let settings = args::utils::effective_settings(&args, tirecat::config::settings());
    let saved = tirecat::vehicles::load_saved_vehicles(&tirecat::vehicles::saved_vehicles_path());
    let mut app = AppState::new(&settings, saved);
    app.filter = args::utils::filter_from_args(&args, &settings);

    let source = match &args.products_file {
        Some(path) => match tirecat::sources::load_products_file(path) {
            Ok(items) => FeedSource::Preloaded(ProductFeed::ready(items)),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to read products file");
                eprintln!("Could not read {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => FeedSource::Remote(args::utils::catalog_request(&settings)),
    };

    if let Err(err) = tirecat::app::run(app, source).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("tirecat: {err}");
        std::process::exit(1);
    }
    tracing::info!("tirecat exited");
}
