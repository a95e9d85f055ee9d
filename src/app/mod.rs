//! Interactive runtime: terminal lifecycle, background fetches, and the event loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc, time::interval};

use crate::sources::CatalogRequest;
use crate::state::{AppState, ProductFeed, ProductKind};
use crate::ui::ui;

mod background;
mod persist;
mod terminal;

use background::{spawn_catalog_worker, spawn_event_thread};
use terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Where the interactive browser takes its catalogs from.
#[derive(Debug)]
pub enum FeedSource {
    /// Both kinds are fetched from the REST API in the background.
    Remote(CatalogRequest),
    /// A single pre-loaded feed for the current kind; the other kind stays empty.
    Preloaded(ProductFeed),
}

/// What: Run the interactive catalog browser until the user quits.
///
/// Inputs:
/// - `app`: Initial state (settings, CLI overrides, saved vehicles applied)
/// - `source`: Catalog source
///
/// Output:
/// - `Ok(())` on a clean exit.
///
/// # Errors
/// - Terminal setup or drawing failures
///
/// Details:
/// - Sort and view mode changes are written back to settings.conf on tick.
/// - The terminal is restored even when the loop fails.
pub async fn run(mut app: AppState, source: FeedSource) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (feed_tx, mut feed_rx) = mpsc::unbounded_channel::<(ProductKind, ProductFeed)>();
    let cancelled = Arc::new(AtomicBool::new(false));

    match source {
        FeedSource::Remote(req) => {
            spawn_catalog_worker(req, vec![app.kind, app.kind.toggled()], feed_tx);
        }
        FeedSource::Preloaded(feed) => {
            let other = app.kind.toggled();
            app.set_feed(other, ProductFeed::ready(Vec::new()));
            app.set_feed(app.kind, feed);
        }
    }
    app.refresh_view();

    setup_terminal()?;
    let outcome = event_loop(&mut app, &mut event_rx, &mut feed_rx, &event_tx, &cancelled).await;
    cancelled.store(true, Ordering::Relaxed);
    persist::maybe_save_sort(&mut app);
    persist::maybe_save_view(&mut app);
    if let Err(e) = restore_terminal() {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    outcome
}

async fn event_loop(
    app: &mut AppState,
    event_rx: &mut mpsc::UnboundedReceiver<crossterm::event::Event>,
    feed_rx: &mut mpsc::UnboundedReceiver<(ProductKind, ProductFeed)>,
    event_tx: &mpsc::UnboundedSender<crossterm::event::Event>,
    cancelled: &Arc<AtomicBool>,
) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    terminal.clear()?;
    spawn_event_thread(event_tx.clone(), Arc::clone(cancelled));
    let mut tick = interval(Duration::from_secs(2));

    loop {
        terminal.draw(|f| ui(f, app))?;
        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(&ev, app) {
                    break;
                }
            }
            Some((kind, feed)) = feed_rx.recv() => {
                tracing::info!(
                    kind = kind.as_config_key(),
                    items = feed.items.len(),
                    failed = feed.error.is_some(),
                    "[Catalog] feed received"
                );
                app.set_feed(kind, feed);
            }
            _ = tick.tick() => {
                persist::maybe_save_sort(app);
                persist::maybe_save_view(app);
            }
        }
    }
    Ok(())
}
