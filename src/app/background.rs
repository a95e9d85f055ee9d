use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::{CatalogRequest, load_feed};
use crate::state::{ProductFeed, ProductKind};

/// What: Spawn a thread that forwards terminal events to the async loop.
///
/// Inputs:
/// - `event_tx`: Channel for terminal events
/// - `cancelled`: Flag checked between polls so the thread exits with the app
///
/// Details:
/// - Polls with a 50ms timeout so cancellation is noticed promptly.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}

/// What: Fetch every catalog kind concurrently and report each as it lands.
///
/// Inputs:
/// - `req`: Catalog request parameters
/// - `kinds`: Kinds to load
/// - `feed_tx`: Channel receiving `(kind, feed)` updates
///
/// Details:
/// - Each kind is sent as soon as its own fetch completes, so a slow wheel
///   catalog never delays the tire listing.
pub fn spawn_catalog_worker(
    req: CatalogRequest,
    kinds: Vec<ProductKind>,
    feed_tx: mpsc::UnboundedSender<(ProductKind, ProductFeed)>,
) {
    tokio::spawn(async move {
        let req = Arc::new(req);
        let futs = kinds.into_iter().map(|kind| {
            let req = Arc::clone(&req);
            let tx = feed_tx.clone();
            async move {
                let feed = load_feed(&req, kind).await;
                let _ = tx.send((kind, feed));
            }
        });
        futures::future::join_all(futs).await;
        tracing::debug!("[Catalog] initial fetch finished");
    });
}
