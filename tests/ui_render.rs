//! Integration tests for UI rendering using ratatui's `TestBackend`.

use ratatui::{Terminal, backend::TestBackend};

use tirecat::state::{AppState, FacetDimension, Product, ProductFeed, ProductKind, ViewMode};
use tirecat::ui;

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn render(app: &mut AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
    terminal.draw(|f| ui::ui(f, app)).expect("draw");
    buffer_text(&terminal)
}

fn loaded_app() -> AppState {
    let mut app = AppState::default();
    app.set_feed(
        ProductKind::Tires,
        ProductFeed::ready(vec![
            Product::new("1", "Road Grip")
                .with_facet(FacetDimension::Brand, "Acme")
                .with_price(120.0),
            Product::new("2", "Snow Bite")
                .with_facet(FacetDimension::Brand, "Zenith")
                .with_price(80.0),
        ]),
    );
    app
}

#[test]
/// What: Loading feed shows a placeholder and zero results
fn ui_renders_loading_placeholder() {
    let mut app = AppState::default();
    app.refresh_view();
    let text = render(&mut app);
    assert!(text.contains("Loading tires"));
    assert!(text.contains("Showing 0 products"));
}

#[test]
/// What: List view renders names, prices, facet options and chips
fn ui_renders_list_view() {
    let mut app = loaded_app();
    app.filter.toggle(FacetDimension::Brand, "Acme");
    app.refresh_view();
    let text = render(&mut app);
    assert!(text.contains("Road Grip"));
    assert!(!text.contains("Snow Bite"));
    assert!(text.contains("$120.00"));
    assert!(text.contains("[x] Acme"));
    assert!(text.contains("[ ] Zenith"));
    assert!(text.contains("[Brand: Acme]"));
    assert!(text.contains("Showing 1 products"));
}

#[test]
/// What: Grid view lays out cards and records the column count
fn ui_renders_grid_view() {
    let mut app = loaded_app();
    app.view_mode = ViewMode::Grid;
    let text = render(&mut app);
    assert!(text.contains("Road Grip"));
    assert!(text.contains("Snow Bite"));
    assert!(app.grid_columns >= 2);
}

#[test]
/// What: A failed feed renders its error message
fn ui_renders_fetch_error() {
    let mut app = AppState::default();
    app.set_feed(ProductKind::Tires, ProductFeed::failed("HTTP 503"));
    let text = render(&mut app);
    assert!(text.contains("Could not load tires: HTTP 503"));
}
