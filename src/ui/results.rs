use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use super::format::{price_label, product_subtitle, truncate_to_width};
use super::pane_block;
use super::theme::theme;
use crate::state::{AppState, Focus, Product, ViewMode};

/// Minimum card width in grid view.
const CARD_WIDTH: u16 = 30;
/// Card height in grid view, borders included.
const CARD_HEIGHT: u16 = 5;

/// Render the results pane in the active view mode.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Results;
    let title = Line::from(Span::styled(
        format!("Results ({})", app.view.count()),
        Style::default().fg(th.overlay1),
    ));
    let block = pane_block(title, focused);

    if let Some(notice) = feed_notice(app) {
        f.render_widget(Paragraph::new(notice).block(block), area);
        return;
    }
    match app.view_mode {
        ViewMode::List => render_list(f, app, area, block),
        ViewMode::Grid => {
            let inner = block.inner(area);
            f.render_widget(block, area);
            render_grid(f, app, inner);
        }
    }
}

/// Loading, error and empty-result placeholders.
fn feed_notice(app: &AppState) -> Option<Line<'static>> {
    let th = theme();
    let feed = app.current_feed()?;
    if feed.loading {
        return Some(Line::from(Span::styled(
            format!("Loading {}…", app.kind.label().to_lowercase()),
            Style::default().fg(th.yellow),
        )));
    }
    if let Some(err) = &feed.error {
        return Some(Line::from(Span::styled(
            format!("Could not load {}: {err}", app.kind.label().to_lowercase()),
            Style::default().fg(th.red),
        )));
    }
    if app.view.products.is_empty() {
        return Some(Line::from(Span::styled(
            "No products match the current filters",
            Style::default().fg(th.subtext0),
        )));
    }
    None
}

fn price_spans(p: &Product, currency: &str) -> Vec<Span<'static>> {
    let th = theme();
    let paid = p.effective_price();
    if paid < p.price {
        vec![
            Span::styled(
                super::format::format_price(paid, currency),
                Style::default().fg(th.green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                super::format::format_price(p.price, currency),
                Style::default()
                    .fg(th.red)
                    .add_modifier(Modifier::CROSSED_OUT),
            ),
        ]
    } else {
        vec![Span::styled(
            price_label(p, currency),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )]
    }
}

fn render_list(f: &mut Frame, app: &mut AppState, area: Rect, block: Block<'_>) {
    let th = theme();
    let items: Vec<ListItem> = app
        .view
        .products
        .iter()
        .map(|p| {
            let mut segs = vec![
                Span::styled(
                    p.name.clone(),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
            ];
            segs.extend(price_spans(p, &app.currency_symbol));
            let sub = product_subtitle(p);
            if !sub.is_empty() {
                segs.push(Span::styled(
                    format!("  {sub}"),
                    Style::default().fg(th.subtext0),
                ));
            }
            ListItem::new(Line::from(segs))
        })
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_grid(f: &mut Frame, app: &mut AppState, inner: Rect) {
    let th = theme();
    let cols = (inner.width / CARD_WIDTH).max(1);
    app.grid_columns = usize::from(cols);
    let card_w = inner.width / cols;
    let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
    let sel_row = app.selected / app.grid_columns;
    let first_row = sel_row.saturating_sub(visible_rows - 1);
    let text_w = usize::from(card_w.saturating_sub(2));

    let start = first_row * app.grid_columns;
    let end = (start + visible_rows * app.grid_columns).min(app.view.products.len());
    for (offset, p) in app.view.products[start..end].iter().enumerate() {
        let idx = start + offset;
        let row = u16::try_from(offset / app.grid_columns).unwrap_or(0);
        let col = u16::try_from(offset % app.grid_columns).unwrap_or(0);
        let rect = Rect {
            x: inner.x + col * card_w,
            y: inner.y + row * CARD_HEIGHT,
            width: card_w,
            height: CARD_HEIGHT.min(inner.height.saturating_sub(row * CARD_HEIGHT)),
        };
        let selected = idx == app.selected;
        let lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&p.name, text_w),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_to_width(&product_subtitle(p), text_w),
                Style::default().fg(th.subtext0),
            )),
            Line::from(price_spans(p, &app.currency_symbol)),
        ];
        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if selected {
                    th.lavender
                } else {
                    th.surface2
                })),
        );
        f.render_widget(card, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Discounted prices render as sale price plus struck list price
    fn results_price_spans_discount() {
        let mut p = Product::new("1", "A").with_price(120.0);
        p.discount_price = Some(99.0);
        let spans = price_spans(&p, "$");
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "$99.00");
        assert_eq!(spans[2].content, "$120.00");
        p.discount_price = None;
        let spans = price_spans(&p, "$");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "$120.00");
    }
}
