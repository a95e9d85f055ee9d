use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

use super::pane_block;
use super::theme::theme;
use crate::state::{AppState, Focus};

/// Render the facet pane: one dimension at a time with checkable options.
pub fn render_facets(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Facets;
    let dim = app.current_dimension();
    let selected = app.filter.selection(dim);

    let items: Vec<ListItem> = app
        .current_facet_options()
        .iter()
        .map(|opt| {
            let on = selected.contains(opt);
            ListItem::new(Line::from(vec![
                Span::styled(
                    if on { "[x] " } else { "[ ] " },
                    Style::default().fg(if on { th.sapphire } else { th.overlay1 }),
                ),
                Span::styled(opt.clone(), Style::default().fg(th.text)),
            ]))
        })
        .collect();

    let dims = app.kind.facet_dimensions();
    let title = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(th.overlay1)),
        Span::styled(
            dim.label(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ▶ {}/{}", app.facet_dim.min(dims.len() - 1) + 1, dims.len()),
            Style::default().fg(th.overlay1),
        ),
    ]);
    let empty = items.is_empty();
    let list = List::new(items)
        .block(pane_block(title, focused))
        .highlight_style(if focused {
            Style::default().fg(th.crust).bg(th.lavender)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        });
    if empty {
        f.render_widget(list, area);
    } else {
        f.render_stateful_widget(list, area, &mut app.facet_state);
    }
}
