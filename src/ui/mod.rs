//! Terminal rendering of the catalog browser.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};

mod facets;
pub mod format;
mod results;
pub mod theme;

use theme::theme;

/// Border block shared by every pane; focused panes get the accent color.
fn pane_block(title: Line<'_>, focused: bool) -> Block<'_> {
    let th = theme();
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }))
}

/// Draw one frame of the browser.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(area);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
        .split(rows[1]);

    render_search(f, app, rows[0]);
    facets::render_facets(f, app, body[0]);
    results::render_results(f, app, body[1]);
    render_footer(f, app, rows[2]);
}

fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Search;
    let line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            app.filter.search.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let title = Line::from(vec![
        Span::styled(
            format!("{} ", app.kind.label()),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("Search  ·  sort: {}", app.filter.sort.label()),
            Style::default().fg(th.overlay1),
        ),
    ]);
    f.render_widget(Paragraph::new(line).block(pane_block(title, focused)), area);

    if focused {
        let width = u16::try_from(app.filter.search.width()).unwrap_or(u16::MAX);
        let right = area.x + area.width.saturating_sub(2);
        let x = (area.x + 3).saturating_add(width).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut chips: Vec<Span> = vec![Span::styled(
        format!("Showing {} products", app.view.count()),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )];
    for (dim, value) in app.filter.active_chips() {
        chips.push(Span::raw("  "));
        chips.push(Span::styled(
            format!("[{}: {value}]", dim.label()),
            Style::default().fg(th.crust).bg(th.sapphire),
        ));
    }
    if app.apply_vehicles && !app.saved_vehicles.is_empty() {
        chips.push(Span::raw("  "));
        chips.push(Span::styled(
            format!("[fits {} vehicle(s)]", app.saved_vehicles.len()),
            Style::default().fg(th.crust).bg(th.green),
        ));
    }
    let hint = app.status.clone().unwrap_or_else(|| {
        "Tab focus · F2 sort · F3 view · F4 vehicles · F5 tires/wheels · Ctrl+X clear · Esc quit"
            .to_string()
    });
    let lines = vec![
        Line::from(chips),
        Line::from(Span::styled(hint, Style::default().fg(th.overlay1))),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
