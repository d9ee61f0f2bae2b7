//! Rendering layer for the Sourcedex TUI.
//!
//! Consumes only the data the core exposes — the fixed group skeleton, the
//! visibility projection, and the filter state — and reconciles it into a
//! ratatui frame. All decision logic lives below in `catalog`/`logic`; this
//! module just draws.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::state::{AppState, LoadState};
use crate::theme::theme;

pub mod helpers;

/// What: Draw one frame of the catalog browser.
///
/// Inputs:
/// - `f`: ratatui frame.
/// - `app`: Current application state (list selection is updated in place).
///
/// Output:
/// - Renders the filter header and grouped list, or one of the terminal
///   load-state screens.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    match app.load {
        LoadState::Loading => {
            render_message(f, "Loading sources…", th.subtext0);
            return;
        }
        LoadState::NoSources => {
            render_message(f, "No sources found.", th.yellow);
            return;
        }
        LoadState::Error => {
            render_message(f, "Error loading sources.", th.red);
            return;
        }
        LoadState::Loaded => {}
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    render_filter_header(f, app, chunks[0]);
    render_catalog_list(f, app, chunks[1]);
}

/// Centered single-line message for the terminal load states.
fn render_message(f: &mut Frame, text: &str, color: ratatui::style::Color) {
    let th = theme();
    let area = f.area();
    let para = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay1))
            .title(" Sourcedex "),
    );
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);
    f.render_widget(para, rows[1]);
}

/// Query input plus the active language/rating constraints and key hints.
fn render_filter_header(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let language = if app.filters.language.is_empty() {
        "All"
    } else {
        app.filters.language.as_str()
    };
    let lines = vec![
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(th.subtext0)),
            Span::styled(
                app.filters.query.clone(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(th.sapphire)),
        ]),
        Line::from(vec![
            Span::styled("Language: ", Style::default().fg(th.subtext0)),
            Span::styled(language.to_string(), Style::default().fg(th.mauve)),
            Span::styled("   Rating: ", Style::default().fg(th.subtext0)),
            Span::styled(
                app.filters.rating.display().to_string(),
                Style::default().fg(th.mauve),
            ),
            Span::styled(
                "   Tab language · Ctrl+R rating · Enter download · Esc quit",
                Style::default().fg(th.overlay1),
            ),
        ]),
    ];
    let para = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay1))
            .title(" Filters "),
    );
    f.render_widget(para, area);
}

/// Grouped source list with the total visible count in the title.
fn render_catalog_list(f: &mut Frame, app: &mut AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let rows = helpers::flatten_visible(&app.groups, &app.projection);
    let url_width = usize::from(area.width.saturating_sub(6));

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match *row {
            helpers::FlatRow::Header { group } => {
                let g = &app.groups[group];
                ListItem::new(Line::from(Span::styled(
                    g.label.clone(),
                    Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
                )))
            }
            helpers::FlatRow::Record { group, index } => {
                let d = &app.groups[group].records[index];
                let mut segs = vec![
                    Span::raw("  "),
                    Span::styled(
                        d.record.name.clone(),
                        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" {}", helpers::version_text(&d.record.version)),
                        Style::default().fg(th.overlay1),
                    ),
                ];
                if let Some((badge, _tooltip)) = helpers::rating_badge(d.record.content_rating) {
                    let color = if badge == "17+" { th.yellow } else { th.red };
                    segs.push(Span::raw("  "));
                    segs.push(Span::styled(
                        badge,
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ));
                }
                if let Some(url) = d.record.base_url.as_deref() {
                    segs.push(Span::raw("  "));
                    segs.push(Span::styled(
                        helpers::truncate_to_width(url, url_width),
                        Style::default().fg(th.subtext0),
                    ));
                }
                ListItem::new(Line::from(segs))
            }
        })
        .collect();

    app.list_state
        .select(helpers::flat_index_of_selected(&rows, app.selected));

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .highlight_style(
            Style::default()
                .bg(th.surface1)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.overlay1))
                .title(format!(" Sources — Total: {} ", app.projection.total)),
        );
    f.render_stateful_widget(list, area, &mut app.list_state);
}
