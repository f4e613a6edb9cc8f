//! Screen drawing: one titled table per section.
//!
//! Layout and styling live here; row content comes from the data source
//! through the cell pool, so everything below `cell_row` is pure lookup
//! with no I/O.

pub mod cells;

use std::sync::OnceLock;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::model::icons::Icon;
use crate::model::SettingsSection;
use crate::render::cells::{Cell, CellHost, CellKind, CellPool};
use crate::source::{ReloadSource, SectionModel};
use crate::theme::Theme;

// Load theme colors once at startup
static THEME: OnceLock<Theme> = OnceLock::new();

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

// Helper functions to get theme colors
fn accent() -> Color { theme().accent }
fn success() -> Color { theme().success }
fn text() -> Color { theme().text }
fn text_dim() -> Color { theme().text_dim }
fn inactive() -> Color { theme().inactive }
fn header() -> Color { theme().header }

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let ascii = app.ascii_icons;
    let source = &app.source;
    let pool = &mut app.pool;

    if source.is_empty() {
        let empty = Paragraph::new("Nothing to show")
            .style(Style::default().fg(text_dim()))
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    // One chunk per section (items + borders), filler, one-line footer
    let mut constraints: Vec<Constraint> = source
        .sections()
        .iter()
        .map(|section| Constraint::Length(section.items().len() as u16 + 2))
        .collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for section_index in 0..source.sections().len() {
        draw_section(f, source, pool, section_index, ascii, chunks[section_index]);
    }
    draw_footer(f, chunks[chunks.len() - 1]);

    pool.reclaim();
}

fn draw_section(
    f: &mut Frame,
    source: &ReloadSource<SettingsSection>,
    pool: &mut CellPool,
    section_index: usize,
    ascii: bool,
    area: Rect,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", source.header_title(section_index)),
            Style::default().fg(header()),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(inactive()));

    let item_count = source.sections()[section_index].items().len();
    let rows: Vec<Row> = (0..item_count)
        .map(|row_index| {
            let item = source.item_at(section_index, row_index);
            let cell = pool.dequeue(CellKind::for_item(item));
            cells::configure(cell, item);
            cell_row(cell, ascii)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(60),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths).block(block);
    f.render_widget(table, area);
}

/// Turn a configured cell into a table row.
///
/// Dispatch is on the cell kind, not the item: by the time a cell gets
/// here the renderer only sees configured content.
fn cell_row(cell: &Cell, ascii: bool) -> Row<'static> {
    match cell.kind {
        CellKind::ImageTitle => {
            let icon = cell.icon.clone().unwrap_or_else(Icon::placeholder);
            Row::new(vec![
                Span::styled(format!(" {}", icon.glyph(ascii)), Style::default().fg(accent())),
                Span::styled(cell.title.clone(), Style::default().fg(text())),
                Span::raw(""),
            ])
        }
        CellKind::TitleSwitch => {
            let on = cell.switch_on.unwrap_or(false);
            let (glyph, state, color) = if on {
                (if ascii { "[x]" } else { "󰨚" }, "on", success())
            } else {
                (if ascii { "[ ]" } else { "󰨙" }, "off", text_dim())
            };
            Row::new(vec![
                Span::styled(format!(" {}", glyph), Style::default().fg(color)),
                Span::styled(cell.title.clone(), Style::default().fg(text())),
                Span::styled(state, Style::default().fg(color)),
            ])
        }
        CellKind::TitleStepper => {
            let value = cell.stepper_value.clone().unwrap_or_default();
            Row::new(vec![
                Span::styled(" ".to_string(), Style::default()),
                Span::styled(cell.title.clone(), Style::default().fg(text())),
                Span::styled(format!("{}  - +", value), Style::default().fg(text_dim())),
            ])
        }
    }
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let hints: Vec<(&str, &str)> = vec![("a", "Ascii"), ("q", "Quit")];

    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(accent())),
                Span::styled(format!(" {} │ ", action), Style::default().fg(text_dim())),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}
