//! UI rendering for the TUI.

use std::path::Path;

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::config::SizeUnits;
use crate::error::SweepError;
use crate::scanner::{format_size, Item};

use super::app::Session;
use super::theme::Theme;

const SELECT_WIDTH: usize = 3;
const SIZE_WIDTH: usize = 8;
const MIN_PATH_WIDTH: usize = 30;
const SPACING: usize = 6;
const MAX_NAME_WIDTH: usize = 100;

const HELP: &str = "↑/↓: Navigate • PgUp/PgDn: Page • Home/End: Jump • Tab: Switch View • Space: Select • d: Delete • q: Quit";
const EMPTY_HELP: &str = "Tab: Switch View • q: Quit";
const ERROR_HELP: &str = "Esc/Enter: Dismiss • q: Quit";

/// Render the entire UI.
pub fn render(session: &Session, theme: &Theme, units: SizeUnits, frame: &mut Frame) {
    if let Some(err) = &session.last_error {
        render_error(err, theme, frame);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Column header
            Constraint::Min(0),    // Items
            Constraint::Length(1), // Confirmation banner
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    render_title(session, theme, frame, chunks[0]);
    render_header(theme, frame, chunks[1]);
    render_items(session, theme, units, frame, chunks[2]);
    render_banner(session, theme, frame, chunks[3]);

    let help = if session.items().is_empty() { EMPTY_HELP } else { HELP };
    frame.render_widget(Paragraph::new(help).style(theme.help), chunks[4]);
}

fn render_title(session: &Session, theme: &Theme, frame: &mut Frame, area: Rect) {
    let total = session.items().len();
    let position = if total == 0 {
        0
    } else {
        (session.cursor + 1).min(total)
    };
    let title = format!(
        " Disk Usage - {} ({}/{}) ",
        session.view.label(),
        position,
        total
    );
    frame.render_widget(Paragraph::new(Span::styled(title, theme.title)), area);
}

fn render_header(theme: &Theme, frame: &mut Frame, area: Rect) {
    let columns = Columns::for_width(area.width);
    let header = format!(
        "[ ] {:>size$} {:<name$} PATH",
        "SIZE",
        "NAME",
        size = SIZE_WIDTH,
        name = columns.name
    );
    frame.render_widget(Paragraph::new(Span::styled(header, theme.header)), area);
}

fn render_items(session: &Session, theme: &Theme, units: SizeUnits, frame: &mut Frame, area: Rect) {
    let items = session.items();
    if items.is_empty() {
        let paragraph = Paragraph::new("No items found in this view").style(theme.normal);
        frame.render_widget(paragraph, area);
        return;
    }

    // The stored offset may predate a resize.
    let rows = usize::from(area.height).max(1);
    let offset = window_offset(session.offset, session.cursor, items.len(), rows);
    let columns = Columns::for_width(area.width);

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows)
        .map(|(idx, item)| {
            let line = item_line(item, &session.root, &columns, units, theme);
            if idx == session.cursor {
                line.style(theme.cursor)
            } else {
                line.style(theme.normal)
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn item_line<'a>(
    item: &Item,
    root: &Path,
    columns: &Columns,
    units: SizeUnits,
    theme: &Theme,
) -> Line<'a> {
    let mark = if item.is_selected {
        Span::styled("*", theme.mark)
    } else {
        Span::raw(" ")
    };
    let size = format!("{:>width$}", format_size(item.size, units), width = SIZE_WIDTH);
    let name = format!(
        "{:<width$}",
        truncate_end(&item.name(), columns.name),
        width = columns.name
    );
    let path = truncate_start(&item.parent_relative_to(root), columns.path);

    Line::from(vec![
        Span::raw("["),
        mark,
        Span::raw("] "),
        Span::styled(size, theme.size),
        Span::raw(" "),
        Span::raw(name),
        Span::raw(" "),
        Span::raw(path),
    ])
}

fn render_banner(session: &Session, theme: &Theme, frame: &mut Frame, area: Rect) {
    if !session.confirming_delete {
        return;
    }
    let banner = format!(
        " Delete {} selected item(s)? (y/n) ",
        session.selected_count()
    );
    frame.render_widget(Paragraph::new(Span::styled(banner, theme.confirm)), area);
}

fn render_error(err: &SweepError, theme: &Theme, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let paragraph = Paragraph::new(format!("Error: {}", err))
        .style(theme.error)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, chunks[0]);
    frame.render_widget(Paragraph::new(ERROR_HELP).style(theme.help), chunks[1]);
}

/// First row to draw so that the cursor is on screen and the window does not
/// run past the end of the list.
fn window_offset(offset: usize, cursor: usize, len: usize, rows: usize) -> usize {
    let cursor = cursor.min(len.saturating_sub(1));
    let offset = offset.min(len.saturating_sub(rows)).min(cursor);
    if cursor >= offset + rows {
        cursor + 1 - rows
    } else {
        offset
    }
}

/// Widths of the name and path columns for a given terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    name: usize,
    path: usize,
}

impl Columns {
    fn for_width(width: u16) -> Self {
        let width = usize::from(width);
        let name = width
            .saturating_sub(SIZE_WIDTH + SELECT_WIDTH + MIN_PATH_WIDTH + SPACING)
            .min(MAX_NAME_WIDTH);
        let path = width.saturating_sub(SIZE_WIDTH + name + SELECT_WIDTH + SPACING);
        Self { name, path }
    }
}

/// Keep the start of `s`, ending in `...` when it is cut.
fn truncate_end(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        return s.to_string();
    }
    if max <= 3 {
        return s.chars().take(max).collect();
    }
    let kept: String = s.chars().take(max - 3).collect();
    format!("{}...", kept)
}

/// Keep the end of `s`, starting with `...` when it is cut.
fn truncate_start(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        return s.to_string();
    }
    if max <= 3 {
        return s.chars().skip(len - max).collect();
    }
    let kept: String = s.chars().skip(len - (max - 3)).collect();
    format!("...{}", kept)
}
