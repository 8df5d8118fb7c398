//! Drawing functions for the TUI
//!
//! The frame is split into:
//! - `editor` - Setup sidebar with the question text area
//! - `picker` - Title, current question card, history and pool panels
//! - a one-line status bar with the active notice and key hints

mod editor;
mod picker;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, NoticeLevel};
use crate::ui::Theme;

use editor::draw_editor;
use picker::draw_picker;

/// Width of the setup sidebar as a percentage of the frame
const SIDEBAR_PERCENT: u16 = 35;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme();

    // Fill background with theme color
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Sidebar + picker
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(SIDEBAR_PERCENT),
            Constraint::Min(1),
        ])
        .split(rows[0]);

    draw_editor(f, app, columns[0], theme);
    draw_picker(f, app, columns[1], theme);
    draw_status_bar(f, app, rows[1], theme);
}

/// Draw the status bar: active notice first, then key hints
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let mut spans = Vec::new();

    if let Some(notice) = app.notice() {
        let color = match notice.level {
            NoticeLevel::Success => theme.notice_success,
            NoticeLevel::Warning => theme.notice_warning,
            NoticeLevel::Error => theme.notice_error,
        };
        spans.push(Span::styled(
            format!(" {} ", notice.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("|"));
    }

    let hints = if app.is_editing() {
        " Ctrl+L: load/reset | Ctrl+U: clear | Esc/Tab: back | Ctrl+C: quit"
    } else {
        " Space: pick | l: load/reset | e: edit | h/p: history/pool | j/k, J/K: scroll | q: quit"
    };
    spans.push(Span::styled(hints, Style::default().fg(theme.dimmed)));

    let status_bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background));
    f.render_widget(status_bar, area);
}
