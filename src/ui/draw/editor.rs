//! Setup sidebar - instructions and the question list text area

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::Theme;

const INSTRUCTIONS: &str = "Paste your list of questions below (one per line). \
    Press Ctrl+L to load, then pick questions from the main screen.";

/// Draw the setup sidebar
pub(crate) fn draw_editor(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let editing = app.is_editing();
    let border_color = if editing { theme.accent } else { theme.dimmed_alt };

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Setup ")
        .style(Style::default().bg(theme.background));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Instructions
            Constraint::Min(3),    // Text area
        ])
        .split(inner);

    let instructions = Paragraph::new(INSTRUCTIONS)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
        .wrap(Wrap { trim: true });
    f.render_widget(instructions, chunks[0]);

    draw_text_area(f, app, chunks[1], theme);
}

/// Draw the text area, scrolled so the cursor stays visible on both axes
fn draw_text_area(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let input = app.input();
    let editing = app.is_editing();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing { theme.accent } else { theme.dimmed_alt }))
        .title(format!(" Question List ({} lines) ", input.line_count()))
        .style(Style::default().bg(theme.background));
    let text_area = block.inner(area);

    let (row, _) = input.cursor();
    let col = input.cursor_display_col();
    let row_scroll = row.saturating_sub(usize::from(text_area.height.max(1)) - 1);
    let col_scroll = col.saturating_sub(usize::from(text_area.width.max(1)) - 1);

    let lines: Vec<Line> = input.lines().iter().map(|l| Line::from(l.as_str())).collect();
    let text = Paragraph::new(lines)
        .style(Style::default().fg(theme.foreground).bg(theme.background))
        .block(block)
        .scroll((to_u16(row_scroll), to_u16(col_scroll)));
    f.render_widget(text, area);

    // Show cursor while editing
    if editing && text_area.width > 0 && text_area.height > 0 {
        let max_x = text_area.x.saturating_add(text_area.width - 1);
        let max_y = text_area.y.saturating_add(text_area.height - 1);
        let cursor_x = text_area.x.saturating_add(to_u16(col - col_scroll)).min(max_x);
        let cursor_y = text_area.y.saturating_add(to_u16(row - row_scroll)).min(max_y);
        f.set_cursor_position((cursor_x, cursor_y));
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
