//! Picker pane drawing functions
//!
//! This module handles rendering the main presenter view:
//! - Title and pick hint
//! - Current question card
//! - Asked history (most recent first) and remaining pool panels

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::drawer::DrawerState;
use crate::ui::QuestionCard;
use crate::ui::Theme;

/// Height of a collapsed panel (border + title only)
const COLLAPSED_HEIGHT: u16 = 3;

/// Draw the picker pane
pub(crate) fn draw_picker(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let any_expanded = app.history_expanded() || app.pool_expanded();
    let panels = if any_expanded {
        Constraint::Percentage(50)
    } else {
        Constraint::Length(COLLAPSED_HEIGHT)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Pick hint
            Constraint::Min(5),    // Question card
            panels,                // History + pool
        ])
        .split(area);

    let config = app.config();

    let title = Paragraph::new(config.appearance.title.as_str())
        .style(
            Style::default()
                .fg(theme.accent)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let drawer = app.drawer();
    let hint = match drawer.state() {
        DrawerState::Empty => "Paste questions and press l to load".to_string(),
        DrawerState::Remaining(_) => format!(
            "[ Space ] Pick Random Question  ({}/{} asked)",
            drawer.history().len(),
            drawer.total()
        ),
        DrawerState::Exhausted => "All questions asked - press l to reload".to_string(),
    };
    let hint = Paragraph::new(hint)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[1]);

    let number = drawer.current().map(|_| drawer.history().len());
    let card = QuestionCard::new(drawer.current(), theme)
        .placeholder(&config.appearance.placeholder)
        .number(number);
    f.render_widget(card, chunks[2]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);

    draw_history_panel(f, app, columns[0], theme);
    draw_pool_panel(f, app, columns[1], theme);
}

/// Asked questions, most recent first, numbered by draw order
fn draw_history_panel(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let history = app.drawer().history();

    let lines: Vec<Line> = if history.is_empty() {
        vec![empty_line("No questions asked yet.", theme)]
    } else {
        history
            .iter()
            .enumerate()
            .rev()
            .skip(app.history_scroll())
            .map(|(i, q)| {
                Line::from(vec![
                    Span::styled(
                        format!("{}. ", i + 1),
                        Style::default()
                            .fg(theme.dimmed_alt)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(q.as_str(), Style::default().fg(theme.foreground)),
                ])
            })
            .collect()
    };

    draw_panel(
        f,
        area,
        "Asked Questions History",
        app.history_expanded(),
        app.history_scroll() > 0,
        lines,
        theme,
    );
}

/// Remaining pool in load order, with count in the title
fn draw_pool_panel(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let pool = app.drawer().pool();

    let lines: Vec<Line> = if pool.is_empty() {
        vec![empty_line("Pool is empty.", theme)]
    } else {
        pool.iter()
            .skip(app.pool_scroll())
            .map(|q| {
                Line::from(vec![
                    Span::styled("- ", Style::default().fg(theme.dimmed_alt)),
                    Span::styled(q.as_str(), Style::default().fg(theme.foreground)),
                ])
            })
            .collect()
    };

    let title = format!("Remaining Pool ({})", pool.len());
    draw_panel(
        f,
        area,
        &title,
        app.pool_expanded(),
        app.pool_scroll() > 0,
        lines,
        theme,
    );
}

/// Collapsible panel: expanded panels fill `area`, collapsed ones show only the title.
///
/// `lines` already starts at the first entry scrolled into view; `scrolled`
/// marks the title when entries above it are hidden.
fn draw_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    expanded: bool,
    scrolled: bool,
    lines: Vec<Line>,
    theme: &Theme,
) {
    let marker = if expanded { "▾" } else { "▸" };
    let indicator = if scrolled && expanded { " [scrolled]" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .title(format!(" {} {}{} ", marker, title, indicator))
        .style(Style::default().bg(theme.background));

    if !expanded {
        let collapsed = Rect {
            height: area.height.min(COLLAPSED_HEIGHT),
            ..area
        };
        f.render_widget(block, collapsed);
        return;
    }

    let body = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(body, area);
}

fn empty_line<'a>(text: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(theme.dimmed)
            .add_modifier(Modifier::ITALIC),
    ))
}
