//! Current question card widget
//!
//! Renders the current question large and centered, word-wrapped to the
//! card width. Before the first draw it shows a dimmed placeholder.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;

/// Card widget for the current question
pub struct QuestionCard<'a> {
    question: Option<&'a str>,
    placeholder: &'a str,
    theme: &'a Theme,
    /// 1-based draw number shown in the card title
    number: Option<usize>,
}

impl<'a> QuestionCard<'a> {
    pub fn new(question: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            question,
            placeholder: "",
            theme,
            number: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn number(mut self, number: Option<usize>) -> Self {
        self.number = number;
        self
    }
}

impl<'a> Widget for QuestionCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title = match self.number {
            Some(n) => format!(" Question {} ", n),
            None => String::new(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.dimmed_alt))
            .title(title)
            .style(Style::default().bg(self.theme.card_bg));
        let inner = block.inner(area);
        block.render(area, buf);

        // Horizontal padding inside the border
        let padding_x = 2u16;
        let text_width = inner.width.saturating_sub(padding_x * 2) as usize;
        if text_width == 0 || inner.height == 0 {
            return;
        }

        let (text, style) = match self.question {
            Some(q) => (
                q,
                Style::default()
                    .fg(self.theme.foreground)
                    .bg(self.theme.card_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (
                self.placeholder,
                Style::default()
                    .fg(self.theme.dimmed)
                    .bg(self.theme.card_bg)
                    .add_modifier(Modifier::ITALIC),
            ),
        };

        let lines = wrap_words(text, text_width);
        let visible = lines.len().min(inner.height as usize);
        let top = inner.y + (inner.height - visible as u16) / 2;

        for (i, line) in lines.iter().take(visible).enumerate() {
            let width = line.width() as u16;
            let x = inner.x + (inner.width.saturating_sub(width)) / 2;
            buf.set_string(x, top + i as u16, line, style);
        }
    }
}

/// Greedy word wrap by display width. Words wider than `max_width` are
/// broken at character boundaries.
fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Hard-break an oversized word
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > max_width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap_words("hello world", 20), vec!["hello world"]);
        assert_eq!(wrap_words("hello world", 8), vec!["hello", "world"]);
        assert_eq!(
            wrap_words("what do you think about this", 12),
            vec!["what do you", "think about", "this"]
        );
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_words("a abcdef", 4), vec!["a", "abcd", "ef"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_words("", 10).is_empty());
        assert!(wrap_words("   ", 10).is_empty());
    }

    #[test]
    fn test_render_centered() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);

        QuestionCard::new(Some("Why?"), &theme).render(area, &mut buf);

        // inner is 18x3 starting at (1,1); "Why?" centered on the middle row
        let row: String = (0..20)
            .map(|x| buf.cell((x, 2)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect();
        assert_eq!(row.trim_matches(|c| c == ' ' || c == '│'), "Why?");
        assert_eq!(buf.cell((8, 2)).map(|c| c.symbol()), Some("W"));
    }

    #[test]
    fn test_render_placeholder() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        QuestionCard::new(None, &theme)
            .placeholder("Waiting to start...")
            .render(area, &mut buf);

        let row: String = (0..30)
            .map(|x| buf.cell((x, 1)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect();
        assert!(row.contains("Waiting to start..."));
    }
}
