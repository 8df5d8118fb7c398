use std::time::{Duration, Instant};

use crate::config::Config;
use crate::drawer::{DrawError, Drawer};
use crate::input::InputBuffer;
use crate::ui::Theme;

/// Which pane receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Main picker view - draw, load, toggle panels
    Picker,
    /// Question list text area
    Editor,
}

/// Severity of a notice, used for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Transient message from the last action
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    raised_at: Instant,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    /// Whether the notice should still be shown. A zero timeout never expires.
    pub fn is_visible(&self, timeout: Duration) -> bool {
        timeout.is_zero() || self.raised_at.elapsed() < timeout
    }
}

impl From<DrawError> for Notice {
    fn from(err: DrawError) -> Self {
        let level = match err {
            DrawError::EmptyInput => NoticeLevel::Warning,
            DrawError::PoolExhausted => NoticeLevel::Error,
        };
        Self::new(level, err.to_string())
    }
}

/// Application state for one session
pub struct App {
    /// The question drawer - all pool/history state lives here
    drawer: Drawer,
    /// Text area holding the raw question list
    input: InputBuffer,
    /// Focused pane
    focus: Focus,
    /// History panel expanded
    history_expanded: bool,
    /// Remaining pool panel expanded
    pool_expanded: bool,
    /// First history entry shown (counted from the most recent)
    history_scroll: usize,
    /// First pool entry shown
    pool_scroll: usize,
    /// Result of the last action, if any
    notice: Option<Notice>,
    /// Theme resolved once from config
    theme: Theme,
    /// Configuration
    config: Config,
}

impl App {
    pub fn new(drawer: Drawer, config: Config) -> Self {
        Self {
            drawer,
            input: InputBuffer::new(),
            focus: Focus::Picker,
            history_expanded: config.behavior.history_expanded,
            pool_expanded: config.behavior.pool_expanded,
            history_scroll: 0,
            pool_scroll: 0,
            notice: None,
            theme: config.resolve_theme(),
            config,
        }
    }

    /// Put `text` into the editor and load it as the question list
    pub fn preload(&mut self, text: &str) {
        self.input.set_text(text);
        self.load_from_input();
    }

    /// Load/Reset: replace the pool with the editor contents
    pub fn load_from_input(&mut self) {
        let raw = self.input.text();
        self.notice = Some(match self.drawer.load(&raw) {
            Ok(count) => {
                self.history_scroll = 0;
                self.pool_scroll = 0;
                Notice::new(NoticeLevel::Success, format!("Loaded {} questions!", count))
            }
            Err(e) => {
                tracing::info!("Load skipped: {}", e);
                e.into()
            }
        });
    }

    /// Draw the next random question
    pub fn draw_next(&mut self) {
        match self.drawer.draw_next() {
            Ok(question) => {
                tracing::info!("Drew question: {}", question);
                self.notice = None;
                self.pool_scroll = self
                    .pool_scroll
                    .min(self.drawer.pool().len().saturating_sub(1));
            }
            Err(e) => {
                tracing::info!("Draw skipped: {}", e);
                self.notice = Some(e.into());
            }
        }
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    pub fn focus_editor(&mut self) {
        self.focus = Focus::Editor;
    }

    pub fn focus_picker(&mut self) {
        self.focus = Focus::Picker;
    }

    pub fn is_editing(&self) -> bool {
        self.focus == Focus::Editor
    }

    pub fn history_expanded(&self) -> bool {
        self.history_expanded
    }

    pub fn toggle_history(&mut self) {
        self.history_expanded = !self.history_expanded;
    }

    pub fn pool_expanded(&self) -> bool {
        self.pool_expanded
    }

    pub fn toggle_pool(&mut self) {
        self.pool_expanded = !self.pool_expanded;
    }

    pub fn history_scroll(&self) -> usize {
        self.history_scroll
    }

    pub fn scroll_history_down(&mut self) {
        let max = self.drawer.history().len().saturating_sub(1);
        self.history_scroll = (self.history_scroll + 1).min(max);
    }

    pub fn scroll_history_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    pub fn pool_scroll(&self) -> usize {
        self.pool_scroll
    }

    pub fn scroll_pool_down(&mut self) {
        let max = self.drawer.pool().len().saturating_sub(1);
        self.pool_scroll = (self.pool_scroll + 1).min(max);
    }

    pub fn scroll_pool_up(&mut self) {
        self.pool_scroll = self.pool_scroll.saturating_sub(1);
    }

    /// The notice to display, if it has not timed out
    pub fn notice(&self) -> Option<&Notice> {
        let timeout = Duration::from_millis(self.config.behavior.notice_timeout_ms);
        self.notice.as_ref().filter(|n| n.is_visible(timeout))
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Get config reference
    pub fn config(&self) -> &Config {
        &self.config
    }
}
