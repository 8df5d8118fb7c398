//! Question drawer - random draws without replacement.
//!
//! The drawer owns three collections:
//! - `pool` - questions not yet asked, in load order
//! - `history` - questions already asked, in draw order
//! - current - the most recent draw, always the last entry of `history`
//!
//! ```text
//!   load(text) ──► pool = parsed lines, history = [], current = none
//!
//!   draw_next()
//!     pool: [A, B, C, D]         pick index 2 uniformly
//!            ─────┬─────
//!                 ▼
//!     pool: [A, B, D]     history: [.., C]     current: C
//! ```
//!
//! Draws remove by index, so duplicate lines are never confused with one
//! another and the remaining pool keeps its relative order.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::questions::{is_blank, parse_questions};

/// Non-fatal conditions reported by drawer operations.
///
/// Neither condition mutates the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Load was given blank or whitespace-only text
    #[error("Please paste some text first.")]
    EmptyInput,
    /// Draw was requested with nothing left in the pool
    #[error("No questions remaining in the pool!")]
    PoolExhausted,
}

/// Coarse drawer state, mostly for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerState {
    /// Nothing loaded yet
    Empty,
    /// Loaded with this many questions still in the pool
    Remaining(usize),
    /// Loaded and every question has been drawn
    Exhausted,
}

/// Random question drawer for one session
#[derive(Debug)]
pub struct Drawer<R = SmallRng> {
    pool: Vec<String>,
    history: Vec<String>,
    loaded: bool,
    rng: R,
}

impl Drawer<SmallRng> {
    /// Create an empty drawer seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Create an empty drawer with a fixed seed (reproducible draws)
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Drawer<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Drawer<R> {
    /// Create an empty drawer using the given random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            pool: Vec::new(),
            history: Vec::new(),
            loaded: false,
            rng,
        }
    }

    /// Replace the pool with the questions in `raw` and clear history.
    ///
    /// Returns the number of questions loaded. Blank input leaves the
    /// drawer untouched and returns [`DrawError::EmptyInput`].
    pub fn load(&mut self, raw: &str) -> Result<usize, DrawError> {
        if is_blank(raw) {
            tracing::debug!("Ignoring load of blank question text");
            return Err(DrawError::EmptyInput);
        }

        self.pool = parse_questions(raw);
        self.history.clear();
        self.loaded = true;

        tracing::info!("Loaded {} questions", self.pool.len());
        Ok(self.pool.len())
    }

    /// Draw one question uniformly at random from the pool.
    ///
    /// The drawn question moves to the end of the history and becomes the
    /// current question. An empty pool returns [`DrawError::PoolExhausted`]
    /// and changes nothing.
    pub fn draw_next(&mut self) -> Result<&str, DrawError> {
        if self.pool.is_empty() {
            tracing::debug!("Draw requested with an empty pool");
            return Err(DrawError::PoolExhausted);
        }

        let index = self.rng.gen_range(0..self.pool.len());
        let question = self.pool.remove(index);
        tracing::debug!(
            "Drew pool index {} ({} remaining)",
            index,
            self.pool.len()
        );

        self.history.push(question);
        let last = self.history.len() - 1;
        Ok(&self.history[last])
    }

    /// Questions not yet asked, in load order
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Questions already asked, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The most recently drawn question, if any since the last load
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// Total questions in the loaded set (pool + history)
    pub fn total(&self) -> usize {
        self.pool.len() + self.history.len()
    }

    /// Coarse state of the drawer
    pub fn state(&self) -> DrawerState {
        match (self.loaded, self.pool.len()) {
            (false, _) => DrawerState::Empty,
            (true, 0) => DrawerState::Exhausted,
            (true, n) => DrawerState::Remaining(n),
        }
    }
}
