//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Frame layout and pane drawing
//! - `theme.rs` - Color themes and presets
//! - `question_card.rs` - Current question widget

mod draw;
pub mod question_card;
pub mod theme;

// Re-export main draw function
pub use draw::draw;

// Re-export commonly used types
pub use question_card::QuestionCard;
pub use theme::Theme;
