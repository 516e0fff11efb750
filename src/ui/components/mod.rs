//! Widgets composed by the renderer.

pub mod cards;
pub mod prompt;
pub mod status;

pub use cards::{card_items, wrap_text};
pub use prompt::{PromptContext, render_prompt};
pub use status::{error_height, render_empty, render_error};
