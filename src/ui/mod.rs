//! Interactive terminal UI.
//!
//! [`App`] owns the [`SearchController`](crate::controller::SearchController)
//! and a background worker that performs the blocking service calls. The
//! event loop in [`runtime`] pumps worker responses, redraws from the
//! controller state and routes key presses through [`actions`].

mod actions;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
mod search;
mod state;
pub mod style;

pub use config::{DEFAULT_PLACEHOLDER, DEFAULT_SUBTITLE, DEFAULT_TITLE, UiLabels};
pub use runtime::run;
pub use state::App;
pub use style::Theme;
