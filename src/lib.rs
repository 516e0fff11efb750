//! Core crate for `afind`, a terminal client that turns a free-text hiring
//! need into a ranked list of assessments.
//!
//! [`controller::SearchController`] owns the request lifecycle,
//! [`classify`] maps category labels onto display tags and [`present`]
//! derives what the results area shows. The remote service sits behind
//! [`client::RecommendationClient`], so everything above it can be driven by
//! an in-memory fake.

pub mod app_dirs;
pub mod classify;
pub mod client;
pub mod controller;
pub mod logging;
pub mod present;
mod systems;
pub mod types;
pub mod ui;

pub use client::{ClientError, HttpRecommendationClient, RecommendationClient};
pub use controller::{RequestState, SearchController};
pub use types::{AssessmentRecord, SearchOutcome, SearchQuery, SearchResult};
pub use ui::{App, UiLabels, run};
