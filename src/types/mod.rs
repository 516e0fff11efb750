//! Types shared between the search controller, the presenter and the UI.

mod outcome;
mod query;
mod record;

pub use outcome::SearchOutcome;
pub use query::SearchQuery;
pub use record::{AssessmentRecord, SearchResult};
