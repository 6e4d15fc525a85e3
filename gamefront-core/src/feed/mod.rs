//! Paginated, de-duplicated game feed

pub mod engine;
pub mod state;

pub use engine::{EndReason, LoadOutcome, PaginatedFeedEngine, SkipReason};
pub use state::{FeedSnapshot, FeedState};
