//! Engine error types
//!
//! None of these ever escape to the host as a failure of the engine itself:
//! feed errors become part of the feed state, navigation errors are returned
//! so callers can ignore them.

use thiserror::Error;

/// User-visible feed failure, stored in the feed state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The first page came back empty.
    #[error("No games found. Please try again later.")]
    NoGames,

    /// The first page could not be fetched.
    #[error("Failed to load games. Please try again later.")]
    InitialLoadFailed { cause: String },

    /// A follow-up page could not be fetched.
    #[error("Failed to load more games. Please try again later.")]
    LoadMoreFailed { page: u32, cause: String },
}

impl FeedError {
    /// Underlying collaborator message, if any. Not meant for display.
    pub fn cause(&self) -> Option<&str> {
        match self {
            FeedError::NoGames => None,
            FeedError::InitialLoadFailed { cause }
            | FeedError::LoadMoreFailed { cause, .. } => Some(cause),
        }
    }
}

/// Rejected carousel navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("banner index {index} is out of range for {len} banners")]
    OutOfRange { index: usize, len: usize },
}
