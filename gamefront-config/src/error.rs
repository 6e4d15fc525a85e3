use thiserror::Error;

/// An environment override could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("{var} must be a boolean (true/false/1/0/yes/no), got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var} must be a duration such as `5s` or `150ms`, got {value:?}")]
    InvalidDuration {
        var: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("{var} must be a whole number, got {value:?}")]
    InvalidInteger {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// A loaded configuration violates an invariant the engines rely on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigGuardRailError {
    #[error("carousel.swipe_threshold_px must be positive, got {0}")]
    SwipeThreshold(f32),

    #[error("carousel.auto_advance_interval_ms must be non-zero while auto_advance is on")]
    AutoAdvanceInterval,

    #[error("feed.max_attempts must be at least 1")]
    MaxAttempts,
}
