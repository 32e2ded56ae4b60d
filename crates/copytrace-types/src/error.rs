use std::fmt;

/// Result type for copytrace-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Score is NaN or infinite and cannot be placed in a tier
    InvalidScore(f64),

    /// User input rejected before any network call
    Validation(String),

    /// Tier thresholds are not strictly increasing within [0, 1]
    InvalidThresholds(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidScore(score) => write!(f, "Invalid score: {}", score),
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::InvalidThresholds(msg) => write!(f, "Invalid tier thresholds: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
