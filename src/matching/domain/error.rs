//! Error types for matching domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing matching domain values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MatchingDomainError {
    /// The budget minimum exceeds the maximum.
    #[error("invalid budget range: min {min} exceeds max {max}")]
    InvalidBudgetRange {
        /// Requested lower bound.
        min: u32,
        /// Requested upper bound.
        max: u32,
    },

    /// The minimum rating filter falls outside the 0.0 to 5.0 scale.
    #[error("minimum rating {0} outside the 0.0..=5.0 range")]
    MinRatingOutOfRange(f64),

    /// The candidate distance is negative or not finite.
    #[error("invalid distance: {0} km")]
    InvalidDistance(f64),
}

/// Error returned while parsing urgency values from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown urgency: {0}")]
pub struct ParseUrgencyError(pub String);
