//! Error types for profile domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing profile domain values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileDomainError {
    /// The rating value falls outside the 0.0 to 5.0 range.
    #[error("rating {0} outside the 0.0..=5.0 range")]
    RatingOutOfRange(f64),

    /// A skill entry is empty after trimming.
    #[error("skill entries must not be empty")]
    EmptySkill,

    /// A language entry is empty after trimming.
    #[error("language entries must not be empty")]
    EmptyLanguage,
}

/// Error returned while parsing roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Error returned while parsing availability states from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown availability: {0}")]
pub struct ParseAvailabilityError(pub String);

/// Error returned while parsing verification tiers from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown verification tier: {0}")]
pub struct ParseVerificationTierError(pub String);
