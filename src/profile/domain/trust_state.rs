//! Derived trust state: score and verification tier.

use super::ParseVerificationTierError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound for trust scores.
const MAX_TRUST_SCORE: u8 = 100;

/// A 0 to 100 integer summarising a user's verified-identity strength.
///
/// Trust scores are recomputed from the current set of approved verification
/// artifacts; they are never incremented or mutated in place.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TrustScore(u8);

impl TrustScore {
    /// The zero trust score for users with no approved artifacts.
    pub const ZERO: Self = Self(0);

    /// Creates a trust score from an uncapped point total, saturating at 100.
    #[must_use]
    pub const fn capped(points: u32) -> Self {
        if points >= MAX_TRUST_SCORE as u32 {
            Self(MAX_TRUST_SCORE)
        } else {
            // Cast is lossless: points < 100.
            Self(points as u8)
        }
    }

    /// Returns the score value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Ordered verification tier reflecting the highest class of approved
/// verification artifact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VerificationTier {
    /// Entry tier: contact verification only (or nothing approved yet).
    #[default]
    Basic,
    /// Government identity or address documents approved.
    Government,
    /// Enhanced screening (background check, references) approved.
    Enhanced,
    /// Community endorsement approved.
    Community,
}

impl VerificationTier {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Government => "government",
            Self::Enhanced => "enhanced",
            Self::Community => "community",
        }
    }

    /// Returns the numeric artifact level corresponding to this tier.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Government => 2,
            Self::Enhanced => 3,
            Self::Community => 4,
        }
    }

    /// Returns the tier for a numeric artifact level.
    ///
    /// Levels below 1 map to `Basic`; levels above 4 map to `Community`.
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        match level {
            0 | 1 => Self::Basic,
            2 => Self::Government,
            3 => Self::Enhanced,
            _ => Self::Community,
        }
    }
}

impl fmt::Display for VerificationTier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for VerificationTier {
    type Error = ParseVerificationTierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "basic" => Ok(Self::Basic),
            "government" => Ok(Self::Government),
            "enhanced" => Ok(Self::Enhanced),
            "community" => Ok(Self::Community),
            _ => Err(ParseVerificationTierError(value.to_owned())),
        }
    }
}
