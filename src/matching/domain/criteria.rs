//! Validated search criteria for provider matching.

use super::{MatchingDomainError, ParseUrgencyError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive budget range in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    min: u32,
    max: u32,
}

impl BudgetRange {
    /// Creates a validated budget range.
    ///
    /// # Errors
    ///
    /// Returns [`MatchingDomainError::InvalidBudgetRange`] when `min`
    /// exceeds `max`.
    pub const fn new(min: u32, max: u32) -> Result<Self, MatchingDomainError> {
        if min > max {
            return Err(MatchingDomainError::InvalidBudgetRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Returns whether a price falls inside the range, bounds included.
    #[must_use]
    pub const fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}..={}", self.min, self.max)
    }
}

/// How quickly the client needs the task done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Flexible timing.
    Low,
    /// Within the usual scheduling window.
    #[default]
    Normal,
    /// As soon as possible.
    High,
}

impl Urgency {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Urgency {
    type Error = ParseUrgencyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            _ => Err(ParseUrgencyError(value.to_owned())),
        }
    }
}

/// Sort key for the ranked candidate list.
///
/// The match score is computed for every candidate regardless of the
/// active key; switching keys re-sorts the already-scored list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Descending by match score (default).
    #[default]
    MatchScore,
    /// Ascending by quoted price.
    Price,
    /// Descending by review rating.
    Rating,
    /// Ascending by distance.
    Distance,
}

/// A client's validated provider-search criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingCriteria {
    budget: BudgetRange,
    urgency: Urgency,
    required_skills: Vec<String>,
    language: Option<String>,
    min_rating: Option<f64>,
    min_trust_score: Option<u8>,
}

impl MatchingCriteria {
    /// Creates criteria with the given budget and defaults elsewhere.
    #[must_use]
    pub const fn new(budget: BudgetRange) -> Self {
        Self {
            budget,
            urgency: Urgency::Normal,
            required_skills: Vec::new(),
            language: None,
            min_rating: None,
            min_trust_score: None,
        }
    }

    /// Sets the urgency.
    #[must_use]
    pub const fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    /// Sets the required skills.
    #[must_use]
    pub fn with_required_skills(mut self, skills: impl IntoIterator<Item = String>) -> Self {
        self.required_skills = skills.into_iter().collect();
        self
    }

    /// Sets the requested language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the minimum acceptable rating filter.
    ///
    /// # Errors
    ///
    /// Returns [`MatchingDomainError::MinRatingOutOfRange`] when the value
    /// falls outside 0.0 to 5.0 or is not finite.
    pub fn with_min_rating(mut self, min_rating: f64) -> Result<Self, MatchingDomainError> {
        if !min_rating.is_finite() || !(0.0..=5.0).contains(&min_rating) {
            return Err(MatchingDomainError::MinRatingOutOfRange(min_rating));
        }
        self.min_rating = Some(min_rating);
        Ok(self)
    }

    /// Sets the minimum acceptable trust score filter, capped at 100.
    #[must_use]
    pub fn with_min_trust_score(mut self, min_trust_score: u8) -> Self {
        self.min_trust_score = Some(min_trust_score.min(100));
        self
    }

    /// Returns the budget range.
    #[must_use]
    pub const fn budget(&self) -> BudgetRange {
        self.budget
    }

    /// Returns the urgency.
    #[must_use]
    pub const fn urgency(&self) -> Urgency {
        self.urgency
    }

    /// Returns the required skills.
    #[must_use]
    pub fn required_skills(&self) -> &[String] {
        &self.required_skills
    }

    /// Returns the requested language, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns the minimum rating filter, if any.
    #[must_use]
    pub const fn min_rating(&self) -> Option<f64> {
        self.min_rating
    }

    /// Returns the minimum trust score filter, if any.
    #[must_use]
    pub const fn min_trust_score(&self) -> Option<u8> {
        self.min_trust_score
    }
}
