//! Profile aggregate root and related value types.

use super::{
    ParseAvailabilityError, ParseRoleError, ProfileDomainError, TrustScore, UserId,
    VerificationTier,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketplace role of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Posts tasks and selects providers.
    Client,
    /// Offers services and accepts tasks.
    Provider,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Provider => "provider",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "client" => Ok(Self::Client),
            "provider" => Ok(Self::Provider),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Current availability of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Open for new tasks.
    #[default]
    Available,
    /// Working but may take more tasks.
    Busy,
    /// Not taking tasks.
    Offline,
}

impl Availability {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
            Self::Offline => "offline",
        }
    }

    /// Returns the normalized scoring weight used by the match ranker.
    #[must_use]
    pub const fn score_weight(self) -> f64 {
        match self {
            Self::Available => 1.0,
            Self::Busy => 0.5,
            Self::Offline => 0.0,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Availability {
    type Error = ParseAvailabilityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "available" => Ok(Self::Available),
            "busy" => Ok(Self::Busy),
            "offline" => Ok(Self::Offline),
            _ => Err(ParseAvailabilityError(value.to_owned())),
        }
    }
}

/// Validated average review rating on the 0.0 to 5.0 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    /// Creates a validated rating.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::RatingOutOfRange`] when the value falls
    /// outside 0.0 to 5.0 or is not finite.
    pub fn new(value: f64) -> Result<Self, ProfileDomainError> {
        if !value.is_finite() || !(0.0..=5.0).contains(&value) {
            return Err(ProfileDomainError::RatingOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the rating value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.1}", self.0)
    }
}

/// Profile aggregate root for one marketplace user.
///
/// Trust fields (`trust_score`, `verification_tier`, `is_verified`) are
/// derived from the user's approved verification artifacts and change only
/// through [`Profile::apply_trust`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    id: UserId,
    role: Role,
    trust_score: TrustScore,
    verification_tier: VerificationTier,
    is_verified: bool,
    skills: Vec<String>,
    languages: Vec<String>,
    availability: Availability,
    rating: Rating,
    review_count: u32,
    response_time_minutes: u32,
    completed_tasks: u32,
    price: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new unverified profile for the given role.
    #[must_use]
    pub fn new(role: Role, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: UserId::new(),
            role,
            trust_score: TrustScore::ZERO,
            verification_tier: VerificationTier::Basic,
            is_verified: false,
            skills: Vec::new(),
            languages: Vec::new(),
            availability: Availability::Available,
            rating: Rating::default(),
            review_count: 0,
            response_time_minutes: 0,
            completed_tasks: 0,
            price: 0,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Sets the offered skills.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::EmptySkill`] when an entry is empty
    /// after trimming.
    pub fn with_skills(
        mut self,
        skills: impl IntoIterator<Item = String>,
    ) -> Result<Self, ProfileDomainError> {
        let mut collected = Vec::new();
        for skill in skills {
            let trimmed = skill.trim();
            if trimmed.is_empty() {
                return Err(ProfileDomainError::EmptySkill);
            }
            collected.push(trimmed.to_owned());
        }
        self.skills = collected;
        Ok(self)
    }

    /// Sets the spoken languages.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::EmptyLanguage`] when an entry is empty
    /// after trimming.
    pub fn with_languages(
        mut self,
        languages: impl IntoIterator<Item = String>,
    ) -> Result<Self, ProfileDomainError> {
        let mut collected = Vec::new();
        for language in languages {
            let trimmed = language.trim();
            if trimmed.is_empty() {
                return Err(ProfileDomainError::EmptyLanguage);
            }
            collected.push(trimmed.to_owned());
        }
        self.languages = collected;
        Ok(self)
    }

    /// Sets the review rating and count.
    #[must_use]
    pub const fn with_rating(mut self, rating: Rating, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Sets the typical response time in minutes.
    #[must_use]
    pub const fn with_response_time_minutes(mut self, minutes: u32) -> Self {
        self.response_time_minutes = minutes;
        self
    }

    /// Sets the completed-task count.
    #[must_use]
    pub const fn with_completed_tasks(mut self, count: u32) -> Self {
        self.completed_tasks = count;
        self
    }

    /// Sets the quoted price in whole currency units.
    #[must_use]
    pub const fn with_price(mut self, price: u32) -> Self {
        self.price = price;
        self
    }

    /// Sets the current availability.
    #[must_use]
    pub const fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the marketplace role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the current trust score.
    #[must_use]
    pub const fn trust_score(&self) -> TrustScore {
        self.trust_score
    }

    /// Returns the current verification tier.
    #[must_use]
    pub const fn verification_tier(&self) -> VerificationTier {
        self.verification_tier
    }

    /// Returns whether at least one verification artifact is approved.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.is_verified
    }

    /// Returns the offered skills.
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Returns the spoken languages.
    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Returns the current availability.
    #[must_use]
    pub const fn availability(&self) -> Availability {
        self.availability
    }

    /// Returns the average review rating.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns the number of reviews behind the rating.
    #[must_use]
    pub const fn review_count(&self) -> u32 {
        self.review_count
    }

    /// Returns the typical response time in minutes.
    #[must_use]
    pub const fn response_time_minutes(&self) -> u32 {
        self.response_time_minutes
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub const fn completed_tasks(&self) -> u32 {
        self.completed_tasks
    }

    /// Returns the quoted price in whole currency units.
    #[must_use]
    pub const fn price(&self) -> u32 {
        self.price
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the derived trust state with a fresh evaluation result.
    ///
    /// `verified` reflects whether the evaluation saw at least one approved
    /// artifact for this profile's role.
    pub fn apply_trust(
        &mut self,
        score: TrustScore,
        tier: VerificationTier,
        verified: bool,
        clock: &impl Clock,
    ) {
        self.trust_score = score;
        self.verification_tier = tier;
        self.is_verified = verified;
        self.touch(clock);
    }

    /// Updates the current availability.
    pub fn set_availability(&mut self, availability: Availability, clock: &impl Clock) {
        self.availability = availability;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
