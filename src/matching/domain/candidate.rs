//! Candidate providers and ranking results.

use super::{MatchScore, MatchingDomainError};
use crate::profile::domain::Profile;
use serde::{Deserialize, Serialize};

/// A provider profile paired with its distance from the search location.
///
/// Distance is a precomputed scalar supplied per search; the geospatial
/// query producing it is an external collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    profile: Profile,
    distance_km: f64,
}

impl Candidate {
    /// Creates a candidate with a validated distance.
    ///
    /// # Errors
    ///
    /// Returns [`MatchingDomainError::InvalidDistance`] when the distance is
    /// negative or not finite.
    pub fn new(profile: Profile, distance_km: f64) -> Result<Self, MatchingDomainError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(MatchingDomainError::InvalidDistance(distance_km));
        }
        Ok(Self {
            profile,
            distance_km,
        })
    }

    /// Returns the candidate's profile.
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Returns the distance from the search location in kilometres.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

/// A candidate together with its computed match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    candidate: Candidate,
    match_score: MatchScore,
}

impl RankedCandidate {
    /// Pairs a candidate with its computed score.
    #[must_use]
    pub const fn new(candidate: Candidate, match_score: MatchScore) -> Self {
        Self {
            candidate,
            match_score,
        }
    }

    /// Returns the scored candidate.
    #[must_use]
    pub const fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// Returns the candidate's profile.
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        self.candidate.profile()
    }

    /// Returns the computed match score.
    #[must_use]
    pub const fn match_score(&self) -> MatchScore {
        self.match_score
    }
}
