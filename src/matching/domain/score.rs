//! Match score computation.
//!
//! The score is a weighted sum of six normalised factors, scaled to an
//! integer between 0 and 100. Weights and normalisations:
//!
//! | Factor        | Weight | Normalisation                                  |
//! |---------------|--------|------------------------------------------------|
//! | Distance      | 25%    | `max(0, (20 − km) / 20)`                       |
//! | Trust score   | 20%    | `score / 100`                                  |
//! | Rating        | 20%    | `rating / 5`                                   |
//! | Price         | 15%    | 1 inside the budget range, else 0              |
//! | Skill overlap | 10%    | matched / required (0 when nothing required)   |
//! | Language      | 5%     | 1 when the requested language is spoken        |
//! | Availability  | 5%     | available 1, busy 0.5, offline 0               |

use super::{Candidate, MatchingCriteria};
use serde::{Deserialize, Serialize};
use std::fmt;

const DISTANCE_WEIGHT: f64 = 0.25;
const TRUST_WEIGHT: f64 = 0.20;
const RATING_WEIGHT: f64 = 0.20;
const PRICE_WEIGHT: f64 = 0.15;
const SKILL_WEIGHT: f64 = 0.10;
const LANGUAGE_WEIGHT: f64 = 0.05;
const AVAILABILITY_WEIGHT: f64 = 0.05;

/// Distance beyond which the distance factor bottoms out at zero.
const DISTANCE_HORIZON_KM: f64 = 20.0;

/// A 0 to 100 integer ranking a candidate's fit against search criteria.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MatchScore(u8);

impl MatchScore {
    /// Computes the match score for a candidate against criteria.
    #[must_use]
    pub fn compute(candidate: &Candidate, criteria: &MatchingCriteria) -> Self {
        let profile = candidate.profile();

        let distance_factor =
            ((DISTANCE_HORIZON_KM - candidate.distance_km()) / DISTANCE_HORIZON_KM).max(0.0);
        let trust_factor = f64::from(profile.trust_score().value()) / 100.0;
        let rating_factor = profile.rating().value() / 5.0;
        let price_factor = if criteria.budget().contains(profile.price()) {
            1.0
        } else {
            0.0
        };
        let skill_factor = skill_overlap(criteria.required_skills(), profile.skills());
        let language_factor = criteria
            .language()
            .map_or(0.0, |requested| language_match(requested, profile.languages()));
        let availability_factor = profile.availability().score_weight();

        let weighted = DISTANCE_WEIGHT * distance_factor
            + TRUST_WEIGHT * trust_factor
            + RATING_WEIGHT * rating_factor
            + PRICE_WEIGHT * price_factor
            + SKILL_WEIGHT * skill_factor
            + LANGUAGE_WEIGHT * language_factor
            + AVAILABILITY_WEIGHT * availability_factor;

        Self((weighted * 100.0).round().clamp(0.0, 100.0) as u8)
    }

    /// Returns the score value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Fraction of required skills matched by the candidate's skills.
///
/// Matching is a case-insensitive substring test in either direction. An
/// empty requirement list contributes 0 rather than being renormalised
/// away; broad searches score slightly lower across the board, which keeps
/// the factor weights fixed.
fn skill_overlap(required: &[String], offered: &[String]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let matched = required
        .iter()
        .filter(|requirement| {
            let requirement_lower = requirement.to_lowercase();
            offered.iter().any(|skill| {
                let skill_lower = skill.to_lowercase();
                skill_lower.contains(&requirement_lower) || requirement_lower.contains(&skill_lower)
            })
        })
        .count();
    matched as f64 / required.len() as f64
}

/// Returns 1.0 when the candidate speaks the requested language.
fn language_match(requested: &str, spoken: &[String]) -> f64 {
    let requested_lower = requested.trim().to_lowercase();
    if spoken
        .iter()
        .any(|language| language.trim().to_lowercase() == requested_lower)
    {
        1.0
    } else {
        0.0
    }
}
