//! Pure trust evaluation over a user's verification artifacts.

use super::VerificationArtifact;
use crate::profile::domain::{Role, TrustScore, VerificationTier};
use serde::{Deserialize, Serialize};

/// Points awarded to a client per approved contact artifact.
const CLIENT_POINTS_PER_ARTIFACT: u32 = 50;

/// Points awarded to a provider per approved artifact, by level.
const fn provider_points(level: u8) -> u32 {
    match level {
        1 => 20,
        2 => 25,
        3 => 30,
        _ => 40,
    }
}

/// Result of evaluating a user's artifact set.
///
/// The evaluation is idempotent: the same artifact set always yields the
/// same result. Callers persist the result onto the profile; the evaluation
/// itself has no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustEvaluation {
    score: TrustScore,
    tier: VerificationTier,
    approved_count: u32,
}

impl TrustEvaluation {
    /// Evaluates trust state from the current artifact set for a role.
    ///
    /// Only approved artifacts whose document type is a verification step
    /// for `role` contribute. The tier is the highest contributing level
    /// (`Basic` when nothing contributes). Clients earn 50 points per
    /// approved contact artifact; providers earn level-weighted points.
    /// Every approved artifact contributes its full level weight, so two
    /// approved artifacts at the same level both count. Scores cap at 100.
    #[must_use]
    pub fn from_artifacts(artifacts: &[VerificationArtifact], role: Role) -> Self {
        let contributing = artifacts.iter().filter(|artifact| {
            artifact.is_approved() && artifact.document_type().required_for(role)
        });

        let mut points: u32 = 0;
        let mut highest_level: u8 = 0;
        let mut approved_count: u32 = 0;
        for artifact in contributing {
            let level = artifact.document_type().level();
            points += match role {
                Role::Client => CLIENT_POINTS_PER_ARTIFACT,
                Role::Provider => provider_points(level),
            };
            highest_level = highest_level.max(level);
            approved_count += 1;
        }

        let tier = if approved_count == 0 {
            VerificationTier::Basic
        } else {
            VerificationTier::from_level(highest_level)
        };

        Self {
            score: TrustScore::capped(points),
            tier,
            approved_count,
        }
    }

    /// Returns the capped trust score.
    #[must_use]
    pub const fn score(&self) -> TrustScore {
        self.score
    }

    /// Returns the verification tier.
    #[must_use]
    pub const fn tier(&self) -> VerificationTier {
        self.tier
    }

    /// Returns how many artifacts contributed to the evaluation.
    #[must_use]
    pub const fn approved_count(&self) -> u32 {
        self.approved_count
    }

    /// Returns whether the evaluation saw any approved artifact.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.approved_count > 0
    }
}
