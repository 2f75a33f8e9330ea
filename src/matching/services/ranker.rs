//! Candidate ranking over already-fetched provider profiles.

use crate::matching::domain::{
    Candidate, MatchScore, MatchingCriteria, RankedCandidate, SortKey,
};

/// Pure ranking function over candidate providers.
///
/// Ranking has no side effects and touches no ports: candidates arrive
/// already fetched and distance-annotated, and the ranked list is returned
/// to the caller. The match score is computed once per candidate; the sort
/// key only reorders the scored list.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchRanker;

impl MatchRanker {
    /// Creates a ranker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Scores every eligible candidate and returns the sorted list.
    ///
    /// Candidates below the criteria's minimum rating or minimum trust
    /// score are dropped before scoring. All sorts are stable, so
    /// candidates tying on the active key keep their relative order.
    #[must_use]
    pub fn rank(
        &self,
        candidates: Vec<Candidate>,
        criteria: &MatchingCriteria,
        sort_by: SortKey,
    ) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .filter(|candidate| Self::passes_floors(candidate, criteria))
            .map(|candidate| {
                let score = MatchScore::compute(&candidate, criteria);
                RankedCandidate::new(candidate, score)
            })
            .collect();
        Self::sort(&mut ranked, sort_by);
        ranked
    }

    /// Re-sorts an already-scored list by a different key.
    pub fn resort(&self, ranked: &mut [RankedCandidate], sort_by: SortKey) {
        Self::sort(ranked, sort_by);
    }

    fn passes_floors(candidate: &Candidate, criteria: &MatchingCriteria) -> bool {
        let profile = candidate.profile();
        if let Some(min_rating) = criteria.min_rating() {
            if profile.rating().value() < min_rating {
                return false;
            }
        }
        if let Some(min_trust) = criteria.min_trust_score() {
            if profile.trust_score().value() < min_trust {
                return false;
            }
        }
        true
    }

    fn sort(ranked: &mut [RankedCandidate], sort_by: SortKey) {
        match sort_by {
            SortKey::MatchScore => {
                ranked.sort_by(|a, b| b.match_score().cmp(&a.match_score()));
            }
            SortKey::Price => {
                ranked.sort_by_key(|entry| entry.profile().price());
            }
            SortKey::Rating => {
                ranked.sort_by(|a, b| {
                    b.profile()
                        .rating()
                        .value()
                        .total_cmp(&a.profile().rating().value())
                });
            }
            SortKey::Distance => {
                ranked.sort_by(|a, b| {
                    a.candidate()
                        .distance_km()
                        .total_cmp(&b.candidate().distance_km())
                });
            }
        }
    }
}
