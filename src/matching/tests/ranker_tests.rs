//! Unit tests for ranking and sort behaviour.

use crate::matching::domain::{BudgetRange, Candidate, MatchingCriteria, SortKey};
use crate::matching::services::MatchRanker;
use crate::profile::domain::{Availability, Profile, Rating, Role, TrustScore, UserId, VerificationTier};
use mockable::DefaultClock;
use rstest::rstest;

fn provider(trust: u32, rating: f64, price: u32) -> Profile {
    let clock = DefaultClock;
    let mut profile = Profile::new(Role::Provider, &clock)
        .with_rating(Rating::new(rating).expect("valid rating"), 5)
        .with_price(price)
        .with_availability(Availability::Available);
    profile.apply_trust(
        TrustScore::capped(trust),
        VerificationTier::Basic,
        trust > 0,
        &clock,
    );
    profile
}

fn candidate(profile: Profile, distance_km: f64) -> Candidate {
    Candidate::new(profile, distance_km).expect("valid distance")
}

fn criteria() -> MatchingCriteria {
    MatchingCriteria::new(BudgetRange::new(0, 100).expect("valid budget"))
}

#[test]
fn default_sort_orders_by_descending_match_score() {
    let strong = provider(95, 4.9, 50);
    let weak = provider(10, 2.0, 500);
    let strong_id = strong.id();
    let ranker = MatchRanker::new();

    let ranked = ranker.rank(
        vec![candidate(weak, 18.0), candidate(strong, 2.0)],
        &criteria(),
        SortKey::MatchScore,
    );

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked.first().map(|entry| entry.profile().id()), Some(strong_id));
    let scores: Vec<u8> = ranked.iter().map(|entry| entry.match_score().value()).collect();
    let mut sorted_desc = scores.clone();
    sorted_desc.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted_desc);
}

#[rstest]
#[case(SortKey::Price)]
#[case(SortKey::Rating)]
#[case(SortKey::Distance)]
fn alternate_sorts_keep_the_same_scores(#[case] sort_by: SortKey) {
    let ranker = MatchRanker::new();
    let candidates = vec![
        candidate(provider(95, 4.9, 80), 2.0),
        candidate(provider(40, 3.5, 30), 8.0),
        candidate(provider(70, 4.2, 120), 1.0),
    ];

    let by_score = ranker.rank(candidates.clone(), &criteria(), SortKey::MatchScore);
    let alternate = ranker.rank(candidates, &criteria(), sort_by);

    let mut score_ids: Vec<(UserId, u8)> = by_score
        .iter()
        .map(|entry| (entry.profile().id(), entry.match_score().value()))
        .collect();
    let mut alternate_ids: Vec<(UserId, u8)> = alternate
        .iter()
        .map(|entry| (entry.profile().id(), entry.match_score().value()))
        .collect();
    score_ids.sort_by_key(|(id, _)| id.into_inner().as_u128());
    alternate_ids.sort_by_key(|(id, _)| id.into_inner().as_u128());
    assert_eq!(score_ids, alternate_ids);
}

#[test]
fn price_sort_ascends() {
    let ranker = MatchRanker::new();
    let ranked = ranker.rank(
        vec![
            candidate(provider(50, 4.0, 90), 5.0),
            candidate(provider(50, 4.0, 30), 5.0),
            candidate(provider(50, 4.0, 60), 5.0),
        ],
        &criteria(),
        SortKey::Price,
    );

    let prices: Vec<u32> = ranked.iter().map(|entry| entry.profile().price()).collect();
    assert_eq!(prices, vec![30, 60, 90]);
}

#[test]
fn distance_sort_ascends() {
    let ranker = MatchRanker::new();
    let ranked = ranker.rank(
        vec![
            candidate(provider(50, 4.0, 50), 9.0),
            candidate(provider(50, 4.0, 50), 1.5),
            candidate(provider(50, 4.0, 50), 4.2),
        ],
        &criteria(),
        SortKey::Distance,
    );

    let distances: Vec<f64> = ranked
        .iter()
        .map(|entry| entry.candidate().distance_km())
        .collect();
    assert_eq!(distances, vec![1.5, 4.2, 9.0]);
}

#[test]
fn resort_reorders_without_recomputing_scores() {
    let ranker = MatchRanker::new();
    let mut ranked = ranker.rank(
        vec![
            candidate(provider(95, 4.9, 80), 2.0),
            candidate(provider(40, 3.5, 30), 8.0),
        ],
        &criteria(),
        SortKey::MatchScore,
    );
    let original_scores: Vec<u8> = ranked.iter().map(|entry| entry.match_score().value()).collect();

    ranker.resort(&mut ranked, SortKey::Price);
    let prices: Vec<u32> = ranked.iter().map(|entry| entry.profile().price()).collect();
    assert_eq!(prices, vec![30, 80]);

    let mut resorted_scores: Vec<u8> =
        ranked.iter().map(|entry| entry.match_score().value()).collect();
    resorted_scores.reverse();
    assert_eq!(resorted_scores, original_scores);
}

#[test]
fn minimum_rating_floor_drops_candidates() -> eyre::Result<()> {
    let ranker = MatchRanker::new();
    let searched = criteria().with_min_rating(4.0)?;

    let ranked = ranker.rank(
        vec![
            candidate(provider(50, 4.5, 50), 5.0),
            candidate(provider(50, 3.0, 50), 5.0),
        ],
        &searched,
        SortKey::MatchScore,
    );

    assert_eq!(ranked.len(), 1);
    assert!((ranked.first().map(|entry| entry.profile().rating().value())).is_some_and(|r| r > 4.0));
    Ok(())
}

#[test]
fn minimum_trust_floor_drops_candidates() {
    let ranker = MatchRanker::new();
    let searched = criteria().with_min_trust_score(60);

    let ranked = ranker.rank(
        vec![
            candidate(provider(80, 4.0, 50), 5.0),
            candidate(provider(40, 4.0, 50), 5.0),
        ],
        &searched,
        SortKey::MatchScore,
    );

    assert_eq!(ranked.len(), 1);
    assert_eq!(
        ranked.first().map(|entry| entry.profile().trust_score().value()),
        Some(80)
    );
}
