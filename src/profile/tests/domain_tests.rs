//! Unit tests for profile domain types.

use crate::profile::domain::{
    Availability, Profile, ProfileDomainError, Rating, Role, TrustScore, VerificationTier,
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[case(0, 0)]
#[case(45, 45)]
#[case(99, 99)]
#[case(100, 100)]
#[case(145, 100)]
#[case(u32::MAX, 100)]
fn trust_score_caps_at_one_hundred(#[case] points: u32, #[case] expected: u8) {
    assert_eq!(TrustScore::capped(points).value(), expected);
}

#[rstest]
#[case(VerificationTier::Basic, 1)]
#[case(VerificationTier::Government, 2)]
#[case(VerificationTier::Enhanced, 3)]
#[case(VerificationTier::Community, 4)]
fn verification_tier_level_round_trips(#[case] tier: VerificationTier, #[case] level: u8) {
    assert_eq!(tier.level(), level);
    assert_eq!(VerificationTier::from_level(level), tier);
}

#[test]
fn verification_tiers_order_by_strength() {
    assert!(VerificationTier::Basic < VerificationTier::Government);
    assert!(VerificationTier::Government < VerificationTier::Enhanced);
    assert!(VerificationTier::Enhanced < VerificationTier::Community);
}

#[rstest]
#[case("client", Role::Client)]
#[case(" Provider ", Role::Provider)]
fn role_parses_from_storage_representation(#[case] input: &str, #[case] expected: Role) {
    assert_eq!(Role::try_from(input), Ok(expected));
}

#[test]
fn role_rejects_unknown_values() {
    assert!(Role::try_from("admin").is_err());
}

#[rstest]
#[case(Availability::Available, 1.0)]
#[case(Availability::Busy, 0.5)]
#[case(Availability::Offline, 0.0)]
fn availability_score_weight_matches_contract(
    #[case] availability: Availability,
    #[case] expected: f64,
) {
    assert!((availability.score_weight() - expected).abs() < f64::EPSILON);
}

#[rstest]
#[case(-0.1)]
#[case(5.1)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn rating_rejects_out_of_range_values(#[case] value: f64) {
    assert!(matches!(
        Rating::new(value),
        Err(ProfileDomainError::RatingOutOfRange(_))
    ));
}

#[test]
fn new_profile_starts_unverified_with_zero_trust() {
    let clock = DefaultClock;
    let profile = Profile::new(Role::Provider, &clock);

    assert_eq!(profile.trust_score(), TrustScore::ZERO);
    assert_eq!(profile.verification_tier(), VerificationTier::Basic);
    assert!(!profile.is_verified());
    assert_eq!(profile.availability(), Availability::Available);
}

#[test]
fn apply_trust_replaces_derived_state() {
    let clock = DefaultClock;
    let mut profile = Profile::new(Role::Provider, &clock);

    profile.apply_trust(
        TrustScore::capped(90),
        VerificationTier::Government,
        true,
        &clock,
    );

    assert_eq!(profile.trust_score().value(), 90);
    assert_eq!(profile.verification_tier(), VerificationTier::Government);
    assert!(profile.is_verified());
}

#[test]
fn with_skills_rejects_blank_entries() {
    let clock = DefaultClock;
    let result = Profile::new(Role::Provider, &clock)
        .with_skills(vec!["plumbing".to_owned(), "  ".to_owned()]);

    assert!(matches!(result, Err(ProfileDomainError::EmptySkill)));
}

#[test]
fn builder_trims_skill_and_language_entries() -> eyre::Result<()> {
    let clock = DefaultClock;
    let profile = Profile::new(Role::Provider, &clock)
        .with_skills(vec![" plumbing ".to_owned()])?
        .with_languages(vec![" english ".to_owned()])?;

    assert_eq!(profile.skills(), ["plumbing"]);
    assert_eq!(profile.languages(), ["english"]);
    Ok(())
}
