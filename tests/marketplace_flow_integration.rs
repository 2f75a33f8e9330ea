//! Behavioural integration test for the full marketplace flow.
//!
//! Exercises the crate end to end through its in-memory adapters: profiles
//! are created, the provider builds trust through document verification,
//! the client ranks candidates, and a task runs through its lifecycle from
//! posting to completion with notifications at every step.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]
#![expect(
    clippy::cognitive_complexity,
    reason = "Test functions may have higher complexity for full scenario coverage"
)]

use std::sync::Arc;

use brunel::actor::ActorContext;
use brunel::matching::{
    domain::{BudgetRange, Candidate, MatchingCriteria, SortKey, Urgency},
    services::MatchRanker,
};
use brunel::profile::{
    adapters::memory::InMemoryProfileRepository,
    domain::{Availability, Profile, Rating, Role, VerificationTier},
    ports::ProfileRepository,
};
use brunel::task::{
    adapters::{
        InMemoryBookingRepository, InMemorySlotRepository, InMemoryTaskRepository,
        RecordingNotificationSink,
    },
    domain::TaskStatus,
    ports::{NotificationKind, SlotRepository},
    services::TaskLifecycleService,
};
use brunel::trust::{
    adapters::{memory::InMemoryArtifactRepository, verifier::FixedOutcomeVerifier},
    domain::DocumentType,
    services::TrustService,
};
use chrono::{NaiveDate, NaiveTime};
use mockable::DefaultClock;
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

#[test]
fn verified_provider_is_matched_booked_and_completes_the_task() {
    let rt = test_runtime();
    let clock = DefaultClock;

    let profiles = Arc::new(InMemoryProfileRepository::new());
    let trust = TrustService::new(
        Arc::new(InMemoryArtifactRepository::new()),
        Arc::clone(&profiles),
        Arc::new(FixedOutcomeVerifier::approving()),
        Arc::new(DefaultClock),
    );

    // Seed a client and two competing providers.
    let client_profile = Profile::new(Role::Client, &clock);
    rt.block_on(profiles.insert(&client_profile))
        .expect("store client");
    let client = ActorContext::new(client_profile.id(), Role::Client);

    let strong_provider = Profile::new(Role::Provider, &clock)
        .with_skills(vec!["plumbing".to_owned(), "tiling".to_owned()])
        .expect("skills")
        .with_languages(vec!["english".to_owned()])
        .expect("languages")
        .with_rating(Rating::new(4.8).expect("rating"), 32)
        .with_price(180)
        .with_availability(Availability::Available);
    let weak_provider = Profile::new(Role::Provider, &clock)
        .with_skills(vec!["gardening".to_owned()])
        .expect("skills")
        .with_rating(Rating::new(3.1).expect("rating"), 4)
        .with_price(900)
        .with_availability(Availability::Offline);
    rt.block_on(profiles.insert(&strong_provider))
        .expect("store provider");
    rt.block_on(profiles.insert(&weak_provider))
        .expect("store provider");
    let provider = ActorContext::new(strong_provider.id(), Role::Provider);

    // The strong provider verifies identity and address documents.
    rt.block_on(trust.submit_document(&provider, DocumentType::Identity))
        .expect("identity verification");
    rt.block_on(trust.submit_document(&provider, DocumentType::Address))
        .expect("address verification");

    let verified = rt
        .block_on(profiles.find_by_id(strong_provider.id()))
        .expect("lookup")
        .expect("provider exists");
    assert_eq!(verified.trust_score().value(), 50);
    assert_eq!(verified.verification_tier(), VerificationTier::Government);
    assert!(verified.is_verified());

    // The client searches for a plumber; the verified provider ranks first.
    let budget = BudgetRange::new(100, 500).expect("budget");
    let criteria = MatchingCriteria::new(budget)
        .with_required_skills(vec!["plumbing".to_owned()])
        .with_language("english");
    let refreshed_weak = rt
        .block_on(profiles.find_by_id(weak_provider.id()))
        .expect("lookup")
        .expect("provider exists");
    let candidates = vec![
        Candidate::new(verified, 4.0).expect("candidate"),
        Candidate::new(refreshed_weak, 18.0).expect("candidate"),
    ];
    let ranked = MatchRanker.rank(candidates, &criteria, SortKey::MatchScore);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].profile().id(), strong_provider.id());
    assert!(ranked[0].match_score() > ranked[1].match_score());

    // The task runs through its full lifecycle.
    let slots = Arc::new(InMemorySlotRepository::new());
    let sink = Arc::new(RecordingNotificationSink::new());
    let lifecycle = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::clone(&slots),
        Arc::new(InMemoryBookingRepository::new()),
        Arc::clone(&sink),
        Arc::new(DefaultClock),
    );

    let task = rt
        .block_on(lifecycle.post_task(&client, "Fix the bathroom leak", budget, Urgency::High))
        .expect("post task");
    assert_eq!(task.status(), TaskStatus::Posted);

    let slot = rt
        .block_on(lifecycle.offer_slot(
            &provider,
            NaiveDate::from_ymd_opt(2026, 9, 14).expect("valid date"),
            NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
            NaiveTime::from_hms_opt(12, 0, 0).expect("valid time"),
        ))
        .expect("offer slot");

    rt.block_on(lifecycle.accept_task(&provider, task.id(), slot.id()))
        .expect("accept");
    rt.block_on(lifecycle.select_provider(&client, task.id()))
        .expect("select");
    rt.block_on(lifecycle.start_task(&provider, task.id()))
        .expect("start");
    let outcome = rt
        .block_on(lifecycle.complete_task(&provider, task.id()))
        .expect("complete");

    assert_eq!(outcome.task.status(), TaskStatus::Completed);
    assert_eq!(outcome.task.provider_id(), Some(strong_provider.id()));
    assert!(outcome.task.completed_at().is_some());
    assert_eq!(outcome.task.version(), 5);

    // The booked slot stays held as history after completion.
    let booked = rt
        .block_on(slots.find_by_id(slot.id()))
        .expect("lookup")
        .expect("slot exists");
    assert!(booked.is_booked());

    let bookings = rt
        .block_on(lifecycle.bookings_for_task(task.id()))
        .expect("bookings");
    assert_eq!(bookings.len(), 1);
    assert!(bookings[0].is_confirmed());

    // Each transition notified the non-acting party.
    let deliveries = sink.deliveries().expect("deliveries");
    let kinds: Vec<NotificationKind> = deliveries
        .iter()
        .map(|(_, notification)| notification.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            NotificationKind::TaskAccepted,
            NotificationKind::ProviderSelected,
            NotificationKind::TaskStarted,
            NotificationKind::TaskCompleted,
        ]
    );
    assert_eq!(deliveries[0].0, client_profile.id());
    assert_eq!(deliveries[1].0, strong_provider.id());
}
