//! Unit tests for the in-memory profile repository.

use crate::profile::{
    adapters::memory::InMemoryProfileRepository,
    domain::{Profile, Role, UserId},
    ports::{ProfileRepository, ProfileRepositoryError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryProfileRepository {
    InMemoryProfileRepository::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_then_find_round_trips(repository: InMemoryProfileRepository) {
    let clock = DefaultClock;
    let profile = Profile::new(Role::Client, &clock);
    repository.insert(&profile).await.expect("insert");

    let fetched = repository.find_by_id(profile.id()).await.expect("lookup");
    assert_eq!(fetched, Some(profile));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_rejects_duplicate_identifier(repository: InMemoryProfileRepository) {
    let clock = DefaultClock;
    let profile = Profile::new(Role::Client, &clock);
    repository.insert(&profile).await.expect("first insert");

    let result = repository.insert(&profile).await;
    assert!(matches!(
        result,
        Err(ProfileRepositoryError::DuplicateProfile(id)) if id == profile.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_requires_existing_profile(repository: InMemoryProfileRepository) {
    let clock = DefaultClock;
    let profile = Profile::new(Role::Provider, &clock);

    let result = repository.update(&profile).await;
    assert!(matches!(result, Err(ProfileRepositoryError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_providers_excludes_clients(repository: InMemoryProfileRepository) {
    let clock = DefaultClock;
    let client = Profile::new(Role::Client, &clock);
    let provider = Profile::new(Role::Provider, &clock);
    repository.insert(&client).await.expect("insert client");
    repository.insert(&provider).await.expect("insert provider");

    let providers = repository.find_providers().await.expect("listing");
    assert_eq!(providers.len(), 1);
    assert_eq!(providers.first().map(Profile::id), Some(provider.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_when_missing(repository: InMemoryProfileRepository) {
    let fetched = repository.find_by_id(UserId::new()).await.expect("lookup");
    assert!(fetched.is_none());
}
