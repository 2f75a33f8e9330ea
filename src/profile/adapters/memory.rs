//! In-memory profile repository for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::profile::{
    domain::{Profile, Role, UserId},
    ports::{ProfileRepository, ProfileRepositoryError, ProfileRepositoryResult},
};

/// Thread-safe in-memory profile repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<UserId, Profile>>>,
}

impl InMemoryProfileRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn insert(&self, profile: &Profile) -> ProfileRepositoryResult<()> {
        let mut profiles = self.profiles.write().map_err(|err| {
            ProfileRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if profiles.contains_key(&profile.id()) {
            return Err(ProfileRepositoryError::DuplicateProfile(profile.id()));
        }
        profiles.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> ProfileRepositoryResult<()> {
        let mut profiles = self.profiles.write().map_err(|err| {
            ProfileRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !profiles.contains_key(&profile.id()) {
            return Err(ProfileRepositoryError::NotFound(profile.id()));
        }
        profiles.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> ProfileRepositoryResult<Option<Profile>> {
        let profiles = self.profiles.read().map_err(|err| {
            ProfileRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(profiles.get(&id).cloned())
    }

    async fn find_providers(&self) -> ProfileRepositoryResult<Vec<Profile>> {
        let profiles = self.profiles.read().map_err(|err| {
            ProfileRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(profiles
            .values()
            .filter(|profile| profile.role() == Role::Provider)
            .cloned()
            .collect())
    }
}
