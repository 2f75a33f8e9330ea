//! Repository port for profile persistence and lookup.

use crate::profile::domain::{Profile, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for profile repository operations.
pub type ProfileRepositoryResult<T> = Result<T, ProfileRepositoryError>;

/// Profile persistence contract.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Stores a new profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileRepositoryError::DuplicateProfile`] when the user
    /// identifier already exists.
    async fn insert(&self, profile: &Profile) -> ProfileRepositoryResult<()>;

    /// Persists changes to an existing profile (trust state, availability,
    /// listing attributes).
    ///
    /// # Errors
    ///
    /// Returns [`ProfileRepositoryError::NotFound`] when the profile does
    /// not exist.
    async fn update(&self, profile: &Profile) -> ProfileRepositoryResult<()>;

    /// Finds a profile by user identifier.
    ///
    /// Returns `None` when the profile does not exist.
    async fn find_by_id(&self, id: UserId) -> ProfileRepositoryResult<Option<Profile>>;

    /// Returns all provider profiles, regardless of availability.
    ///
    /// Candidate pre-filtering (distance, rating floors) happens in the
    /// matching layer, not here.
    async fn find_providers(&self) -> ProfileRepositoryResult<Vec<Profile>>;
}

/// Errors returned by profile repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProfileRepositoryError {
    /// A profile with the same identifier already exists.
    #[error("duplicate profile identifier: {0}")]
    DuplicateProfile(UserId),

    /// The profile was not found.
    #[error("profile not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProfileRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
