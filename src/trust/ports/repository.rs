//! Repository port for verification artifact persistence.

use crate::profile::domain::UserId;
use crate::trust::domain::{ArtifactId, VerificationArtifact};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for artifact repository operations.
pub type ArtifactRepositoryResult<T> = Result<T, ArtifactRepositoryError>;

/// Verification artifact persistence contract.
///
/// Artifacts are never deleted; the contract deliberately omits a delete
/// operation so every trust computation can rely on its inputs surviving.
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// Stores a new artifact.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactRepositoryError::DuplicateArtifact`] when the
    /// artifact identifier already exists.
    async fn insert(&self, artifact: &VerificationArtifact) -> ArtifactRepositoryResult<()>;

    /// Persists a status change produced by the verification pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactRepositoryError::NotFound`] when the artifact does
    /// not exist.
    async fn update(&self, artifact: &VerificationArtifact) -> ArtifactRepositoryResult<()>;

    /// Returns all artifacts submitted by the given user.
    async fn find_by_user(&self, user_id: UserId)
    -> ArtifactRepositoryResult<Vec<VerificationArtifact>>;
}

/// Errors returned by artifact repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ArtifactRepositoryError {
    /// An artifact with the same identifier already exists.
    #[error("duplicate artifact identifier: {0}")]
    DuplicateArtifact(ArtifactId),

    /// The artifact was not found.
    #[error("artifact not found: {0}")]
    NotFound(ArtifactId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ArtifactRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
