//! In-memory artifact repository for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::profile::domain::UserId;
use crate::trust::{
    domain::{ArtifactId, VerificationArtifact},
    ports::{ArtifactRepository, ArtifactRepositoryError, ArtifactRepositoryResult},
};

/// Thread-safe in-memory verification artifact repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifactRepository {
    artifacts: Arc<RwLock<HashMap<ArtifactId, VerificationArtifact>>>,
}

impl InMemoryArtifactRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArtifactRepository for InMemoryArtifactRepository {
    async fn insert(&self, artifact: &VerificationArtifact) -> ArtifactRepositoryResult<()> {
        let mut artifacts = self.artifacts.write().map_err(|err| {
            ArtifactRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if artifacts.contains_key(&artifact.id()) {
            return Err(ArtifactRepositoryError::DuplicateArtifact(artifact.id()));
        }
        artifacts.insert(artifact.id(), artifact.clone());
        Ok(())
    }

    async fn update(&self, artifact: &VerificationArtifact) -> ArtifactRepositoryResult<()> {
        let mut artifacts = self.artifacts.write().map_err(|err| {
            ArtifactRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !artifacts.contains_key(&artifact.id()) {
            return Err(ArtifactRepositoryError::NotFound(artifact.id()));
        }
        artifacts.insert(artifact.id(), artifact.clone());
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: UserId,
    ) -> ArtifactRepositoryResult<Vec<VerificationArtifact>> {
        let artifacts = self.artifacts.read().map_err(|err| {
            ArtifactRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut found: Vec<VerificationArtifact> = artifacts
            .values()
            .filter(|artifact| artifact.user_id() == user_id)
            .cloned()
            .collect();
        found.sort_by_key(VerificationArtifact::submitted_at);
        Ok(found)
    }
}
