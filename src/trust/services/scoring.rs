//! Service layer for document submission and trust-state recomputation.

use crate::actor::ActorContext;
use crate::profile::{
    domain::UserId,
    ports::{ProfileRepository, ProfileRepositoryError},
};
use crate::trust::{
    domain::{DocumentType, TrustDomainError, TrustEvaluation, VerificationArtifact},
    ports::{ArtifactRepository, ArtifactRepositoryError, DocumentVerifier, VerifierError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for trust operations.
#[derive(Debug, Error)]
pub enum TrustServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TrustDomainError),
    /// Artifact persistence failed.
    #[error(transparent)]
    Artifacts(#[from] ArtifactRepositoryError),
    /// Profile persistence failed.
    #[error(transparent)]
    Profiles(#[from] ProfileRepositoryError),
    /// The verification provider failed.
    #[error(transparent)]
    Verifier(#[from] VerifierError),
    /// The profile the operation targets does not exist.
    #[error("no profile for user: {0}")]
    UnknownUser(UserId),
}

/// Result type for trust service operations.
pub type TrustServiceResult<T> = Result<T, TrustServiceError>;

/// Orchestrates document submission, verification, and trust persistence.
///
/// Trust state on a profile is always the output of a fresh
/// [`TrustEvaluation`] over the user's current artifact set; this service
/// is the only writer of that state.
#[derive(Clone)]
pub struct TrustService<A, P, V, C>
where
    A: ArtifactRepository,
    P: ProfileRepository,
    V: DocumentVerifier,
    C: Clock + Send + Sync,
{
    artifacts: Arc<A>,
    profiles: Arc<P>,
    verifier: Arc<V>,
    clock: Arc<C>,
}

impl<A, P, V, C> TrustService<A, P, V, C>
where
    A: ArtifactRepository,
    P: ProfileRepository,
    V: DocumentVerifier,
    C: Clock + Send + Sync,
{
    /// Creates a new trust service.
    #[must_use]
    pub const fn new(artifacts: Arc<A>, profiles: Arc<P>, verifier: Arc<V>, clock: Arc<C>) -> Self {
        Self {
            artifacts,
            profiles,
            verifier,
            clock,
        }
    }

    /// Submits a verification document for the acting user and runs it
    /// through the verification pipeline.
    ///
    /// On any outcome the owning profile's trust state is recomputed from
    /// the full artifact set and persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TrustServiceError::Domain`] when the document type is not a
    /// verification step for the actor's role or duplicates a live
    /// submission, and repository or verifier errors otherwise.
    pub async fn submit_document(
        &self,
        actor: &ActorContext,
        document_type: DocumentType,
    ) -> TrustServiceResult<VerificationArtifact> {
        if !document_type.required_for(actor.role()) {
            return Err(TrustDomainError::DocumentNotRequired {
                document_type,
                role: actor.role(),
            }
            .into());
        }

        let existing = self.artifacts.find_by_user(actor.user_id()).await?;
        let duplicate = existing.iter().any(|artifact| {
            artifact.document_type() == document_type && artifact.blocks_resubmission()
        });
        if duplicate {
            return Err(TrustDomainError::DuplicateDocument(document_type).into());
        }

        let mut artifact =
            VerificationArtifact::submit(actor.user_id(), document_type, &*self.clock);
        self.artifacts.insert(&artifact).await?;

        let outcome = self.verifier.verify(&artifact).await?;
        artifact.record_outcome(outcome.approved, &*self.clock);
        self.artifacts.update(&artifact).await?;
        debug!(
            user = %actor.user_id(),
            document = %document_type,
            approved = outcome.approved,
            confidence = outcome.confidence,
            "verification outcome recorded"
        );

        self.recompute(actor.user_id()).await?;
        Ok(artifact)
    }

    /// Recomputes the user's trust state from the current artifact set and
    /// persists it onto the profile.
    ///
    /// # Errors
    ///
    /// Returns [`TrustServiceError::UnknownUser`] when no profile exists for
    /// the user, and repository errors otherwise.
    pub async fn recompute(&self, user_id: UserId) -> TrustServiceResult<TrustEvaluation> {
        let mut profile = self
            .profiles
            .find_by_id(user_id)
            .await?
            .ok_or(TrustServiceError::UnknownUser(user_id))?;

        let artifacts = self.artifacts.find_by_user(user_id).await?;
        let evaluation = TrustEvaluation::from_artifacts(&artifacts, profile.role());

        profile.apply_trust(
            evaluation.score(),
            evaluation.tier(),
            evaluation.is_verified(),
            &*self.clock,
        );
        self.profiles.update(&profile).await?;
        debug!(
            user = %user_id,
            score = evaluation.score().value(),
            tier = %evaluation.tier(),
            "trust state recomputed"
        );
        Ok(evaluation)
    }

    /// Returns the verification steps the acting user still has to complete.
    ///
    /// A step counts as complete while a live (pending, submitted, or
    /// approved) artifact of that document type exists.
    ///
    /// # Errors
    ///
    /// Returns [`TrustServiceError::Artifacts`] when the artifact lookup
    /// fails.
    pub async fn outstanding_steps(
        &self,
        actor: &ActorContext,
    ) -> TrustServiceResult<Vec<DocumentType>> {
        let existing = self.artifacts.find_by_user(actor.user_id()).await?;
        let outstanding = crate::trust::domain::verification_steps(actor.role())
            .iter()
            .copied()
            .filter(|step| {
                !existing.iter().any(|artifact| {
                    artifact.document_type() == *step && artifact.blocks_resubmission()
                })
            })
            .collect();
        Ok(outstanding)
    }
}
