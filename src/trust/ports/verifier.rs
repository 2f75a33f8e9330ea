//! Pluggable document verification port.
//!
//! The concrete verification provider (document inspection, biometric
//! matching) is an external collaborator. The core only depends on this
//! contract; adapters decide how an outcome is produced.

use crate::trust::domain::VerificationArtifact;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Outcome of verifying one submitted document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerificationOutcome {
    /// Whether the document was accepted.
    pub approved: bool,
    /// Provider-reported confidence in the outcome, 0.0 to 1.0.
    pub confidence: f64,
}

/// Document verification contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentVerifier: Send + Sync {
    /// Verifies a submitted artifact and returns the provider's outcome.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError`] when the verification provider cannot be
    /// reached or rejects the request outright.
    async fn verify(&self, artifact: &VerificationArtifact) -> Result<VerificationOutcome, VerifierError>;
}

/// Errors returned by document verifier implementations.
#[derive(Debug, Clone, Error)]
pub enum VerifierError {
    /// The verification provider failed or was unreachable.
    #[error("verification provider failure: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl VerifierError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
