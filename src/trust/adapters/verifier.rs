//! Deterministic document verifier for tests and local development.

use async_trait::async_trait;

use crate::trust::{
    domain::VerificationArtifact,
    ports::{DocumentVerifier, VerificationOutcome, VerifierError},
};

/// Verifier that returns the same configured outcome for every document.
///
/// Stands in for an external verification provider; production deployments
/// supply their own [`DocumentVerifier`] adapter.
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcomeVerifier {
    outcome: VerificationOutcome,
}

impl FixedOutcomeVerifier {
    /// Creates a verifier that approves every document.
    #[must_use]
    pub const fn approving() -> Self {
        Self {
            outcome: VerificationOutcome {
                approved: true,
                confidence: 1.0,
            },
        }
    }

    /// Creates a verifier that rejects every document.
    #[must_use]
    pub const fn rejecting() -> Self {
        Self {
            outcome: VerificationOutcome {
                approved: false,
                confidence: 1.0,
            },
        }
    }

    /// Creates a verifier returning an arbitrary fixed outcome.
    #[must_use]
    pub const fn with_outcome(outcome: VerificationOutcome) -> Self {
        Self { outcome }
    }
}

#[async_trait]
impl DocumentVerifier for FixedOutcomeVerifier {
    async fn verify(
        &self,
        _artifact: &VerificationArtifact,
    ) -> Result<VerificationOutcome, VerifierError> {
        Ok(self.outcome)
    }
}
