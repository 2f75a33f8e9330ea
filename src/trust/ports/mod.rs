//! Port contracts for artifact persistence and document verification.

pub mod repository;
pub mod verifier;

pub use repository::{ArtifactRepository, ArtifactRepositoryError, ArtifactRepositoryResult};
pub use verifier::{DocumentVerifier, VerificationOutcome, VerifierError};
