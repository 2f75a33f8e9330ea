//! Domain model for identity verification and trust scoring.

mod artifact;
mod error;
mod evaluation;
mod ids;
mod steps;

pub use artifact::{ArtifactStatus, DocumentType, VerificationArtifact};
pub use error::{ParseArtifactStatusError, ParseDocumentTypeError, TrustDomainError};
pub use evaluation::TrustEvaluation;
pub use ids::ArtifactId;
pub use steps::verification_steps;
