//! Adapter implementations for trust ports.

pub mod memory;
pub mod verifier;

pub use memory::InMemoryArtifactRepository;
pub use verifier::FixedOutcomeVerifier;
