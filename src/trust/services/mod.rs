//! Orchestration services for document submission and trust recomputation.

pub mod scoring;

pub use scoring::{TrustService, TrustServiceError, TrustServiceResult};
