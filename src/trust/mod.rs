//! Verification artifacts and trust-score evaluation.
//!
//! Trust scoring converts the set of approved verification artifacts a user
//! has accumulated into a 0 to 100 trust score and an ordered verification
//! tier. The evaluation itself is a pure function over the artifact set;
//! the service layer orchestrates document submission through the pluggable
//! verifier port and persists recomputed trust state onto the profile.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
