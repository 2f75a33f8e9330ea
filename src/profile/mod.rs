//! Client and provider profiles.
//!
//! Profiles carry the trust state computed by the [`crate::trust`] module
//! and the listing attributes the [`crate::matching`] ranker scores against.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
