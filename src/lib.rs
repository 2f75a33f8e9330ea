//! Brunel: marketplace matching, trust-scoring, and task-lifecycle core.
//!
//! This crate provides the algorithmic core of a services marketplace that
//! connects clients with service providers: converting verification
//! artifacts into trust scores and tiers, ranking candidate providers
//! against a client's search criteria, and driving tasks through their
//! lifecycle while persisting every transition and notifying the
//! counterparty.
//!
//! # Architecture
//!
//! Brunel follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores,
//!   notification sinks, document verifiers)
//!
//! # Modules
//!
//! - [`profile`]: Client and provider profiles, trust state, availability
//! - [`trust`]: Verification artifacts and trust-score evaluation
//! - [`matching`]: Weighted multi-criteria candidate ranking
//! - [`task`]: Task lifecycle state machine, slot booking, notifications
//! - [`actor`]: Explicit caller identity passed into every operation

pub mod actor;
pub mod matching;
pub mod profile;
pub mod task;
pub mod trust;
