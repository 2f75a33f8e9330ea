//! Task lifecycle, slot booking, and notification fan-out.
//!
//! A task moves through a fixed state machine from draft or posting to a
//! terminal state; every transition is validated against the transition
//! table and bumps the entity version used for remote reconciliation.
//! Accepting a task reserves a provider calendar slot atomically, so two
//! concurrent applications for the same slot resolve to exactly one
//! booking. Each committed transition notifies the non-acting party.
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
