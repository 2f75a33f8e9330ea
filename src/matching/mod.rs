//! Weighted multi-criteria candidate ranking.
//!
//! The ranker scores already-fetched provider candidates against a client's
//! validated search criteria and returns a ranked list. Scoring is a pure
//! function: no ports, no side effects, and the match score is computed
//! once regardless of the active sort key.
//!
//! - Domain types in [`domain`]
//! - Ranking service in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
