//! Ranking service for provider matching.

pub mod ranker;

pub use ranker::MatchRanker;
