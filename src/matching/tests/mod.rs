//! Unit tests for the matching module.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod ranker_tests;
