//! Unit tests for the trust module.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
