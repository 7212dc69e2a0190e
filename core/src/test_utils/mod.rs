//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Mocks are hand-written in-memory ports rather than generated ones, so each
//! test controls exactly what the backend and the clock return.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
