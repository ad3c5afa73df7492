//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks keep their rows in memory like the real adapters, but also
//! record which port methods were called and can be switched to fail, so
//! tests can assert on interactions as well as results.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
