//! Adapters layer
//!
//! Implementations of port traits for storage.

pub mod memory;

pub use memory::{seed_sample_data, InMemoryCountryRepository, InMemoryPersonRepository};
