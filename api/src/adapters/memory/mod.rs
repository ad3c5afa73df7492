//! In-memory adapters
//!
//! Implementations of repository traits backed by a plain list behind an
//! async `RwLock`. Nothing survives a restart.

pub mod country_repo;
pub mod person_repo;
pub mod seed;

pub use country_repo::InMemoryCountryRepository;
pub use person_repo::InMemoryPersonRepository;
pub use seed::seed_sample_data;
