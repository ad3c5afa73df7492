//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (the in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{Country, CountryId, NewCountry, NewPerson, Person, PersonId};
use crate::error::DomainError;

/// Repository for Country entities
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// List all countries in insertion order
    async fn find_all(&self) -> Result<Vec<Country>, DomainError>;

    /// Find a country by ID
    async fn find_by_id(&self, id: &CountryId) -> Result<Option<Country>, DomainError>;

    /// Find a country by name (case-insensitive)
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, DomainError>;

    /// Create a new country, assigning it a fresh ID
    async fn create(&self, country: &NewCountry) -> Result<Country, DomainError>;
}

/// Repository for Person entities
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// List all persons in insertion order
    async fn find_all(&self) -> Result<Vec<Person>, DomainError>;

    /// Find a person by ID
    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, DomainError>;

    /// Create a new person, assigning it a fresh ID
    async fn create(&self, person: &NewPerson) -> Result<Person, DomainError>;

    /// Replace every field of an existing person
    async fn update(&self, person: &Person) -> Result<Person, DomainError>;

    /// Delete a person, returning whether a row was removed
    async fn delete(&self, id: &PersonId) -> Result<bool, DomainError>;
}
