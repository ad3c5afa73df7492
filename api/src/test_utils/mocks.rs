//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and record calls so tests can verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{Country, CountryId, NewCountry, NewPerson, Person, PersonId};
use crate::domain::ports::{CountryRepository, PersonRepository};
use crate::error::DomainError;

fn mock_failure() -> DomainError {
    DomainError::Internal("mock repository failure".to_string())
}

// ============================================================================
// Mock Country Repository
// ============================================================================

#[derive(Default)]
pub struct MockCountryRepository {
    countries: Arc<RwLock<Vec<Country>>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
    should_fail: bool,
}

impl MockCountryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every method returns an internal error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a country for testing
    pub fn with_country(self, country: Country) -> Self {
        self.countries.write().unwrap().push(country);
        self
    }

    /// Names of the port methods called so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(call);
        if self.should_fail {
            Err(mock_failure())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CountryRepository for MockCountryRepository {
    async fn find_all(&self) -> Result<Vec<Country>, DomainError> {
        self.record("find_all")?;
        Ok(self.countries.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: &CountryId) -> Result<Option<Country>, DomainError> {
        self.record("find_by_id")?;
        let countries = self.countries.read().unwrap();
        Ok(countries.iter().find(|c| c.id == *id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, DomainError> {
        self.record("find_by_name")?;
        let countries = self.countries.read().unwrap();
        Ok(countries.iter().find(|c| c.has_name(name)).cloned())
    }

    async fn create(&self, new_country: &NewCountry) -> Result<Country, DomainError> {
        self.record("create")?;
        let country = Country {
            id: CountryId::new(),
            name: new_country.name.clone(),
        };
        self.countries.write().unwrap().push(country.clone());
        Ok(country)
    }
}

// ============================================================================
// Mock Person Repository
// ============================================================================

#[derive(Default)]
pub struct MockPersonRepository {
    persons: Arc<RwLock<Vec<Person>>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
    should_fail: bool,
}

impl MockPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every method returns an internal error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a person for testing
    pub fn with_person(self, person: Person) -> Self {
        self.persons.write().unwrap().push(person);
        self
    }

    /// Names of the port methods called so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(call);
        if self.should_fail {
            Err(mock_failure())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PersonRepository for MockPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        self.record("find_all")?;
        Ok(self.persons.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, DomainError> {
        self.record("find_by_id")?;
        let persons = self.persons.read().unwrap();
        Ok(persons.iter().find(|p| p.id == *id).cloned())
    }

    async fn create(&self, new_person: &NewPerson) -> Result<Person, DomainError> {
        self.record("create")?;
        let person = Person::from_new(PersonId::new(), new_person.clone());
        self.persons.write().unwrap().push(person.clone());
        Ok(person)
    }

    async fn update(&self, person: &Person) -> Result<Person, DomainError> {
        self.record("update")?;
        let mut persons = self.persons.write().unwrap();
        let existing = persons
            .iter_mut()
            .find(|p| p.id == person.id)
            .ok_or_else(|| DomainError::NotFound(format!("Person {} not found", person.id)))?;
        *existing = person.clone();
        Ok(person.clone())
    }

    async fn delete(&self, id: &PersonId) -> Result<bool, DomainError> {
        self.record("delete")?;
        let mut persons = self.persons.write().unwrap();
        let before = persons.len();
        persons.retain(|p| p.id != *id);
        Ok(persons.len() < before)
    }
}
