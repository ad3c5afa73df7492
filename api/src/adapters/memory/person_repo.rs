//! In-memory adapter for PersonRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{NewPerson, Person, PersonId};
use crate::domain::ports::PersonRepository;
use crate::error::DomainError;

/// List-backed implementation of PersonRepository
#[derive(Default)]
pub struct InMemoryPersonRepository {
    persons: RwLock<Vec<Person>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        Ok(self.persons.read().await.clone())
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, DomainError> {
        let persons = self.persons.read().await;
        Ok(persons.iter().find(|p| p.id == *id).cloned())
    }

    async fn create(&self, new_person: &NewPerson) -> Result<Person, DomainError> {
        let person = Person::from_new(PersonId::new(), new_person.clone());
        self.persons.write().await.push(person.clone());
        Ok(person)
    }

    async fn update(&self, person: &Person) -> Result<Person, DomainError> {
        let mut persons = self.persons.write().await;
        let existing = persons
            .iter_mut()
            .find(|p| p.id == person.id)
            .ok_or_else(|| DomainError::NotFound(format!("Person {} not found", person.id)))?;

        *existing = person.clone();
        Ok(existing.clone())
    }

    async fn delete(&self, id: &PersonId) -> Result<bool, DomainError> {
        let mut persons = self.persons.write().await;
        let before = persons.len();
        persons.retain(|p| p.id != *id);
        Ok(persons.len() < before)
    }
}
