//! In-memory adapter for CountryRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Country, CountryId, NewCountry};
use crate::domain::ports::CountryRepository;
use crate::error::DomainError;

/// List-backed implementation of CountryRepository
#[derive(Default)]
pub struct InMemoryCountryRepository {
    countries: RwLock<Vec<Country>>,
}

impl InMemoryCountryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn find_all(&self) -> Result<Vec<Country>, DomainError> {
        Ok(self.countries.read().await.clone())
    }

    async fn find_by_id(&self, id: &CountryId) -> Result<Option<Country>, DomainError> {
        let countries = self.countries.read().await;
        Ok(countries.iter().find(|c| c.id == *id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, DomainError> {
        let countries = self.countries.read().await;
        Ok(countries.iter().find(|c| c.has_name(name)).cloned())
    }

    async fn create(&self, new_country: &NewCountry) -> Result<Country, DomainError> {
        let mut countries = self.countries.write().await;

        // Re-check under the write lock so concurrent requests can't both insert
        if countries.iter().any(|c| c.has_name(&new_country.name)) {
            return Err(DomainError::AlreadyExists(format!(
                "Country '{}' already exists",
                new_country.name
            )));
        }

        let country = Country {
            id: CountryId::new(),
            name: new_country.name.clone(),
        };
        countries.push(country.clone());

        Ok(country)
    }
}
