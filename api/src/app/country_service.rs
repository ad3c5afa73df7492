//! Country service
//!
//! Adds and looks up countries.

use std::sync::Arc;

use crate::app::dto::{CountryAddRequest, CountryResponse};
use crate::domain::entities::CountryId;
use crate::domain::ports::CountryRepository;
use crate::error::{AppError, DomainError};

/// Service for managing countries
pub struct CountryService<CR>
where
    CR: CountryRepository,
{
    countries: Arc<CR>,
}

impl<CR> CountryService<CR>
where
    CR: CountryRepository,
{
    pub fn new(countries: Arc<CR>) -> Self {
        Self { countries }
    }

    /// Add a new country
    ///
    /// Rejects a missing or blank name, and a name that already exists
    /// (ignoring case).
    pub async fn add_country(
        &self,
        request: &CountryAddRequest,
    ) -> Result<CountryResponse, AppError> {
        let new_country = request.to_new_country().map_err(|e| {
            tracing::warn!(error = %e, "Rejected country");
            e
        })?;

        if self
            .countries
            .find_by_name(&new_country.name)
            .await?
            .is_some()
        {
            tracing::warn!(name = %new_country.name, "Duplicate country name");
            return Err(AppError::Domain(DomainError::AlreadyExists(format!(
                "Country '{}' already exists",
                new_country.name
            ))));
        }

        let country = self.countries.create(&new_country).await?;
        tracing::info!(country_id = %country.id, name = %country.name, "Country added");

        Ok(country.into())
    }

    /// List every country
    pub async fn get_all_countries(&self) -> Result<Vec<CountryResponse>, AppError> {
        let countries = self.countries.find_all().await?;
        Ok(countries.into_iter().map(CountryResponse::from).collect())
    }

    /// Find a country by ID
    pub async fn get_country_by_id(
        &self,
        id: &CountryId,
    ) -> Result<Option<CountryResponse>, AppError> {
        Ok(self.countries.find_by_id(id).await?.map(CountryResponse::from))
    }
}
