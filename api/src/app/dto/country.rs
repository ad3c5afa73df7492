use serde::{Deserialize, Serialize};

use crate::domain::entities::{Country, CountryId, NewCountry};
use crate::error::AppError;

/// Request body for adding a country
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryAddRequest {
    pub country_name: Option<String>,
}

impl CountryAddRequest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            country_name: Some(name.into()),
        }
    }

    /// Check required fields and build the domain value
    pub fn to_new_country(&self) -> Result<NewCountry, AppError> {
        let name = self
            .country_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::validation("Country name can't be blank"))?;

        Ok(NewCountry {
            name: name.to_string(),
        })
    }
}

/// Country as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResponse {
    pub country_id: CountryId,
    pub country_name: String,
}

impl From<Country> for CountryResponse {
    fn from(country: Country) -> Self {
        Self {
            country_id: country.id,
            country_name: country.name,
        }
    }
}
