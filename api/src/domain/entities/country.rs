//! Country domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryId(pub Uuid);

impl CountryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CountryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CountryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A country persons can live in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
}

impl Country {
    /// Case-insensitive name comparison used for duplicate checks
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

/// Validated data needed to create a country
#[derive(Debug, Clone)]
pub struct NewCountry {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_ids_are_unique() {
        assert_ne!(CountryId::new(), CountryId::new());
    }

    #[test]
    fn country_id_display() {
        let id = CountryId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn has_name_ignores_case_and_padding() {
        let country = Country {
            id: CountryId::new(),
            name: "India".to_string(),
        };

        assert!(country.has_name("india"));
        assert!(country.has_name("  INDIA "));
        assert!(!country.has_name("Indonesia"));
    }

    #[test]
    fn has_name_folds_non_ascii_case() {
        let country = Country {
            id: CountryId::new(),
            name: "Österreich".to_string(),
        };

        assert!(country.has_name("österreich"));
        assert!(country.has_name("ÖSTERREICH"));
        assert!(!country.has_name("Osterreich"));
    }
}
