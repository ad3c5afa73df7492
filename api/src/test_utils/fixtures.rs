//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture creates a valid value that tests can customize with
//! struct update syntax.

use chrono::NaiveDate;

use crate::app::dto::{CountryAddRequest, PersonAddRequest};
use crate::domain::entities::{Country, CountryId, Gender, Person, PersonId};

/// The date service tests compute ages against
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Create a test country with a fresh id
pub fn test_country(name: &str) -> Country {
    Country {
        id: CountryId::new(),
        name: name.to_string(),
    }
}

/// Create a test person with default values
pub fn test_person(name: &str, country_id: Option<CountryId>) -> Person {
    Person {
        id: PersonId::new(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        date_of_birth: NaiveDate::from_ymd_opt(1993, 4, 12),
        gender: Some(Gender::Other),
        country_id,
        address: Some("1 Test Lane".to_string()),
        receive_news_letters: false,
    }
}

/// Request for a country with the given name
pub fn country_add_request(name: &str) -> CountryAddRequest {
    CountryAddRequest::named(name)
}

/// Request with only the required person fields set
pub fn person_add_request(name: &str, email: &str) -> PersonAddRequest {
    PersonAddRequest {
        person_name: Some(name.to_string()),
        email: Some(email.to_string()),
        ..Default::default()
    }
}
