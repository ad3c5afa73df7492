use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CountryId, Gender, NewPerson, Person, PersonId};
use crate::error::AppError;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

/// Whether the text looks like an e-mail address
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Request body for adding a person
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonAddRequest {
    pub person_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    #[serde(default)]
    pub receive_news_letters: bool,
}

impl PersonAddRequest {
    /// Check field-level rules and build the domain value.
    ///
    /// Whether `country_id` points at a real country is left to the service.
    pub fn to_new_person(&self) -> Result<NewPerson, AppError> {
        let name = required(&self.person_name)
            .ok_or_else(|| AppError::validation("Person name can't be blank"))?;
        let email =
            required(&self.email).ok_or_else(|| AppError::validation("Email can't be blank"))?;

        if !is_valid_email(email) {
            return Err(AppError::validation(format!(
                "Email '{}' is not a valid email address",
                email
            )));
        }

        Ok(NewPerson {
            name: name.to_string(),
            email: email.to_string(),
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            country_id: self.country_id,
            address: required(&self.address).map(str::to_string),
            receive_news_letters: self.receive_news_letters,
        })
    }
}

/// Trimmed, non-empty text or nothing
fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// An edit to an existing person: the target id plus the full replacement fields
#[derive(Debug, Clone)]
pub struct PersonUpdateRequest {
    pub person_id: PersonId,
    pub details: PersonAddRequest,
}

impl PersonUpdateRequest {
    /// Validate and build the replacement entity
    pub fn to_person(&self) -> Result<Person, AppError> {
        Ok(Person::from_new(self.person_id, self.details.to_new_person()?))
    }
}

/// Person as returned to callers, with country name and age resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonResponse {
    pub person_id: PersonId,
    pub person_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub receive_news_letters: bool,
    pub age: Option<u32>,
}

impl PersonResponse {
    pub fn from_person(person: Person, country: Option<String>, today: NaiveDate) -> Self {
        let age = person.age_on(today);
        Self {
            person_id: person.id,
            person_name: person.name,
            email: person.email,
            date_of_birth: person.date_of_birth,
            gender: person.gender,
            country_id: person.country_id,
            country,
            address: person.address,
            receive_news_letters: person.receive_news_letters,
            age,
        }
    }

    /// Pre-fill an edit from the current values.
    ///
    /// HTTP updates arrive as a full body, so the router never needs this.
    #[allow(dead_code)]
    pub fn to_update_request(&self) -> PersonUpdateRequest {
        PersonUpdateRequest {
            person_id: self.person_id,
            details: PersonAddRequest {
                person_name: Some(self.person_name.clone()),
                email: Some(self.email.clone()),
                date_of_birth: self.date_of_birth,
                gender: self.gender,
                country_id: self.country_id,
                address: self.address.clone(),
                receive_news_letters: self.receive_news_letters,
            },
        }
    }
}
