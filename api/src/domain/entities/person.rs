//! Person domain entity
//!
//! A person belongs to at most one country and carries a handful of
//! optional profile fields.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::country::CountryId;

/// Unique identifier for a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub Uuid);

impl PersonId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PersonId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Average year length used for age calculation
const DAYS_PER_YEAR: f64 = 365.25;

/// A person in the directory
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    pub receive_news_letters: bool,
}

impl Person {
    /// Build a person from creation data and a freshly assigned id
    pub fn from_new(id: PersonId, new: NewPerson) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            date_of_birth: new.date_of_birth,
            gender: new.gender,
            country_id: new.country_id,
            address: new.address,
            receive_news_letters: new.receive_news_letters,
        }
    }

    /// Age in whole years on the given day, rounded to the nearest year.
    ///
    /// Returns `None` when the date of birth is unknown or in the future.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let dob = self.date_of_birth?;
        let days = (today - dob).num_days();
        if days < 0 {
            return None;
        }
        Some((days as f64 / DAYS_PER_YEAR).round() as u32)
    }
}

/// Validated data needed to create a person
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    pub receive_news_letters: bool,
}
