//! Domain entities
//!
//! Pure domain models. Response shapes live in `app::dto`.

pub mod country;
pub mod person;

pub use country::{Country, CountryId, NewCountry};
pub use person::{Gender, NewPerson, Person, PersonId};
