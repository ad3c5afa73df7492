//! Data transfer objects
//!
//! Request shapes accepted by the services and the response shapes they
//! project entities into. Handlers serialize these directly.

pub mod country;
pub mod person;

pub use country::{CountryAddRequest, CountryResponse};
pub use person::{PersonAddRequest, PersonResponse, PersonUpdateRequest};
