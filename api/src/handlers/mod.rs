//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod countries;
pub mod persons;

pub use countries::{create_country, get_country, list_countries};
pub use persons::{create_person, delete_person, get_person, list_persons, update_person};
