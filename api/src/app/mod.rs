//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services validate requests, drive the repository ports and project
//! entities into response DTOs.

pub mod country_service;
pub mod dto;
pub mod person_service;
pub mod search;

pub use country_service::CountryService;
pub use dto::{
    CountryAddRequest, CountryResponse, PersonAddRequest, PersonResponse, PersonUpdateRequest,
};
pub use person_service::PersonService;
pub use search::{PersonSearchField, PersonSortField, SortOrder};
