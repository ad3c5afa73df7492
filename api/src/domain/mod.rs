//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing countries and persons
//! - `ports`: Trait definitions for storage

pub mod entities;
pub mod ports;
