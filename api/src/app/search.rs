//! Search and sort options for person listings
//!
//! Field names parse case-insensitively and accept both `PersonName` and
//! `person_name` spellings.

use std::str::FromStr;

/// Normalize a field name: lowercase, no underscores or dashes
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Field a person listing can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonSearchField {
    PersonName,
    Email,
    DateOfBirth,
    Gender,
    Country,
    Address,
}

impl FromStr for PersonSearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "personname" | "name" => Ok(PersonSearchField::PersonName),
            "email" => Ok(PersonSearchField::Email),
            "dateofbirth" => Ok(PersonSearchField::DateOfBirth),
            "gender" => Ok(PersonSearchField::Gender),
            "country" | "countryid" => Ok(PersonSearchField::Country),
            "address" => Ok(PersonSearchField::Address),
            _ => Err(format!("Unknown search field: {}", s)),
        }
    }
}

/// Field a person listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonSortField {
    #[default]
    PersonName,
    Email,
    DateOfBirth,
    Age,
    Gender,
    Country,
    Address,
    ReceiveNewsLetters,
}

impl FromStr for PersonSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "personname" | "name" => Ok(PersonSortField::PersonName),
            "email" => Ok(PersonSortField::Email),
            "dateofbirth" => Ok(PersonSortField::DateOfBirth),
            "age" => Ok(PersonSortField::Age),
            "gender" => Ok(PersonSortField::Gender),
            "country" | "countryid" => Ok(PersonSortField::Country),
            "address" => Ok(PersonSortField::Address),
            "receivenewsletters" => Ok(PersonSortField::ReceiveNewsLetters),
            _ => Err(format!("Unknown sort field: {}", s)),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}
