//! Person service
//!
//! Handles person CRUD plus the search and sort used by listings.
//! Every person leaving the service is projected into a `PersonResponse`
//! with its country name and age resolved.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::app::dto::{PersonAddRequest, PersonResponse, PersonUpdateRequest};
use crate::app::search::{PersonSearchField, PersonSortField, SortOrder};
use crate::domain::entities::{CountryId, Person, PersonId};
use crate::domain::ports::{CountryRepository, PersonRepository};
use crate::error::{AppError, DomainError};

/// Rendering used when searching by date of birth, e.g. `05 March 1990`
const DATE_SEARCH_FORMAT: &str = "%d %B %Y";

/// Service for managing persons
pub struct PersonService<PR, CR>
where
    PR: PersonRepository,
    CR: CountryRepository,
{
    persons: Arc<PR>,
    countries: Arc<CR>,
    fixed_today: Option<NaiveDate>,
}

impl<PR, CR> PersonService<PR, CR>
where
    PR: PersonRepository,
    CR: CountryRepository,
{
    pub fn new(persons: Arc<PR>, countries: Arc<CR>) -> Self {
        Self {
            persons,
            countries,
            fixed_today: None,
        }
    }

    /// Pin the date ages are computed against
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Add a new person
    pub async fn add_person(&self, request: &PersonAddRequest) -> Result<PersonResponse, AppError> {
        let new_person = request.to_new_person().map_err(|e| {
            tracing::warn!(error = %e, "Rejected person");
            e
        })?;
        self.ensure_country_exists(new_person.country_id).await?;

        let person = self.persons.create(&new_person).await?;
        tracing::info!(person_id = %person.id, "Person added");

        self.project(person).await
    }

    /// List every person
    pub async fn get_all_persons(&self) -> Result<Vec<PersonResponse>, AppError> {
        let persons = self.persons.find_all().await?;
        let country_names: HashMap<CountryId, String> = self
            .countries
            .find_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let today = self.today();
        Ok(persons
            .into_iter()
            .map(|p| {
                let country = p.country_id.and_then(|id| country_names.get(&id).cloned());
                PersonResponse::from_person(p, country, today)
            })
            .collect())
    }

    /// Find a person by ID
    pub async fn get_person_by_id(
        &self,
        id: &PersonId,
    ) -> Result<Option<PersonResponse>, AppError> {
        match self.persons.find_by_id(id).await? {
            Some(person) => Ok(Some(self.project(person).await?)),
            None => Ok(None),
        }
    }

    /// List persons whose `search_by` field matches `search_string`.
    ///
    /// Without a field or with a blank search string every person is returned.
    pub async fn get_filtered_persons(
        &self,
        search_by: Option<PersonSearchField>,
        search_string: Option<&str>,
    ) -> Result<Vec<PersonResponse>, AppError> {
        let all = self.get_all_persons().await?;

        let needle = search_string.map(str::trim).filter(|s| !s.is_empty());
        let (Some(field), Some(needle)) = (search_by, needle) else {
            return Ok(all);
        };

        let needle = needle.to_lowercase();
        let matched: Vec<PersonResponse> = all
            .into_iter()
            .filter(|p| matches_search(p, field, &needle))
            .collect();

        tracing::debug!(?field, needle = %needle, matched = matched.len(), "Filtered persons");
        Ok(matched)
    }

    /// Sort persons by one field. The sort is stable.
    pub fn get_sorted_persons(
        &self,
        persons: Vec<PersonResponse>,
        sort_by: PersonSortField,
        order: SortOrder,
    ) -> Vec<PersonResponse> {
        let mut sorted = persons;
        sorted.sort_by(|a, b| {
            let ordering = compare_by(sort_by, a, b);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        sorted
    }

    /// Replace every field of an existing person
    pub async fn update_person(
        &self,
        request: &PersonUpdateRequest,
    ) -> Result<PersonResponse, AppError> {
        let person = request.to_person().map_err(|e| {
            tracing::warn!(person_id = %request.person_id, error = %e, "Rejected person update");
            e
        })?;

        if self.persons.find_by_id(&person.id).await?.is_none() {
            return Err(AppError::Domain(DomainError::NotFound(format!(
                "Person {} not found",
                person.id
            ))));
        }
        self.ensure_country_exists(person.country_id).await?;

        let updated = self.persons.update(&person).await?;
        tracing::info!(person_id = %updated.id, "Person updated");

        self.project(updated).await
    }

    /// Delete a person, returning whether one was removed
    pub async fn delete_person(&self, id: &PersonId) -> Result<bool, AppError> {
        let deleted = self.persons.delete(id).await?;
        if deleted {
            tracing::info!(person_id = %id, "Person deleted");
        } else {
            tracing::debug!(person_id = %id, "Nothing to delete");
        }
        Ok(deleted)
    }

    async fn ensure_country_exists(&self, country_id: Option<CountryId>) -> Result<(), AppError> {
        let Some(id) = country_id else {
            return Ok(());
        };
        if self.countries.find_by_id(&id).await?.is_none() {
            return Err(AppError::validation(format!("Country {} does not exist", id)));
        }
        Ok(())
    }

    async fn project(&self, person: Person) -> Result<PersonResponse, AppError> {
        let country = match person.country_id {
            Some(id) => self.countries.find_by_id(&id).await?.map(|c| c.name),
            None => None,
        };
        Ok(PersonResponse::from_person(person, country, self.today()))
    }
}

/// `needle` is already lowercased
fn matches_search(person: &PersonResponse, field: PersonSearchField, needle: &str) -> bool {
    let contains = |value: Option<&str>| {
        value
            .map(|v| v.to_lowercase().contains(needle))
            .unwrap_or(false)
    };

    match field {
        PersonSearchField::PersonName => contains(Some(person.person_name.as_str())),
        PersonSearchField::Email => contains(Some(person.email.as_str())),
        PersonSearchField::Address => contains(person.address.as_deref()),
        PersonSearchField::Country => contains(person.country.as_deref()),
        PersonSearchField::DateOfBirth => contains(
            person
                .date_of_birth
                .map(|d| d.format(DATE_SEARCH_FORMAT).to_string())
                .as_deref(),
        ),
        PersonSearchField::Gender => person
            .gender
            .map(|g| g.to_string().to_lowercase() == needle)
            .unwrap_or(false),
    }
}

fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.map(str::to_lowercase).cmp(&b.map(str::to_lowercase))
}

fn compare_by(field: PersonSortField, a: &PersonResponse, b: &PersonResponse) -> Ordering {
    match field {
        PersonSortField::PersonName => compare_text(
            Some(a.person_name.as_str()),
            Some(b.person_name.as_str()),
        ),
        PersonSortField::Email => compare_text(Some(a.email.as_str()), Some(b.email.as_str())),
        PersonSortField::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
        PersonSortField::Age => a.age.cmp(&b.age),
        PersonSortField::Gender => compare_text(
            a.gender.map(|g| g.to_string()).as_deref(),
            b.gender.map(|g| g.to_string()).as_deref(),
        ),
        PersonSortField::Country => compare_text(a.country.as_deref(), b.country.as_deref()),
        PersonSortField::Address => compare_text(a.address.as_deref(), b.address.as_deref()),
        PersonSortField::ReceiveNewsLetters => a.receive_news_letters.cmp(&b.receive_news_letters),
    }
}
