//! Person handlers
//!
//! Endpoints for person CRUD, including the searchable and sortable listing.

use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::app::{
    PersonAddRequest, PersonResponse, PersonSearchField, PersonSortField, PersonUpdateRequest,
    SortOrder,
};
use crate::domain::entities::PersonId;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing persons
#[derive(Debug, Default, Deserialize)]
pub struct ListPersonsQuery {
    pub search_by: Option<String>,
    pub search_string: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Parse an optional option value; blank counts as absent
fn parse_option<T>(value: Option<&str>) -> Result<Option<T>, AppError>
where
    T: FromStr<Err = String>,
{
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => raw.parse().map(Some).map_err(AppError::BadRequest),
        None => Ok(None),
    }
}

/// GET /persons
///
/// List persons, optionally filtered by `search_by`/`search_string` and
/// sorted by `sort_by`/`sort_order` (default: name, ascending).
pub async fn list_persons(
    State(state): State<AppState>,
    Query(query): Query<ListPersonsQuery>,
) -> Result<Json<Vec<PersonResponse>>, AppError> {
    let search_by: Option<PersonSearchField> = parse_option(query.search_by.as_deref())?;
    let sort_by: PersonSortField = parse_option(query.sort_by.as_deref())?.unwrap_or_default();
    let sort_order: SortOrder = parse_option(query.sort_order.as_deref())?.unwrap_or_default();

    let filtered = state
        .person_service
        .get_filtered_persons(search_by, query.search_string.as_deref())
        .await?;

    Ok(Json(state.person_service.get_sorted_persons(
        filtered, sort_by, sort_order,
    )))
}

/// GET /persons/:id
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PersonResponse>, AppError> {
    let person = state
        .person_service
        .get_person_by_id(&PersonId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Person {} not found", id)))?;

    Ok(Json(person))
}

/// POST /persons
pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<PersonAddRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), AppError> {
    let person = state.person_service.add_person(&request).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// PUT /persons/:id
///
/// Replace every field of a person. The id in the path is authoritative.
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(details): Json<PersonAddRequest>,
) -> Result<Json<PersonResponse>, AppError> {
    let request = PersonUpdateRequest {
        person_id: PersonId(id),
        details,
    };
    let person = state.person_service.update_person(&request).await?;
    Ok(Json(person))
}

/// DELETE /persons/:id
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.person_service.delete_person(&PersonId(id)).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Person {} not found", id)))
    }
}
