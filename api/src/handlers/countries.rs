//! Country handlers
//!
//! Endpoints for listing and adding countries.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::app::{CountryAddRequest, CountryResponse};
use crate::domain::entities::CountryId;
use crate::error::AppError;
use crate::AppState;

/// GET /countries
///
/// List all countries.
pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountryResponse>>, AppError> {
    let countries = state.country_service.get_all_countries().await?;
    Ok(Json(countries))
}

/// GET /countries/:id
pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CountryResponse>, AppError> {
    let country = state
        .country_service
        .get_country_by_id(&CountryId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Country {} not found", id)))?;

    Ok(Json(country))
}

/// POST /countries
///
/// Add a country. Names must be unique, ignoring case.
pub async fn create_country(
    State(state): State<AppState>,
    Json(request): Json<CountryAddRequest>,
) -> Result<(StatusCode, Json<CountryResponse>), AppError> {
    let country = state.country_service.add_country(&request).await?;
    Ok((StatusCode::CREATED, Json(country)))
}
