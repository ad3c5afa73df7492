//! Directory API Server
//!
//! CRUD over countries and the persons living in them, kept in memory.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{seed_sample_data, InMemoryCountryRepository, InMemoryPersonRepository};
use app::{CountryService, PersonService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub country_service: Arc<CountryService<InMemoryCountryRepository>>,
    pub person_service: Arc<PersonService<InMemoryPersonRepository, InMemoryCountryRepository>>,
}

impl AppState {
    /// Wire services over fresh in-memory stores, seeding them if configured
    pub async fn new(config: &Config) -> Result<Self, error::DomainError> {
        let country_repo = Arc::new(InMemoryCountryRepository::new());
        let person_repo = Arc::new(InMemoryPersonRepository::new());

        if config.seed_data {
            seed_sample_data(country_repo.as_ref(), person_repo.as_ref()).await?;
        }

        Ok(Self {
            country_service: Arc::new(CountryService::new(country_repo.clone())),
            person_service: Arc::new(PersonService::new(person_repo, country_repo)),
        })
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/countries",
            get(handlers::list_countries).post(handlers::create_country),
        )
        .route("/countries/:id", get(handlers::get_country))
        .route(
            "/persons",
            get(handlers::list_persons).post(handlers::create_person),
        )
        .route(
            "/persons/:id",
            get(handlers::get_person)
                .put(handlers::update_person)
                .delete(handlers::delete_person),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,directory_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting directory API...");

    let config = Config::from_env();
    let state = AppState::new(&config).await?;
    let app = router(state);

    let addr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
