//! AGROMET_RCI bulletin server
//!
//! HTTP API over the shared climate generator and bulletin builders for
//! the N'ZI and GOH agrometeorological regions.

use axum::{routing::get, Router};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;
use services::SessionStore;
use shared::{ClimateDataGenerator, StationCatalog};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<ClimateDataGenerator>,
    pub sessions: SessionStore,
}

impl AppState {
    /// State with a generator seeded from the configuration
    pub fn new(config: Config) -> Self {
        let generator = ClimateDataGenerator::new(StationCatalog::default(), config.generator.seed);
        Self::with_generator(config, generator)
    }

    pub fn with_generator(config: Config, generator: ClimateDataGenerator) -> Self {
        let idle_timeout = Duration::from_secs(config.session.idle_timeout_secs);
        Self {
            config: Arc::new(config),
            generator: Arc::new(generator),
            sessions: SessionStore::with_idle_timeout(idle_timeout),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes(state.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AGROMET_RCI Bulletin Platform API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
