//! Route definitions for the AGROMET_RCI API

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{handlers, middleware::require_session, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Login (public), logout (protected)
        .nest("/auth", auth_routes(state.clone()))
        // Protected routes - session selection
        .nest("/session", session_routes(state.clone()))
        // Protected routes - catalog and regional series
        .nest("/regions", region_routes(state.clone()))
        // Protected routes - station series
        .nest("/stations", station_routes(state.clone()))
        // Protected routes - derived metrics
        .nest("/metrics", metrics_routes(state.clone()))
        // Protected routes - bulletins
        .merge(bulletin_routes(state))
}

/// Authentication routes
fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/logout",
            post(handlers::logout).route_layer(middleware::from_fn_with_state(
                state,
                require_session,
            )),
        )
        .route("/login", post(handlers::login))
}

/// Session routes (protected)
fn session_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_session))
        .route("/selection", put(handlers::update_selection))
        .route_layer(middleware::from_fn_with_state(state, require_session))
}

/// Region routes (protected)
fn region_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_regions))
        .route("/:region/stations", get(handlers::list_stations))
        .route("/:region/rainfall", get(handlers::get_decade_rainfall))
        .route_layer(middleware::from_fn_with_state(state, require_session))
}

/// Station routes (protected)
fn station_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/:station/weather", get(handlers::get_daily_weather))
        .route_layer(middleware::from_fn_with_state(state, require_session))
}

/// Metrics routes (protected)
fn metrics_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/satisfaction", get(handlers::get_satisfaction_band))
        .route("/rainfall-deviation", get(handlers::get_rainfall_deviation))
        .route_layer(middleware::from_fn_with_state(state, require_session))
}

/// Bulletin routes (protected)
fn bulletin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/bulletin", get(handlers::get_current_bulletin))
        .route("/bulletins/:view", get(handlers::get_bulletin))
        .route_layer(middleware::from_fn_with_state(state, require_session))
}
