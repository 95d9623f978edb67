//! HTTP handlers for login, logout and the dashboard selection

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use shared::{BulletinKind, Credentials, Session};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentSession;
use crate::services::SelectionUpdate;
use crate::AppState;

/// Login response; `token` goes in the `Authorization: Bearer` header
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub username: String,
    pub region: String,
    pub station: String,
    pub view: BulletinKind,
}

impl From<Session> for LoginResponse {
    fn from(session: Session) -> Self {
        Self {
            token: session.id,
            username: session.username,
            region: session.selection.region,
            station: session.selection.station,
            view: session.selection.view,
        }
    }
}

/// Open a dashboard session
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> AppResult<Json<LoginResponse>> {
    let session = state
        .sessions
        .login(&credentials, state.generator.catalog())
        .await?;
    Ok(Json(session.into()))
}

/// Close the current session
pub async fn logout(
    State(state): State<AppState>,
    current: CurrentSession,
) -> AppResult<StatusCode> {
    state.sessions.logout(current.0.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the current session and its selection
pub async fn get_session(current: CurrentSession) -> Json<Session> {
    Json(current.0)
}

/// Change region, station or view of the current session
pub async fn update_selection(
    State(state): State<AppState>,
    current: CurrentSession,
    Json(update): Json<SelectionUpdate>,
) -> AppResult<Json<Session>> {
    let session = state
        .sessions
        .update_selection(current.0.id, state.generator.catalog(), update)
        .await?;
    Ok(Json(session))
}
