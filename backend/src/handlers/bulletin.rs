//! HTTP handlers for bulletins

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use shared::{BulletinKind, Selection};

use crate::error::AppResult;
use crate::middleware::CurrentSession;
use crate::services::DashboardService;
use crate::AppState;

/// Output format of a bulletin
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BulletinFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Default, Deserialize)]
pub struct BulletinQuery {
    #[serde(default)]
    pub format: BulletinFormat,
    pub days: Option<u32>,
}

/// Render the view currently selected in the session menu
pub async fn get_current_bulletin(
    State(state): State<AppState>,
    current: CurrentSession,
    Query(query): Query<BulletinQuery>,
) -> AppResult<Response> {
    render(&state, &current.0.selection, &query)
}

/// Render an explicit view for the session's region and station
pub async fn get_bulletin(
    State(state): State<AppState>,
    current: CurrentSession,
    Path(view): Path<String>,
    Query(query): Query<BulletinQuery>,
) -> AppResult<Response> {
    let selection = Selection {
        view: view.parse::<BulletinKind>()?,
        ..current.0.selection
    };
    render(&state, &selection, &query)
}

fn render(state: &AppState, selection: &Selection, query: &BulletinQuery) -> AppResult<Response> {
    let service = DashboardService::new(
        state.generator.clone(),
        state.config.generator.default_days,
    );

    let response = match query.format {
        BulletinFormat::Json => Json(service.bulletin(selection, query.days)?).into_response(),
        BulletinFormat::Text => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            service.bulletin_text(selection, query.days)?,
        )
            .into_response(),
    };
    Ok(response)
}
