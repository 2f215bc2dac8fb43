//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::services::ServeDir;

use crate::board::BoardSnapshot;
use crate::domain::TimeOfDay;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory (stylesheet
/// and the animation script). Static assets are served independently of
/// the board endpoints: a missing directory yields 404s for assets but
/// leaves the board working.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/board", get(board_fragment))
        .route("/api/board", get(api_board))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Resolve the snapshot for a request: the live snapshot, or a preview
/// when `?at=HH:MM` is given.
async fn resolve_snapshot(state: &AppState, query: &BoardQuery) -> Result<BoardSnapshot, AppError> {
    match &query.at {
        None => Ok(state.board.snapshot().await),
        Some(at) => {
            let at = TimeOfDay::parse_hhmm(at).map_err(|e| AppError::BadRequest {
                message: format!("invalid 'at' time: {e}"),
            })?;
            Ok(state.board.preview_at(at))
        }
    }
}

/// The marketing page, with the current board inlined.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let snapshot = state.board.snapshot().await;
    let template = IndexTemplate {
        board: BoardView::from_snapshot(&snapshot),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("template error: {e}"),
    })?;
    Ok(Html(html).into_response())
}

/// Live board fragment, polled by the page.
async fn board_fragment(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Response, AppError> {
    let snapshot = resolve_snapshot(&state, &query).await?;
    let template = BoardTemplate {
        board: BoardView::from_snapshot(&snapshot),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("template error: {e}"),
    })?;
    Ok(Html(html).into_response())
}

/// JSON board snapshot.
async fn api_board(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<BoardResponse>, AppError> {
    let snapshot = resolve_snapshot(&state, &query).await?;
    Ok(Json(BoardResponse::from_snapshot(&snapshot)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
