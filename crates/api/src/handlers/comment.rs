//! Handlers for the `/comments` feed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use prootly_db::models::comment::{Comment, CreateComment};
use prootly_db::repositories::CommentRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/comments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    input.validate()?;
    let comment = CommentRepo::create(&state.pool, input);
    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /api/comments, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Comment>>> {
    Ok(Json(CommentRepo::list(&state.pool)))
}
