//! Handlers for the `/clients` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use prootly_db::models::client::{Client, CreateClient, UpdateClient};
use prootly_db::repositories::ClientRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::not_found;
use crate::query::SearchParams;
use crate::state::AppState;

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    input.validate()?;
    let client = ClientRepo::create(&state.pool, input);
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(ClientRepo::list(&state.pool)))
}

/// GET /api/clients/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Client>>> {
    let query = params.required()?;
    Ok(Json(ClientRepo::search(&state.pool, query)))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, &id).ok_or_else(|| not_found::<Client>(&id))?;
    Ok(Json(client))
}

/// PUT /api/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    input.validate()?;
    let client =
        ClientRepo::update(&state.pool, &id, input).ok_or_else(|| not_found::<Client>(&id))?;
    Ok(Json(client))
}

/// DELETE /api/clients/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if ClientRepo::delete(&state.pool, &id) {
        tracing::info!(client_id = %id, "Client deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<Client>(&id))
    }
}
