use crate::error::{ApiError, ErrorResponse};
use crate::models::Animal;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /v1/animals handler - Retrieve all animals
///
/// An empty store is reported as 404, not as an empty array: callers
/// distinguish "no animals exist" from "one animal exists".
#[utoipa::path(
    get,
    path = routes::ANIMALS,
    responses(
        (status = 200, description = "All animals, ordered by id", body = [Animal]),
        (status = 404, description = "No animals in the store", body = ErrorResponse)
    ),
    tag = "animals"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Animal>>), ApiError> {
    let animals = state.store.list()?;

    tracing::info!("Listed {} animals", animals.len());
    Ok((StatusCode::OK, Json(animals)))
}
