use crate::error::{ApiError, ErrorResponse};
use crate::models::Animal;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};
use serde_json::Value as JsonValue;

/// PUT /v1/animals/:id handler - Update an existing animal or create one
///
/// The path id is authoritative; an id carried in the body is discarded.
/// Updating an existing record answers 200, creating an absent one 201.
#[utoipa::path(
    put,
    path = routes::ANIMAL_ITEM,
    params(
        ("id" = i64, Path, description = "Integer id of the animal")
    ),
    request_body = Animal,
    responses(
        (status = 200, description = "Animal updated", body = Animal),
        (status = 201, description = "Animal created", body = Animal),
        (status = 400, description = "Invalid path id or body", body = ErrorResponse),
        (status = 500, description = "Unexpected store failure", body = ErrorResponse)
    ),
    tag = "animals"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<JsonValue>,
) -> Result<(StatusCode, Json<Animal>), ApiError> {
    let id: i64 = id_str
        .parse()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    let animal: Animal = serde_json::from_value(body)?;

    // The existence check decides the branch, so the chosen operation is
    // expected to succeed; anything else is a 500.
    if state.store.get(id).is_ok() {
        let updated = state
            .store
            .update(id, animal)
            .map_err(|e| ApiError::Internal(e.into()))?;

        tracing::info!("Updated animal with id: {}", id);
        Ok((StatusCode::OK, Json(updated)))
    } else {
        let created = state
            .store
            .upsert(id, animal)
            .map_err(|e| ApiError::Internal(e.into()))?;

        tracing::info!("Created animal with id: {} via upsert", id);
        Ok((StatusCode::CREATED, Json(created)))
    }
}
