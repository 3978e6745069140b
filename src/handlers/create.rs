use crate::error::{ApiError, ErrorResponse};
use crate::models::Animal;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value as JsonValue;

/// POST /v1/animals handler - Create a new animal
///
/// The id must be present and non-zero in the payload. Duplicate ids are
/// denied with 409.
#[utoipa::path(
    post,
    path = routes::ANIMALS,
    request_body = Animal,
    responses(
        (status = 201, description = "Animal created", body = Animal),
        (status = 400, description = "Invalid body or missing id", body = ErrorResponse),
        (status = 409, description = "An animal with this id already exists", body = ErrorResponse)
    ),
    tag = "animals"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<(StatusCode, Json<Animal>), ApiError> {
    // Decode through from_value so mis-typed bodies surface as our 400
    let animal: Animal = serde_json::from_value(body)?;

    if animal.id == 0 {
        return Err(ApiError::MissingId);
    }

    // Deny duplicates up front; the store's own create-time check must agree.
    if state.store.get(animal.id).is_ok() {
        return Err(ApiError::AlreadyExists(animal.id));
    }

    let created = state.store.create(animal)?;

    tracing::info!("Created animal with id: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}
