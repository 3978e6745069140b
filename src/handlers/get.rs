use crate::error::{ApiError, ErrorResponse};
use crate::models::Animal;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// GET /v1/animals/:id handler - Retrieve a single animal
#[utoipa::path(
    get,
    path = routes::ANIMAL_ITEM,
    params(
        ("id" = i64, Path, description = "Integer id of the animal")
    ),
    responses(
        (status = 200, description = "Animal found", body = Animal),
        (status = 400, description = "Path id is not an integer", body = ErrorResponse),
        (status = 404, description = "No animal with this id", body = ErrorResponse)
    ),
    tag = "animals"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Animal>), ApiError> {
    // Parse by hand so the 400 carries our error shape
    let id: i64 = id_str
        .parse()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    let animal = state.store.get(id)?;

    tracing::info!("Retrieved animal with id: {}", id);
    Ok((StatusCode::OK, Json(animal)))
}
