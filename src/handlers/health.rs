use crate::error::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// The store lives in process memory and cannot become unreachable, so the
/// check always answers healthy; the record count doubles as a liveness
/// probe of the store lock.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let animals = state.store.count();

    tracing::debug!("Health check passed ({} animals)", animals);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            animals,
        }),
    )
}
