use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /v1/animals/:id handler - Remove an animal
#[utoipa::path(
    delete,
    path = routes::ANIMAL_ITEM,
    params(
        ("id" = i64, Path, description = "Integer id of the animal")
    ),
    responses(
        (status = 204, description = "Animal deleted"),
        (status = 400, description = "Path id is not an integer", body = ErrorResponse),
        (status = 404, description = "No animal with this id", body = ErrorResponse)
    ),
    tag = "animals"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: i64 = id_str
        .parse()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    state.store.delete(id)?;

    tracing::info!("Deleted animal with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::AnimalStore;
    use axum::{
        Router,
        body::Body,
        http::Request,
        routing::{delete, post},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    // POST and GET handlers needed to seed and verify over HTTP
    use crate::handlers::create::create_handler;
    use crate::handlers::get::get_handler;

    fn setup_test_app() -> Router {
        let config = Config {
            service_port: 8000,
            service_host: "0.0.0.0".to_string(),
        };

        let state = AppState {
            store: AnimalStore::new(),
            config: Arc::new(config),
        };

        Router::new()
            .route(crate::routes::ANIMALS, post(create_handler))
            .route(
                crate::routes::ANIMAL_ITEM,
                delete(delete_handler).get(get_handler),
            )
            .with_state(state)
    }

    #[tokio::test]
    async fn test_delete_endpoint_success() {
        let app = setup_test_app();

        let panda = serde_json::json!({
            "id": 101,
            "name": "panda",
            "class": "mammal",
            "legs": 4
        });

        let post_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/animals")
                    .header("content-type", "application/json")
                    .body(Body::from(panda.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(post_response.status(), StatusCode::CREATED);

        let delete_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/v1/animals/101")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(delete_response.status(), StatusCode::NO_CONTENT);

        let body = axum::body::to_bytes(delete_response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());

        // The record is gone
        let get_response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/v1/animals/101")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(get_response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_endpoint_not_found() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/v1/animals/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("not found"));
    }

    #[tokio::test]
    async fn test_delete_endpoint_invalid_id() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/v1/animals/not-a-number")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
