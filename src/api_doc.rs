use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::Animal;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "animal-registry API",
        version = "1.0.0",
        description = "A minimal CRUD service for animal records held in memory"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Animal,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "animals", description = "Animal record operations")
    )
)]
pub struct ApiDoc;
