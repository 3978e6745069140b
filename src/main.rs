mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler, update_handler,
};
use models::Animal;
use state::AppState;
use store::AnimalStore;

/// Seed the store with the fixed starter records before accepting traffic.
fn seed_store(store: &AnimalStore) -> anyhow::Result<()> {
    let seeds = [
        Animal {
            id: 1,
            name: "lion".to_string(),
            r#class: "mammal".to_string(),
            legs: 4,
        },
        Animal {
            id: 2,
            name: "eagle".to_string(),
            r#class: "bird".to_string(),
            legs: 2,
        },
        Animal {
            id: 3,
            name: "snake".to_string(),
            r#class: "reptile".to_string(),
            legs: 0,
        },
    ];

    for animal in seeds {
        store.create(animal)?;
    }
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::ANIMALS, get(list_handler).post(create_handler))
        .route(
            routes::ANIMAL_ITEM,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("animal-registry starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = AnimalStore::new();
    seed_store(&store)?;
    tracing::info!("Seeded {} animals", store.count());

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
