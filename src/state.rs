use crate::config::Config;
use crate::store::AnimalStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: AnimalStore,
    pub config: Arc<Config>,
}
