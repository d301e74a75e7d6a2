use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::pipeline::{LoadState, Pipeline};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Builds one page view per request.
    pub pipeline: Pipeline,
    /// Outcome of the most recent page load, `Unloaded` until the first view.
    pub last_load: Arc<RwLock<LoadState>>,
}

impl AppState {
    pub fn new(config: Config, pipeline: Pipeline) -> Self {
        Self {
            config,
            pipeline,
            last_load: Arc::new(RwLock::new(LoadState::Unloaded)),
        }
    }

    pub async fn record_load(&self, state: LoadState) {
        *self.last_load.write().await = state;
    }
}
