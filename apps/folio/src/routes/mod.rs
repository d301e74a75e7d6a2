pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(pages::handle_main_page))
        .route("/portfolio", get(pages::handle_portfolio_page))
        .route("/api/v1/data", get(pages::handle_get_data))
        .route("/api/v1/pages/:page/replay", post(pages::handle_replay))
        .nest_service("/assets", assets)
        .with_state(state)
}
