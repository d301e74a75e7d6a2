mod config;
mod dom;
mod errors;
mod interact;
mod models;
mod pipeline;
mod render;
mod reveal;
mod routes;
mod skeleton;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::pipeline::{source_for, Pipeline};
use crate::render::RenderOptions;
use crate::reveal::RevealOptions;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    let source = source_for(&config.data_url);
    info!("Content document: {}", source.location());

    let render = RenderOptions {
        thumbnail_fallback: config.thumbnail_fallback.clone(),
    };
    let reveal = config.animations.then(RevealOptions::default);
    info!("Reveal animations: {}", reveal.is_some());

    let pipeline = Pipeline::new(source, render, reveal);
    let state = AppState::new(config.clone(), pipeline);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
