//! signpose server entry point.
//!
//! Configuration comes from the environment:
//!
//! - `SIGNPOSE_LEXICON` — lexicon directory (default `assets/lexicon`)
//! - `SIGNPOSE_OUTPUT` — output directory (default `static`)
//! - `SIGNPOSE_ADDR` — bind address (default `0.0.0.0:8080`)
//! - `SIGNPOSE_RENDERER` — renderer command; unset disables video
//!   rendering and conversions stop at the pose file

use signpose_server::render::RenderConfig;
use signpose_server::state::{AppState, ServerConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let lexicon_dir =
        std::env::var("SIGNPOSE_LEXICON").unwrap_or_else(|_| "assets/lexicon".to_string());
    let output_dir = std::env::var("SIGNPOSE_OUTPUT").unwrap_or_else(|_| "static".to_string());
    let addr = std::env::var("SIGNPOSE_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let render = std::env::var("SIGNPOSE_RENDERER").ok().map(|renderer| RenderConfig {
        renderer,
        ..RenderConfig::default()
    });

    let mut config = ServerConfig::new(lexicon_dir, output_dir);
    config.render = render;

    tracing::info!(lexicon = %config.lexicon_dir.display(), "building lexicon index");
    let state = AppState::new(config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to build application state");
        std::process::exit(1);
    });

    let app = signpose_server::build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!(%addr, "signpose server listening");

    axum::serve(listener, app).await.expect("server error");
}
