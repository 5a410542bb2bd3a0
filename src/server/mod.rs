pub mod handlers;
mod types;

pub use types::*;

use crate::{
    Result,
    chart::ChartRenderer,
    chat::{ChatPipeline, ChatSession},
    config::Config,
    market,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/transcript", get(handlers::transcript))
        .route("/suggestions", get(handlers::suggestions))
        .route("/stocks", get(handlers::stocks))
        .route("/watchlist", get(handlers::watchlist))
        .route("/chart.svg", get(handlers::chart_svg))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let pipeline = ChatPipeline::new(config.llm.clone(), config.chat.clone());

    // Create application state
    let app_state = handlers::AppState {
        session: Arc::new(ChatSession::new(pipeline)),
        renderer: Arc::new(ChartRenderer::default()),
        history: Arc::new(market::mock_historical_data()),
    };

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
