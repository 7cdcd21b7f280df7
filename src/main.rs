use axum::extract::DefaultBodyLimit;
use iqtest_backend::{
    config::{get_config, init_config},
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    if config.gemini_api_key.is_empty() {
        tracing::warn!(
            "GEMINI_API_KEY is not set; question generation will fail until it is configured"
        );
    }

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    info!("Serving uploads from: {}", config.upload_dir);

    let app_state = AppState::from_config();

    let app = iqtest_backend::app(app_state)
        .nest_service(
            "/uploads",
            tower_http::services::ServeDir::new(&config.upload_dir),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(5 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
