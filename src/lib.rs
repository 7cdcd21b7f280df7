pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use reqwest::Client;

use crate::services::gateway::{GeminiGateway, TextGateway};
use crate::services::storage::MemStorage;
use crate::services::test_service::TestService;

#[derive(Clone)]
pub struct AppState {
    pub storage: MemStorage,
    pub test_service: TestService,
}

impl AppState {
    /// Build the state around an explicitly injected gateway capability.
    pub fn new(gateway: Arc<dyn TextGateway>) -> Self {
        Self {
            storage: MemStorage::new(),
            test_service: TestService::new(gateway),
        }
    }

    /// Production state: Gemini gateway wired from loaded configuration.
    pub fn from_config() -> Self {
        let config = crate::config::get_config();
        let timeout = Duration::from_secs(config.gateway_timeout_secs);
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        let gateway = GeminiGateway::new(config.gemini_api_key.clone(), http_client, timeout);
        Self::new(Arc::new(gateway))
    }
}

/// Full route table for the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/questions", get(routes::questions::get_questions))
        .route("/api/users", post(routes::users::register_user))
        .route("/api/results", post(routes::results::score_test))
        .route(
            "/api/results/download",
            post(routes::export::download_report),
        )
        .with_state(state)
}
