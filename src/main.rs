mod models;
mod handlers;
mod client;
mod config;
mod error;

use axum::{routing::{any, get, Router}};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use reqwest::Client;
use client::GeminiClient;
use config::Config;

// the state is read-only, every request is handled in isolation.
// the http client is shared to reuse its connection pool
#[derive(Clone)]
pub struct AppState {
    pub gemini_client: GeminiClient
}

impl AppState {

    pub fn new(config: &Config) -> Self {

        AppState {
            gemini_client: GeminiClient::new(Client::new(), config)
        }

    }

}

pub fn build_router(state: AppState) -> Router {

    // `any` so the handler answers wrong methods with its own json body
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/generate", any(handlers::generate_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)

}

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_target(false)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    if config.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set, upstream calls will be rejected");
    }

    let app = build_router(AppState::new(&config));

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let listener = TcpListener::bind(addr).await
        .expect("Failed to bind listen address");
    tracing::info!(addr = %addr, model = %config.model, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");

}

async fn shutdown_signal() {

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");

}
