//! Application startup and lifecycle management.

use crate::config::SentimentConfig;
use crate::handlers::analyze::analyze_review;
use crate::handlers::health::{health_check, readiness_check};
use crate::handlers::metrics::metrics_handler;
use crate::services::providers::ollama::{OllamaConfig, OllamaTextProvider};
use crate::services::providers::TextProvider;
use crate::services::ReviewAnalyzer;
use axum::routing::{get, post};
use axum::Router;
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: SentimentConfig,
    pub analyzer: ReviewAnalyzer,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: SentimentConfig) -> Result<Self, AppError> {
        let provider_config = OllamaConfig {
            base_url: config.inference.base_url.clone(),
            model: config.inference.model.clone(),
        };
        let provider: Arc<dyn TextProvider> = Arc::new(OllamaTextProvider::new(provider_config));

        tracing::info!(
            model = %config.inference.model,
            endpoint = %config.inference.base_url,
            "Initialized Ollama text provider"
        );

        let analyzer = ReviewAnalyzer::new(provider);

        let state = AppState {
            config: config.clone(),
            analyzer,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Sentiment service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}

/// Assemble the service router with tracing and wide-open CORS.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_review))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            },
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
