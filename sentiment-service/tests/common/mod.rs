//! Test helper module for sentiment-service integration tests.

#![allow(dead_code)]

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use sentiment_service::config::{InferenceConfig, SentimentConfig};
use sentiment_service::services::metrics::init_metrics;
use sentiment_service::startup::Application;
use service_core::config::Config as CoreConfig;
use tokio::net::TcpListener;

pub const TEST_MODEL: &str = "llama3.2:1b";

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the service on a random port, pointed at the given inference
    /// base URL.
    pub async fn spawn_with_inference(base_url: &str) -> Self {
        init_metrics();

        let config = SentimentConfig {
            common: CoreConfig { port: 0 }, // Random port
            log_level: "warn".to_string(),
            inference: InferenceConfig {
                base_url: base_url.to_string(),
                model: TEST_MODEL.to_string(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }

    /// Spawn the service with an inference endpoint that refuses connections.
    pub async fn spawn() -> Self {
        let url = unreachable_inference_url().await;
        Self::spawn_with_inference(&url).await
    }
}

/// A base URL whose port is valid but has nothing listening on it.
pub async fn unreachable_inference_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);

    format!("http://{}", addr)
}

/// Stand-in for the Ollama server.
pub struct MockOllama {
    pub base_url: String,
}

/// Spawn a mock model server answering `POST /api/generate` with the given
/// status. Success responses carry a plausible generate body; error statuses
/// carry an error body, exercising the non-2xx path.
pub async fn spawn_mock_ollama(status: StatusCode) -> MockOllama {
    let app = Router::new().route(
        "/api/generate",
        post(move |Json(body): Json<serde_json::Value>| async move {
            if status.is_success() {
                (
                    status,
                    Json(serde_json::json!({
                        "model": body["model"],
                        "created_at": "2024-01-01T00:00:00Z",
                        "response": "{\"overall_sentiment\": \"positive\"}",
                        "done": true
                    })),
                )
                    .into_response()
            } else {
                (status, Json(serde_json::json!({"error": "model failure"}))).into_response()
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock Ollama listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    MockOllama {
        base_url: format!("http://{}", addr),
    }
}
