//! Ollama text provider.
//!
//! Non-streaming generation against a local Ollama server's
//! `POST /api/generate` endpoint.

use super::{ProviderError, TextProvider};
use crate::services::metrics;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Ollama provider configuration.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
}

/// Ollama text provider.
pub struct OllamaTextProvider {
    config: OllamaConfig,
    client: Client,
}

impl OllamaTextProvider {
    pub fn new(config: OllamaConfig) -> Self {
        // No request timeout: generation time on the local model server is
        // unbounded and the caller blocks until it completes.
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TextProvider for OllamaTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending generate request to Ollama"
        );

        let started = Instant::now();

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                metrics::record_provider_error("ollama", "network");
                ProviderError::NetworkError(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            metrics::record_provider_error("ollama", "api");

            return Err(ProviderError::ApiError(format!(
                "Ollama API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateResponse = response.json().await.map_err(|e| {
            metrics::record_provider_error("ollama", "api");
            ProviderError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        metrics::record_provider_latency(
            "ollama",
            &self.config.model,
            started.elapsed().as_secs_f64(),
        );

        Ok(api_response.response)
    }
}

// ============================================================================
// Ollama API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}
