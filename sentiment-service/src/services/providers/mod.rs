//! Text-generation provider abstraction.
//!
//! A trait-based seam between the analysis pipeline and the model server,
//! with an Ollama implementation and a mock for tests.

pub mod mock;
pub mod ollama;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send a prompt and return the model's raw text response.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
