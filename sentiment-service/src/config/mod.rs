use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default Ollama endpoint; the service talks to a model server on the same
/// host unless told otherwise.
const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Default model identifier, small enough to run on a laptop.
const DEFAULT_MODEL: &str = "llama3.2:1b";

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub log_level: String,
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the Ollama server; `/api/generate` is appended per request.
    pub base_url: String,
    /// Model identifier sent with every generate request.
    pub model: String,
}

impl SentimentConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(SentimentConfig {
            common: common_config,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            inference: InferenceConfig {
                base_url: get_env("OLLAMA_BASE_URL", Some(DEFAULT_OLLAMA_BASE_URL), is_prod)?,
                model: get_env("OLLAMA_MODEL", Some(DEFAULT_MODEL), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
