use std::str::FromStr;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
    pub recommender: RecommenderConfig,
}

#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    pub sample_size: usize,
    pub ai_timeout_secs: u64,
    /// Optional cap on roles scored by the fallback ranker; unset scores the whole catalog.
    pub fallback_catalog_limit: Option<usize>,
    /// When set, catalog sampling is seeded and repeatable.
    pub sample_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            port: parse_env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recommender: RecommenderConfig {
                sample_size: parse_env_or("RECOMMENDER_SAMPLE_SIZE", 50)?,
                ai_timeout_secs: parse_env_or("RECOMMENDER_AI_TIMEOUT_SECS", 15)?,
                fallback_catalog_limit: parse_optional_env("RECOMMENDER_FALLBACK_CATALOG_LIMIT")?,
                sample_seed: parse_optional_env("RECOMMENDER_SAMPLE_SEED")?,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(parse_optional_env(key)?.unwrap_or(default))
}

fn parse_optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(None),
    }
}
