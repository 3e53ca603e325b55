use anyhow::{Context, Result};

/// Engine configuration loaded from environment variables.
/// The API key is an initialization-time concern — the pipeline itself only
/// ever sees a constructed client.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
