use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if a value is present but invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub courses_path: PathBuf,
    pub curricula_path: PathBuf,
    /// Absent means the advisory generator is not configured and every
    /// recommendation uses the fallback text.
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: String,
    pub advisory_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            courses_path: PathBuf::from(env_or("COURSES_PATH", "data/courses.json")),
            curricula_path: PathBuf::from(env_or("CURRICULA_PATH", "data/curricula.json")),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            anthropic_api_url: env_or("ANTHROPIC_API_URL", DEFAULT_API_URL),
            advisory_timeout: Duration::from_secs(
                env_or("ADVISORY_TIMEOUT_SECS", "10")
                    .parse::<u64>()
                    .context("ADVISORY_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Treats unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
