use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with no environment
/// at all and serves the sample profile.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON document holding the resume under analysis.
    pub resume_profile_path: String,
    /// Optional newline-delimited file replacing the built-in stop words.
    pub stop_words_path: Option<String>,
    /// Maximum keywords kept from a job description.
    pub keyword_cap: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            resume_profile_path: env_or("RESUME_PROFILE_PATH", "data/profile.json"),
            stop_words_path: std::env::var("STOP_WORDS_PATH").ok(),
            keyword_cap: env_or("KEYWORD_CAP", "50")
                .parse::<usize>()
                .context("KEYWORD_CAP must be a non-negative integer")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
