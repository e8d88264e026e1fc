use std::time::Duration;

use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables. Everything has a
/// default except the credential, which is genuinely optional: requests
/// without a token still go out and the server's 401 surfaces as a failed
/// fetch.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub token: Option<String>,
    pub http_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let http_timeout_secs = std::env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("HTTP_TIMEOUT_SECS must be a number of seconds")?;

        Ok(Config {
            base_url: std::env::var("JOB_BOARD_BASE_URL")
                .unwrap_or_else(|_| crate::api_client::DEFAULT_BASE_URL.to_string()),
            token: std::env::var("JOB_BOARD_TOKEN").ok(),
            http_timeout: Duration::from_secs(http_timeout_secs),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
