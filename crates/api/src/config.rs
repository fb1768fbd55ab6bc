//! Environment-backed configuration.

use std::time::Duration;

/// Runtime configuration, one field per environment variable.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub access_token_key: String,
    pub refresh_token_key: String,
    pub access_token_age: Duration,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Read every knob from the environment, falling back to insecure dev
    /// defaults (with a warning) where a secret is absent.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/diskus".to_string());

        let access_token_key = secret_from_env("ACCESS_TOKEN_KEY");
        let refresh_token_key = secret_from_env("REFRESH_TOKEN_KEY");

        let access_token_age = match std::env::var("ACCESS_TOKEN_AGE") {
            Ok(raw) => Duration::from_secs(raw.parse()?),
            Err(_) => Duration::from_secs(3000),
        };

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse()?,
            Err(_) => 5000,
        };

        Ok(Self {
            database_url,
            access_token_key,
            refresh_token_key,
            access_token_age,
            host,
            port,
        })
    }
}

fn secret_from_env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        tracing::warn!("{name} not set; using insecure dev default");
        format!("dev-{}", name.to_lowercase())
    })
}
