use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RECOMMENDER_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
/// Startup fails if `DATABASE_URL` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Remote recommendation endpoint. `None` runs the service heuristic-only.
    pub recommender_url: Option<String>,
    pub recommender_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .context("Required environment variable 'DATABASE_URL' is not set")?;

        let recommender_url = lookup("RECOMMENDER_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let recommender_timeout = match lookup("RECOMMENDER_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .context("RECOMMENDER_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => Duration::from_secs(DEFAULT_RECOMMENDER_TIMEOUT_SECS),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            database_url,
            recommender_url,
            recommender_timeout,
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_apply() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/careers")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.recommender_timeout, Duration::from_secs(10));
        assert!(config.recommender_url.is_none());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_database_url_fails() {
        let err = config_from(&[("PORT", "3000")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_blank_recommender_url_is_ignored() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/careers"),
            ("RECOMMENDER_URL", "   "),
        ])
        .unwrap();
        assert!(config.recommender_url.is_none());
    }

    #[test]
    fn test_overrides_parse() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/careers"),
            ("RECOMMENDER_URL", "https://recs.example.com/careers"),
            ("RECOMMENDER_TIMEOUT_SECS", "3"),
            ("PORT", "9000"),
        ])
        .unwrap();
        assert_eq!(
            config.recommender_url.as_deref(),
            Some("https://recs.example.com/careers")
        );
        assert_eq!(config.recommender_timeout, Duration::from_secs(3));
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_invalid_port_fails() {
        assert!(config_from(&[
            ("DATABASE_URL", "postgres://localhost/careers"),
            ("PORT", "not-a-port"),
        ])
        .is_err());
    }
}
