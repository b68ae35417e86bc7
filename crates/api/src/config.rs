//! Application configuration loaded from environment variables.

use std::time::Duration;

/// Deployment environment. Affects rate-limit key derivation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parses the `ENVIRONMENT` variable; anything other than `production`
    /// is treated as development.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `DATABASE_URL` — SQLite connection URL (default: `"sqlite://views.db"`)
/// - `ENVIRONMENT` — `development` or `production` (default: `development`)
/// - `RATE_LIMIT_MAX_REQUESTS` — requests allowed per window (default: `100`)
/// - `RATE_LIMIT_PERIOD_SECS` — window length in seconds (default: `60`)
/// - `ALLOWED_ORIGINS` — comma-separated CORS allow-list
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub environment: Environment,
    pub rate_limit_max_requests: u32,
    pub rate_limit_period_secs: u64,
    pub allowed_origins: Vec<String>,
    pub log_level: String,
}

const DEFAULT_ORIGINS: [&str; 2] = ["https://blog.example.com", "https://www.example.com"];

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://views.db".to_string()),
            environment: Environment::parse(&std::env::var("ENVIRONMENT").unwrap_or_default()),
            rate_limit_max_requests: std::env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            rate_limit_period_secs: std::env::var("RATE_LIMIT_PERIOD_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| DEFAULT_ORIGINS.iter().map(ToString::to_string).collect()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the rate-limit window length.
    pub fn rate_limit_period(&self) -> Duration {
        Duration::from_secs(self.rate_limit_period_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "sqlite://views.db".to_string(),
            environment: Environment::Development,
            rate_limit_max_requests: 100,
            rate_limit_period_secs: 60,
            allowed_origins: DEFAULT_ORIGINS.iter().map(ToString::to_string).collect(),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url, "sqlite://views.db");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.rate_limit_max_requests, 100);
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("PRODUCTION"), Environment::Production);
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse(""), Environment::Development);
        assert_eq!(Environment::parse("staging"), Environment::Development);
    }

    #[test]
    fn test_rate_limit_period() {
        let config = Config {
            rate_limit_period_secs: 30,
            ..Config::default()
        };
        assert_eq!(config.rate_limit_period(), Duration::from_secs(30));
    }
}
