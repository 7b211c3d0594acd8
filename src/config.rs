/// Configuration management for Post Service
///
/// This module handles loading configuration from environment variables.
/// Configuration is constructed once in `main` and passed explicitly into
/// the server; nothing reads the environment after startup.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Logging configuration
    pub log: LogConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Path of the append-only log file
    pub file: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig {
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/posts".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            log: LogConfig {
                file: std::env::var("LOG_FILE")
                    .unwrap_or_else(|_| "post-service.log".to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_port_falls_back_to_default() {
        std::env::set_var("PORT", "not-a-port");
        let config = Config::from_env().expect("config should load");
        assert_eq!(config.app.port, 3000);
        std::env::remove_var("PORT");
    }

    #[test]
    fn defaults_are_populated() {
        let config = Config::from_env().expect("config should load");
        assert!(!config.database.url.is_empty());
        assert!(config.database.max_connections > 0);
        assert!(!config.log.file.is_empty());
    }
}
