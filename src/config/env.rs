// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use reqwest::Url;
use std::env;
use std::time::Duration;

/// Address the original listing script hard-coded for the HBNB API
pub const DEFAULT_API_URL: &str = "http://0.0.0.0:5001";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0")
    pub server_address: String,

    /// Server listen port (default 5000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Base URL of the HBNB REST API, without the /api/v1 prefix
    pub api_base_url: String,

    /// Per-request timeout for API calls in seconds (0 = no timeout)
    pub api_timeout_secs: u64,

    /// How long the amenity catalog is reused between page views (0 = always refetch)
    pub catalog_cache_ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_address: "0.0.0.0".to_string(),
            server_port: 5000,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            api_base_url: DEFAULT_API_URL.to_string(),
            api_timeout_secs: 0,
            catalog_cache_ttl_secs: 300,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        let defaults = Config::default();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or(defaults.server_address),

            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),

            api_base_url: env::var("HBNB_API_URL").unwrap_or(defaults.api_base_url),

            api_timeout_secs: env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.api_timeout_secs),

            catalog_cache_ttl_secs: env::var("CATALOG_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.catalog_cache_ttl_secs),
        }
    }

    /// Request timeout for the API client, if one is configured
    pub fn api_timeout(&self) -> Option<Duration> {
        match self.api_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.api_base_url)
            .map_err(|e| format!("HBNB_API_URL is not a valid URL ({}): {}", self.api_base_url, e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "HBNB_API_URL must use http or https, got {}",
                url.scheme()
            ));
        }

        if self.api_timeout_secs == 0 {
            log::warn!("API_TIMEOUT_SECS not set - API calls may wait indefinitely");
        }

        Ok(())
    }
}
