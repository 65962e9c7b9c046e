// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Default positioning provider (IP geolocation, no key required)
const DEFAULT_GEOLOCATION_API_URL: &str = "http://ip-api.com/json";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Places API Key (injected, never hardcoded in the binary)
    pub google_places_api_key: String,

    /// Positioning capability endpoint. An empty string means the host
    /// environment has no positioning capability at all.
    pub geolocation_api_url: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// HTTP request timeout in seconds for both external services
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Config {
            google_places_api_key: env::var("GOOGLE_PLACES_API_KEY")
                .unwrap_or_else(|_| String::new()),

            geolocation_api_url: env::var("GEOLOCATION_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEOLOCATION_API_URL.to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.google_places_api_key.is_empty() {
            return Err("GOOGLE_PLACES_API_KEY is required".to_string());
        }

        if self.geolocation_api_url.is_empty() {
            log::warn!("GEOLOCATION_API_URL is empty - positioning capability unavailable");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_api_key() {
        let config = Config {
            google_places_api_key: String::new(),
            geolocation_api_url: DEFAULT_GEOLOCATION_API_URL.to_string(),
            log_level: "info".to_string(),
            http_timeout_secs: 30,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_empty_geolocation_url() {
        // An absent positioning capability is a runtime notice, not a
        // startup failure.
        let config = Config {
            google_places_api_key: "test_key".to_string(),
            geolocation_api_url: String::new(),
            log_level: "info".to_string(),
            http_timeout_secs: 30,
        };
        assert!(config.validate().is_ok());
    }
}
