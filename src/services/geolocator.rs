// src/services/geolocator.rs
// DOCUMENTATION: Positioning capability client
// PURPOSE: Obtain a one-shot position fix from an IP-geolocation service

use crate::errors::FinderError;
use crate::models::Coordinate;
use geo_types::Point;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Client for the positioning capability
/// DOCUMENTATION: Wraps the IP-geolocation HTTP endpoint. An empty endpoint
/// means the capability is absent from this environment, which is reported
/// before any request is attempted.
pub struct GeolocatorClient {
    /// HTTP client for making requests
    client: Client,
    /// Endpoint URL; empty when the capability is absent
    endpoint: String,
}

/// Response shape of the IP-geolocation service
/// status is "success" or "fail"; message explains a failure
#[derive(Debug, Deserialize)]
struct GeolocationResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    message: Option<String>,
}

impl GeolocatorClient {
    /// Create new geolocation client
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FinderError::ConfigError(format!("HTTP client init failed: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    /// Request a one-shot position fix
    /// DOCUMENTATION: The only branching decision in the whole flow.
    ///
    /// # Returns
    /// * `Ok(Coordinate)` - the fix, handed to map init and search
    /// * `Err(GeolocationUnsupported)` - capability absent, nothing attempted
    /// * `Err(LocationDenied)` - provider denied, failed, or was unreachable
    pub async fn current_position(&self) -> Result<Coordinate, FinderError> {
        if self.endpoint.is_empty() {
            log::warn!("No positioning capability configured");
            return Err(FinderError::GeolocationUnsupported);
        }

        log::debug!("Requesting position fix from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                log::error!("Position fix request failed: {}", e);
                FinderError::LocationDenied
            })?;

        if !response.status().is_success() {
            log::error!("Positioning service returned HTTP {}", response.status());
            return Err(FinderError::LocationDenied);
        }

        let fix: GeolocationResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse positioning response: {}", e);
            FinderError::LocationDenied
        })?;

        match (fix.status.as_str(), fix.lat, fix.lon) {
            ("success", Some(lat), Some(lon)) => {
                log::info!("Position fix acquired: ({}, {})", lat, lon);
                Ok(Point::new(lon, lat))
            }
            _ => {
                log::error!(
                    "Positioning service denied the fix: {}",
                    fix.message.unwrap_or_else(|| "no reason given".to_string())
                );
                Err(FinderError::LocationDenied)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_absent_capability_is_reported_without_a_request() {
        let client = GeolocatorClient::new(String::new(), 5).unwrap();
        let result = client.current_position().await;

        assert!(matches!(result, Err(FinderError::GeolocationUnsupported)));
    }

    #[test]
    fn test_parse_successful_fix() {
        let body = r#"{ "status": "success", "lat": 41.6488, "lon": -0.8891 }"#;
        let fix: GeolocationResponse = serde_json::from_str(body).unwrap();

        assert_eq!(fix.status, "success");
        assert_eq!(fix.lat, Some(41.6488));
        assert_eq!(fix.lon, Some(-0.8891));
    }

    #[test]
    fn test_parse_denied_fix() {
        let body = r#"{ "status": "fail", "message": "private range" }"#;
        let fix: GeolocationResponse = serde_json::from_str(body).unwrap();

        assert_eq!(fix.status, "fail");
        assert!(fix.lat.is_none());
        assert_eq!(fix.message.as_deref(), Some("private range"));
    }
}
