// src/services/places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: Handle communication with Google Places API for nearby search

use crate::errors::FinderError;
use crate::models::{NearbySearchResponse, SearchRequest};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use validator::Validate;

/// Google Places API client
/// DOCUMENTATION: Handles authentication and API calls to Google Places.
/// Transport and parse failures are folded into a non-OK response envelope
/// so they render exactly like a non-OK service status.
pub struct PlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key
    api_key: String,
    /// Base URL for Google Places API
    base_url: String,
}

impl PlacesClient {
    /// Create new Google Places API client
    pub fn new(api_key: String, timeout_secs: u64) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FinderError::ConfigError(format!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: "https://maps.googleapis.com/maps/api/place".to_string(),
        })
    }

    /// Perform nearby search for places
    /// DOCUMENTATION: Issues one nearby-search request and returns the whole
    /// response envelope, status included. The caller decides how non-OK
    /// statuses render; this client never drops the distinction.
    ///
    /// # Arguments
    /// * `request` - validated search parameters (center, radius, keyword)
    ///
    /// # Returns
    /// The parsed response envelope; Err only for invalid input
    pub async fn nearby_search(
        &self,
        request: &SearchRequest,
    ) -> Result<NearbySearchResponse, FinderError> {
        if let Err(e) = request.validate() {
            return Err(FinderError::ValidationError(e.to_string()));
        }

        let url = format!("{}/nearbysearch/json", self.base_url);

        let mut params = HashMap::new();
        params.insert(
            "location",
            format!("{},{}", request.latitude, request.longitude),
        );
        params.insert("radius", request.radius.to_string());
        params.insert("keyword", request.keyword.clone());
        params.insert("key", self.api_key.clone());

        log::debug!(
            "Nearby search: lat={}, lng={}, radius={}, keyword={}",
            request.latitude,
            request.longitude,
            request.radius,
            request.keyword
        );

        let response = match self.client.get(&url).query(&params).send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Nearby search request failed: {}", e);
                return Ok(NearbySearchResponse::transport_failure(format!(
                    "Request failed: {}",
                    e
                )));
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Nearby search HTTP error {}: {}", status, body);
            return Ok(NearbySearchResponse::transport_failure(format!(
                "API error {}: {}",
                status, body
            )));
        }

        match response.json::<NearbySearchResponse>().await {
            Ok(envelope) => {
                if envelope.status.is_ok() {
                    log::info!("Nearby search returned {} results", envelope.results.len());
                } else {
                    log::warn!(
                        "Nearby search status {:?}: {}",
                        envelope.status,
                        envelope
                            .error_message
                            .as_deref()
                            .unwrap_or("no error message")
                    );
                }
                Ok(envelope)
            }
            Err(e) => {
                log::error!("Failed to parse nearby search response: {}", e);
                Ok(NearbySearchResponse::transport_failure(format!(
                    "Parse error: {}",
                    e
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlacesStatus, SearchRequest};
    use geo_types::Point;

    #[tokio::test]
    async fn test_invalid_request_is_rejected_before_any_call() {
        let client = PlacesClient::new("test_key".to_string(), 5).unwrap();

        let mut request = SearchRequest::nearby(Point::new(0.0, 0.0));
        request.latitude = 123.0;

        let result = client.nearby_search(&request).await;
        assert!(matches!(result, Err(FinderError::ValidationError(_))));
    }

    #[test]
    fn test_transport_failure_envelope_is_non_ok() {
        let envelope = NearbySearchResponse::transport_failure("timeout".to_string());

        assert_eq!(envelope.status, PlacesStatus::UnknownError);
        assert!(envelope.results.is_empty());
        assert_eq!(envelope.error_message.as_deref(), Some("timeout"));
    }
}
