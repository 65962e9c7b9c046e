// src/models/place.rs
// DOCUMENTATION: Core data structures for the nearby-search flow
// PURPOSE: Defines all serialization/deserialization models for the external APIs

use geo_types::Point;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Search radius in meters, fixed for every search
pub const SEARCH_RADIUS_M: u32 = 5000;

/// Keyword sent with every nearby search, fixed
pub const SEARCH_KEYWORD: &str = "plant nursery";

/// Geographic coordinate (x = longitude, y = latitude)
/// Produced once by the position fix and immutable afterward.
pub type Coordinate = Point<f64>;

/// Wire representation of a coordinate as the services exchange it
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LatLng {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

impl From<LatLng> for Coordinate {
    fn from(value: LatLng) -> Self {
        Point::new(value.lng, value.lat)
    }
}

impl From<Coordinate> for LatLng {
    fn from(value: Coordinate) -> Self {
        LatLng {
            lat: value.y(),
            lng: value.x(),
        }
    }
}

/// Nearby-search parameters, constructed fresh for each search
/// DOCUMENTATION: location comes from the position fix; radius and keyword
/// are the fixed constants above. Validated before any request goes out.
#[derive(Debug, Clone, Validate)]
pub struct SearchRequest {
    /// Search center latitude
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    /// Search center longitude
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    /// Search radius in meters (service maximum is 50000)
    #[validate(range(min = 1, max = 50000))]
    pub radius: u32,

    /// Keyword filter
    #[validate(length(min = 1))]
    pub keyword: String,
}

impl SearchRequest {
    /// Build the fixed-radius, fixed-keyword request for a coordinate
    pub fn nearby(center: Coordinate) -> Self {
        SearchRequest {
            latitude: center.y(),
            longitude: center.x(),
            radius: SEARCH_RADIUS_M,
            keyword: SEARCH_KEYWORD.to_string(),
        }
    }
}

/// Response from the Nearby Search service
/// DOCUMENTATION: Parsed response envelope; results keep the order the
/// service returned them in (no re-sorting)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NearbySearchResponse {
    /// Results array from the API
    #[serde(default)]
    pub results: Vec<NearbyPlace>,
    /// Status of the API call
    pub status: PlacesStatus,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
}

impl NearbySearchResponse {
    /// Synthesize the envelope used when the transport itself failed, so the
    /// rendering path treats it like any other non-OK status.
    pub fn transport_failure(message: String) -> Self {
        NearbySearchResponse {
            results: Vec::new(),
            status: PlacesStatus::UnknownError,
            error_message: Some(message),
        }
    }
}

/// Individual place from the Nearby Search service
/// DOCUMENTATION: Read-only from this system's perspective
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NearbyPlace {
    /// Place name
    pub name: String,
    /// Geographic location
    pub geometry: Geometry,
    /// Vicinity (short address); absent for some places
    pub vicinity: Option<String>,
}

impl NearbyPlace {
    pub fn coordinate(&self) -> Coordinate {
        self.geometry.location.into()
    }
}

/// Geometry wrapper as the service nests it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Geometry {
    /// Location coordinates
    pub location: LatLng,
}

/// Status enum of the Nearby Search service
/// DOCUMENTATION: Only Ok carries renderable results; every other value is
/// collapsed to the same user-facing outcome by the session.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum PlacesStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ZERO_RESULTS")]
    ZeroResults,
    #[serde(rename = "OVER_QUERY_LIMIT")]
    OverQueryLimit,
    #[serde(rename = "REQUEST_DENIED")]
    RequestDenied,
    #[serde(rename = "INVALID_REQUEST")]
    InvalidRequest,
    #[serde(other, rename = "UNKNOWN_ERROR")]
    UnknownError,
}

impl PlacesStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, PlacesStatus::Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_nearby_request_uses_fixed_constants() {
        let request = SearchRequest::nearby(Point::new(-122.0, 37.0));

        assert_eq!(request.latitude, 37.0);
        assert_eq!(request.longitude, -122.0);
        assert_eq!(request.radius, 5000);
        assert_eq!(request.keyword, "plant nursery");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_validation_bounds() {
        let mut request = SearchRequest::nearby(Point::new(0.0, 0.0));
        request.latitude = 91.0;
        assert!(request.validate().is_err());

        let mut request = SearchRequest::nearby(Point::new(0.0, 0.0));
        request.longitude = -181.0;
        assert!(request.validate().is_err());

        let mut request = SearchRequest::nearby(Point::new(0.0, 0.0));
        request.radius = 60000;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_parse_nearby_search_response() {
        let body = r#"{
            "results": [
                {
                    "name": "Green Thumb",
                    "geometry": { "location": { "lat": 37.01, "lng": -122.02 } },
                    "vicinity": "1 Main St"
                },
                {
                    "name": "Leaf & Bloom",
                    "geometry": { "location": { "lat": 37.02, "lng": -122.03 } }
                }
            ],
            "status": "OK"
        }"#;

        let response: NearbySearchResponse = serde_json::from_str(body).unwrap();

        assert!(response.status.is_ok());
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].vicinity.as_deref(), Some("1 Main St"));
        assert!(response.results[1].vicinity.is_none());
        assert_eq!(response.results[1].coordinate(), Point::new(-122.03, 37.02));
    }

    #[test]
    fn test_parse_zero_results_status() {
        let body = r#"{ "results": [], "status": "ZERO_RESULTS" }"#;
        let response: NearbySearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.status, PlacesStatus::ZeroResults);
        assert!(!response.status.is_ok());
    }

    #[test]
    fn test_unrecognized_status_maps_to_unknown() {
        let body = r#"{ "results": [], "status": "SOMETHING_NEW" }"#;
        let response: NearbySearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.status, PlacesStatus::UnknownError);
    }

    #[test]
    fn test_latlng_point_round_trip() {
        let wire = LatLng { lat: 41.65, lng: -0.88 };
        let point: Coordinate = wire.into();

        assert_eq!(point.y(), 41.65);
        assert_eq!(point.x(), -0.88);
        assert_eq!(LatLng::from(point), wire);
    }
}
