// src/services/session.rs
// DOCUMENTATION: Session-scoped orchestration of the finder flow
// PURPOSE: Own the map view and results panel, run acquisition -> init -> search -> render

use crate::errors::FinderError;
use crate::models::{
    Coordinate, MapView, Marker, MarkerIcon, NearbySearchResponse, SearchRequest,
};
use crate::services::{GeolocatorClient, PlacesClient};

/// Header line written above the result entries
pub const RESULTS_HEADER: &str = "Nearby Plant Nurseries:";

/// Message shown for every non-OK search outcome. Zero results and service
/// errors collapse to this one message on purpose.
pub const NO_RESULTS_MESSAGE: &str = "No plant nurseries found nearby.";

/// Fallback shown when a place carries no vicinity
pub const ADDRESS_FALLBACK: &str = "Address not available";

/// Session-scoped context for one finder run
/// DOCUMENTATION: Replaces what used to be ambient globals. Owns both
/// display regions: the map view and the textual results panel. Starting a
/// new run tears the previous map and panel down, so repeated triggers can
/// never stack a second map on top of the first.
pub struct FinderSession {
    map: Option<MapView>,
    results_panel: Vec<String>,
    alert: Option<String>,
}

impl Default for FinderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FinderSession {
    pub fn new() -> Self {
        FinderSession {
            map: None,
            results_panel: Vec::new(),
            alert: None,
        }
    }

    /// Map initialization
    /// DOCUMENTATION: Builds the map view centered on the fix at the fixed
    /// zoom, with the single "Your Location" marker placed. Idempotent
    /// re-initialization: any previous map and panel are dropped first.
    pub fn start(&mut self, center: Coordinate) {
        if self.map.is_some() {
            log::info!("Re-initializing session, dropping previous map and results");
        }
        self.map = Some(MapView::centered_on(center));
        self.results_panel.clear();
        self.alert = None;
        log::info!(
            "Map initialized at ({}, {}), zoom {}",
            center.y(),
            center.x(),
            self.map.as_ref().map(|m| m.zoom).unwrap_or_default()
        );
    }

    /// Location-acquisition failure path: record the blocking notice and
    /// halt. The map stays uninitialized and the panel untouched.
    pub fn fail_location(&mut self, error: &FinderError) {
        self.alert = Some(error.to_string());
    }

    /// Rendering
    /// DOCUMENTATION: Full-replace semantics on the results panel. On OK:
    /// one header line plus one entry per result in received order, and one
    /// place marker per result. On anything else: exactly the collapse
    /// message, no markers.
    pub fn apply_search_response(
        &mut self,
        response: NearbySearchResponse,
    ) -> Result<(), FinderError> {
        let map = self.map.as_mut().ok_or_else(|| {
            FinderError::ValidationError("search applied before map initialization".to_string())
        })?;

        if !response.status.is_ok() {
            self.results_panel = vec![NO_RESULTS_MESSAGE.to_string()];
            return Ok(());
        }

        let mut panel = Vec::with_capacity(response.results.len() + 1);
        panel.push(RESULTS_HEADER.to_string());

        for place in &response.results {
            map.place_marker(Marker {
                position: place.coordinate(),
                label: place.name.clone(),
                icon: MarkerIcon::Place,
            });
            panel.push(format!(
                "{} - {}",
                place.name,
                place.vicinity.as_deref().unwrap_or(ADDRESS_FALLBACK)
            ));
        }

        self.results_panel = panel;
        Ok(())
    }

    /// Run the whole flow once: position fix, map init, nearby search,
    /// render. The strict forward chain of the original design; no retry,
    /// no backward transition.
    pub async fn run(
        &mut self,
        geolocator: &GeolocatorClient,
        places: &PlacesClient,
    ) -> Result<(), FinderError> {
        let center = match geolocator.current_position().await {
            Ok(center) => center,
            Err(e) => {
                if e.is_location_failure() {
                    self.fail_location(&e);
                }
                return Err(e);
            }
        };

        self.start(center);

        let request = SearchRequest::nearby(center);
        let response = places.nearby_search(&request).await?;
        self.apply_search_response(response)
    }

    pub fn map(&self) -> Option<&MapView> {
        self.map.as_ref()
    }

    pub fn results_panel(&self) -> &[String] {
        &self.results_panel
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }
}
