// src/models/map.rs
// DOCUMENTATION: Map view-model structures
// PURPOSE: Map view, markers, and marker icons owned by the session

use crate::models::Coordinate;

/// Zoom level every map view is created with, fixed
pub const MAP_ZOOM: u8 = 14;

/// Label of the marker for the user's own position
pub const USER_MARKER_LABEL: &str = "Your Location";

/// Marker icon variants
/// DOCUMENTATION: The user-location marker carries a distinguishing icon so
/// it can never be confused with a search-result marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    UserLocation,
    Place,
}

/// A visual pin annotation bound to a coordinate
/// Markers are fire-and-forget: placed once, never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Coordinate,
    pub label: String,
    pub icon: MarkerIcon,
}

/// Map view centered on the user's position
/// DOCUMENTATION: Owns every marker placed during the session. The first
/// marker is always the user-location marker; search-result markers are
/// appended after it in the order results arrived.
#[derive(Debug, Clone)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    markers: Vec<Marker>,
}

impl MapView {
    /// Construct a map centered on the coordinate at the fixed zoom level,
    /// with the single "Your Location" marker already placed.
    pub fn centered_on(center: Coordinate) -> Self {
        let mut view = MapView {
            center,
            zoom: MAP_ZOOM,
            markers: Vec::new(),
        };
        view.place_marker(Marker {
            position: center,
            label: USER_MARKER_LABEL.to_string(),
            icon: MarkerIcon::UserLocation,
        });
        view
    }

    /// Append a marker. Append-only: nothing ever removes or rewrites a
    /// marker on a live map view.
    pub fn place_marker(&mut self, marker: Marker) {
        log::debug!(
            "Placing marker '{}' at ({}, {})",
            marker.label,
            marker.position.y(),
            marker.position.x()
        );
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Markers placed by search rendering (everything but the user marker)
    pub fn place_markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers
            .iter()
            .filter(|m| m.icon == MarkerIcon::Place)
    }
}
