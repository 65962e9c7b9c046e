// src/ui/panels.rs
// DOCUMENTATION: Terminal rendering of the two display regions
// PURPOSE: Turn session state into the map panel and results panel text

use crate::models::{MapView, MarkerIcon};
use crate::services::FinderSession;

fn icon_glyph(icon: MarkerIcon) -> &'static str {
    match icon {
        MarkerIcon::UserLocation => "[*]",
        MarkerIcon::Place => "[.]",
    }
}

/// Render the map region: center line plus one line per marker, in
/// placement order (user marker first).
pub fn render_map_panel(map: &MapView) -> String {
    let mut lines = Vec::with_capacity(map.markers().len() + 1);
    lines.push(format!(
        "Map centered at ({:.4}, {:.4}), zoom {}",
        map.center.y(),
        map.center.x(),
        map.zoom
    ));

    for marker in map.markers() {
        lines.push(format!(
            "  {} {} ({:.4}, {:.4})",
            icon_glyph(marker.icon),
            marker.label,
            marker.position.y(),
            marker.position.x()
        ));
    }

    lines.join("\n")
}

/// Render the results region exactly as the session holds it, one line per
/// panel entry.
pub fn render_results_panel(panel: &[String]) -> String {
    panel.join("\n")
}

/// Write both regions of a completed session to stdout.
pub fn print_session(session: &FinderSession) {
    if let Some(map) = session.map() {
        println!("{}", render_map_panel(map));
        println!();
    }
    println!("{}", render_results_panel(session.results_panel()));
}
