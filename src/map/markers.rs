// map/markers.rs
//
// Turns a filtered result into the marker set embedded in the page script.
// Markers are rebuilt from scratch on every request; nothing about them
// persists between renders.

use maud::{html, Markup};
use serde::Serialize;

use crate::domain::listing::Listing;
use crate::geos;

/// How the client script should place the listing markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// One independent marker per listing, straight on the map.
    Individual,
    /// All markers inside a cluster group.
    Clustered,
}

/// A renderable listing marker. Serialized as JSON into the page.
#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub tooltip: String,
    pub popup_html: String,
}

/// District-centroid pin, rendered regardless of the listing data.
#[derive(Debug, Clone, Serialize)]
pub struct AnchorMarker {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

/// 평수 display: round to one decimal, drop a trailing ".0".
/// 12.0 -> "12", 12.34 -> "12.3", missing -> "-".
pub fn fmt_area(value: Option<f64>) -> String {
    match value {
        Some(v) => {
            let rounded = format!("{:.1}", v);
            rounded
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        }
        None => "-".to_string(),
    }
}

fn fmt_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Popup body for one listing. Missing fields degrade to placeholders,
/// never to a skipped row.
pub fn listing_popup(listing: &Listing) -> Markup {
    html! {
        b { (listing.display_name()) } br;
        "🗺 " (listing.district) ", " (listing.subdivision) br;
        "🏢 " (listing.building_type) " / " (listing.area_bracket)
            " (" (fmt_area(listing.area)) "평)" br;
        "📅 " (fmt_opt(&listing.built_year)) " (" (listing.year_bracket) ")" br;
        "⬆ 층: " (fmt_opt(&listing.floor)) br;
        "💰 가격: " (listing.price) " 억"
    }
}

/// Build the listing markers and pick the render mode.
///
/// The jitter is keyed by the row's position in this filtered result, so an
/// unchanged result re-renders with identical coordinates.
pub fn build_markers(filtered: &[&Listing], cluster_threshold: usize) -> (Vec<MapMarker>, RenderMode) {
    let markers = filtered
        .iter()
        .enumerate()
        .map(|(index, listing)| {
            let (lat, lon) = geos::jittered_coord(&listing.district, index);
            MapMarker {
                lat,
                lon,
                tooltip: listing.display_name().to_string(),
                popup_html: listing_popup(listing).into_string(),
            }
        })
        .collect();

    let mode = if filtered.len() <= cluster_threshold {
        RenderMode::Individual
    } else {
        RenderMode::Clustered
    };

    (markers, mode)
}

/// District anchor pins: every district when nothing is selected, exactly
/// the selected one otherwise.
pub fn anchor_markers(district: Option<&str>) -> Vec<AnchorMarker> {
    match district {
        Some(gu) => {
            let (lat, lon) = geos::district_center(gu);
            vec![AnchorMarker {
                lat,
                lon,
                label: gu.to_string(),
            }]
        }
        None => geos::DISTRICT_CENTROIDS
            .iter()
            .map(|(name, lat, lon)| AnchorMarker {
                lat: *lat,
                lon: *lon,
                label: (*name).to_string(),
            })
            .collect(),
    }
}

/// Leaflet.markercluster options for the clustered mode: stop clustering
/// past zoom 15, no spiderfy at max zoom, no coverage polygon on hover.
pub fn cluster_options() -> serde_json::Value {
    serde_json::json!({
        "disableClusteringAtZoom": 15,
        "spiderfyOnMaxZoom": false,
        "showCoverageOnHover": false,
    })
}
