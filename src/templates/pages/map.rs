// templates/pages/map.rs
//
// The single page of the app: filter form, Leaflet map, criteria summary,
// and the filtered table. Marker data rides into the browser as JSON inside
// the page script.

use maud::{html, Markup, PreEscaped};
use serde::Serialize;

use crate::domain::criteria::FilterCriteria;
use crate::domain::listing::Listing;
use crate::map::markers::{AnchorMarker, MapMarker, RenderMode};
use crate::map::{markers, view_center};
use crate::templates::components::{filter_form, listings_table, summary_panel};
use crate::templates::desktop_layout;

/// Serialize a value for embedding inside a <script> block. `</` must not
/// appear verbatim or the parser would end the script early.
fn json_for_script<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

fn map_script(
    criteria: &FilterCriteria,
    listing_markers: &[MapMarker],
    mode: RenderMode,
    anchors: &[AnchorMarker],
) -> String {
    let ((lat, lon), zoom) = view_center(criteria.district.as_deref());
    let anchors_json = json_for_script(&anchors);
    let markers_json = json_for_script(&listing_markers);
    let mode_json = json_for_script(&mode);
    let cluster_json = json_for_script(&markers::cluster_options());

    format!(
        r#"
var map = L.map('map').setView([{lat}, {lon}], {zoom});
L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);

var anchors = {anchors_json};
anchors.forEach(function (a) {{
    L.marker([a.lat, a.lon]).addTo(map).bindPopup(a.label).bindTooltip(a.label);
}});

var listings = {markers_json};
var renderMode = {mode_json};
var clusterOptions = {cluster_json};

var listingLayer = renderMode === 'clustered'
    ? L.markerClusterGroup(clusterOptions)
    : L.layerGroup();
listings.forEach(function (m) {{
    var marker = L.marker([m.lat, m.lon]);
    marker.bindPopup(m.popup_html, {{ maxWidth: 320 }});
    marker.bindTooltip(m.tooltip, {{ sticky: true }});
    listingLayer.addLayer(marker);
}});
map.addLayer(listingLayer);
"#
    )
}

pub fn map_page(
    criteria: &FilterCriteria,
    filtered: &[&Listing],
    listing_markers: &[MapMarker],
    mode: RenderMode,
    anchors: &[AnchorMarker],
    max_price: f64,
) -> Markup {
    desktop_layout(
        "서울에서 내 집 마련하기",
        html! {
            div class="layout" {
                (filter_form(criteria, max_price))
                div class="content" {
                    h4 { "📌 선택한 조건의 매물 지도" }
                    div id="map" {}
                    script {
                        (PreEscaped(map_script(criteria, listing_markers, mode, anchors)))
                    }
                }
                (summary_panel(criteria, filtered.len()))
            }
            (listings_table(filtered))
        },
    )
}
