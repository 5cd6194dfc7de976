use std::collections::HashMap;

use astra::Request;
use tracing::{info, warn};

use crate::config::Settings;
use crate::dataset::Dataset;
use crate::domain::criteria::FilterCriteria;
use crate::domain::logic::filter_listings;
use crate::errors::{ResultResp, ServerError};
use crate::map::markers::{anchor_markers, build_markers};
use crate::responses::html_response;
use crate::spreadsheets::export_filtered_xlsx;
use crate::templates::pages::map_page;

/// Read-only per-process state: the dataset and the settings it was
/// started with. Shared across worker threads, never mutated.
pub struct AppState {
    pub settings: Settings,
    pub dataset: Dataset,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => render_map_page(&req, state),
        ("GET", "/download.xlsx") => download_filtered(&req, state),
        _ => Err(ServerError::NotFound),
    }
}

/// The whole pipeline runs per request: parse criteria, filter, jitter,
/// build markers, render. Nothing is cached between requests.
fn render_map_page(req: &Request, state: &AppState) -> ResultResp {
    let criteria = criteria_from(req, state);

    let filtered = filter_listings(state.dataset.rows(), &criteria);
    let (listing_markers, mode) =
        build_markers(&filtered, state.settings.map.cluster_threshold);
    let anchors = anchor_markers(criteria.district.as_deref());

    info!(
        district = criteria.district_label(),
        matched = filtered.len(),
        mode = ?mode,
        "rendering map page"
    );

    html_response(map_page(
        &criteria,
        &filtered,
        &listing_markers,
        mode,
        &anchors,
        state.dataset.max_price(),
    ))
}

fn download_filtered(req: &Request, state: &AppState) -> ResultResp {
    let criteria = criteria_from(req, state);
    let filtered = filter_listings(state.dataset.rows(), &criteria);

    info!(matched = filtered.len(), "exporting filtered result");

    export_filtered_xlsx(&filtered)
}

fn criteria_from(req: &Request, state: &AppState) -> FilterCriteria {
    let params = parse_query(req);
    let criteria = FilterCriteria::from_query(&params, state.dataset.max_price());

    if criteria.budget_swapped {
        warn!(
            min = criteria.min_budget,
            max = criteria.max_budget,
            "budget range arrived inverted, swapped"
        );
    }

    criteria
}

/// Decode the query string into a map. Keys and values are form-urlencoded
/// UTF-8 (the district names need percent-decoding).
fn parse_query(req: &Request) -> HashMap<String, String> {
    let raw = req.uri().query().unwrap_or("");
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}
