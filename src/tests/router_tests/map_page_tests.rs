// src/tests/router_tests/map_page_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, gangnam_apartment, get_request, make_state};

const GANGNAM_QUERY: &[(&str, &str)] = &[
    ("gu", "강남구"),
    ("year", "2010년대"),
    ("building", "아파트"),
    ("area", "30평대"),
    ("floor", "0"),
    ("min_budget", "0"),
    ("max_budget", "20"),
];

#[test]
fn single_matching_row_renders_one_marker_and_one_anchor() {
    let state = make_state(vec![gangnam_apartment()]);
    let req = get_request("/", GANGNAM_QUERY);

    let mut resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);

    // Summary count
    assert!(body.contains("매물 수: 1건"), "summary should count one row");

    // Exactly one listing marker in the embedded JSON
    assert_eq!(body.matches("\"tooltip\":").count(), 1);
    assert!(body.contains("래미안"));

    // One anchor for the selected district
    assert_eq!(body.matches("\"label\":").count(), 1);
    assert!(body.contains("\"label\":\"강남구\""));

    // 200-row result stays in individual mode
    assert!(body.contains("\"individual\""));

    // The table lists the row with all columns
    assert!(body.contains("역삼동"));
    assert!(body.contains("12.5"));
}

#[test]
fn min_floor_above_row_yields_empty_result_but_keeps_anchors() {
    let state = make_state(vec![gangnam_apartment()]);
    let mut params = GANGNAM_QUERY.to_vec();
    params[4] = ("floor", "10");
    let req = get_request("/", &params);

    let mut resp = handle(req, &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("매물 수: 0건"), "summary should show zero");
    assert!(body.contains("var listings = []"), "no listing markers");
    assert!(body.contains("\"label\":\"강남구\""), "anchor still renders");
    assert!(body.contains("조건에 맞는 매물이 없습니다"));
}

#[test]
fn whole_city_view_renders_all_district_anchors() {
    let state = make_state(vec![gangnam_apartment()]);
    let req = get_request("/", &[]);

    let mut resp = handle(req, &state).unwrap();
    let body = body_string(&mut resp);

    assert_eq!(body.matches("\"label\":").count(), 25);
    // Defaults don't match the row: 2000년대 / 10평 미만
    assert!(body.contains("매물 수: 0건"));
}

#[test]
fn inverted_budget_shows_warning_and_still_matches() {
    let state = make_state(vec![gangnam_apartment()]);
    let mut params = GANGNAM_QUERY.to_vec();
    params[5] = ("min_budget", "20");
    params[6] = ("max_budget", "0");
    let req = get_request("/", &params);

    let mut resp = handle(req, &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("최대 예산이 최소 예산보다 작습니다"));
    assert!(body.contains("매물 수: 1건"), "swapped range still filters");
}

#[test]
fn form_reflects_submitted_criteria() {
    let state = make_state(vec![gangnam_apartment()]);
    let req = get_request("/", GANGNAM_QUERY);

    let mut resp = handle(req, &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("value=\"강남구\" selected"));
    assert!(body.contains("value=\"2010년대\" selected"));
}

#[test]
fn unknown_path_is_not_found() {
    let state = make_state(vec![]);
    let req = get_request("/nope", &[]);

    let result = handle(req, &state);
    assert!(matches!(result, Err(ServerError::NotFound)));
}
