// src/tests/router_tests/download_tests.rs

use crate::router::handle;
use crate::tests::utils::{gangnam_apartment, get_request, make_state};

#[test]
fn download_returns_xlsx_attachment() {
    let state = make_state(vec![gangnam_apartment()]);
    let req = get_request(
        "/download.xlsx",
        &[
            ("gu", "강남구"),
            ("year", "2010년대"),
            ("building", "아파트"),
            ("area", "30평대"),
            ("max_budget", "20"),
        ],
    );

    let mut resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("spreadsheetml"));

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("filtered_listings.xlsx"));

    // XLSX is a zip container; it starts with the PK magic.
    use std::io::Read;
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn download_of_empty_result_is_still_a_workbook() {
    let state = make_state(vec![gangnam_apartment()]);
    // Default criteria (2000년대 / 10평 미만) match nothing in this dataset.
    let req = get_request("/download.xlsx", &[]);

    let mut resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 200);

    use std::io::Read;
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"), "headers-only workbook still saves");
}
