use crate::config::{DataSettings, MapSettings, ServerSettings, Settings};
use crate::dataset::Dataset;
use crate::domain::listing::Listing;
use crate::router::AppState;

/// App state over an in-memory dataset; no files involved.
pub fn make_state(rows: Vec<Listing>) -> AppState {
    AppState {
        settings: Settings {
            server: ServerSettings::default(),
            data: DataSettings::default(),
            map: MapSettings::default(),
        },
        dataset: Dataset::from_rows(rows),
    }
}

/// The one-row scenario used across the router tests:
/// 강남구 / 2010년대 / 아파트 / 30평대, floor 5, 12.5억.
pub fn gangnam_apartment() -> Listing {
    Listing {
        district: "강남구".to_string(),
        subdivision: "역삼동".to_string(),
        building_name: Some("래미안".to_string()),
        building_type: "아파트".to_string(),
        year_bracket: "2010년대".to_string(),
        built_year: Some(2015),
        area_bracket: "30평대".to_string(),
        area: Some(32.7),
        floor: Some(5),
        price: 12.5,
    }
}

/// Build a GET request for `path` with form-encoded `params`. Korean values
/// must be percent-encoded before they can live in a URI.
pub fn get_request(path: &str, params: &[(&str, &str)]) -> astra::Request {
    let uri = if params.is_empty() {
        path.to_string()
    } else {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in params {
            query.append_pair(key, value);
        }
        format!("{path}?{}", query.finish())
    };

    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(astra::Body::empty())
        .expect("request should build")
}

/// Drain a response body to a UTF-8 string.
pub fn body_string(resp: &mut astra::Response) -> String {
    use std::io::Read;

    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("body should read");
    String::from_utf8(bytes).expect("body should be utf-8")
}
