// catalog.rs
//
// Fixed option lists for the filter form. Order here is display order.
// A record whose categorical value is not in the matching list can never
// equal a selected option, so it silently drops out of every filtered view.

/// 건축년도 구분
pub const YEAR_BRACKETS: &[&str] = &[
    "2020년대",
    "2010년대",
    "2000년대",
    "1990년대",
    "1980년대",
    "1979년 이하",
];

/// 건물용도
pub const BUILDING_TYPES: &[&str] = &["아파트", "오피스텔", "단독다가구", "연립다세대"];

/// 건물면적구분 (평 단위)
pub const AREA_BRACKETS: &[&str] = &[
    "10평 미만",
    "10평대",
    "20평대",
    "30평대",
    "40평대",
    "50평대",
    "60평대 이상",
];

/// Sentinel meaning "no district filter".
pub const ALL_DISTRICTS: &str = "전체";

// Form defaults, matching the original selectbox positions.
pub const DEFAULT_YEAR_BRACKET: &str = "2000년대";
pub const DEFAULT_BUILDING_TYPE: &str = "아파트";
pub const DEFAULT_AREA_BRACKET: &str = "10평 미만";

/// Pick `value` if it is a member of `options`, otherwise `fallback`.
pub fn pick_option<'a>(options: &[&'a str], value: Option<&str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) => options.iter().find(|o| **o == v).copied().unwrap_or(fallback),
        None => fallback,
    }
}
