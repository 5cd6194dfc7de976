use serde::{Deserialize, Serialize};

/// One 2024 sale record, deserialized straight from the CSV's Korean headers.
///
/// Optional fields are genuinely absent in parts of the source data; display
/// code falls back to "-" (and "매물" for a missing building name) instead of
/// failing a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    // Location
    #[serde(rename = "자치구명")]
    pub district: String,
    #[serde(rename = "법정동명")]
    pub subdivision: String,

    // Building
    #[serde(rename = "건물명")]
    pub building_name: Option<String>,
    #[serde(rename = "건물용도")]
    pub building_type: String,

    // Construction year
    #[serde(rename = "건축년도구분")]
    pub year_bracket: String,
    #[serde(rename = "건축년도")]
    pub built_year: Option<i32>,

    // Area (평)
    #[serde(rename = "건물면적구분")]
    pub area_bracket: String,
    #[serde(rename = "건물면적")]
    pub area: Option<f64>,

    // May be negative for below-ground floors.
    #[serde(rename = "층")]
    pub floor: Option<i64>,

    // 억 (100-million won) units.
    #[serde(rename = "물건금액")]
    pub price: f64,
}

impl Listing {
    /// Building name shown on tooltips and popups.
    pub fn display_name(&self) -> &str {
        match self.building_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "매물",
        }
    }

    /// Floor used for the minimum-floor comparison. Missing floors count as
    /// ground level; the record itself keeps `None`.
    pub fn floor_or_ground(&self) -> i64 {
        self.floor.unwrap_or(0)
    }
}
