use std::collections::HashMap;

use crate::catalog;

/// The active filter selection, rebuilt from the query string on every
/// request. Construction normalizes the budget range, so a value of this
/// type always satisfies `min_budget <= max_budget`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// `None` means "전체" (no district filter).
    pub district: Option<String>,
    pub year_bracket: String,
    pub building_type: String,
    pub area_bracket: String,
    pub min_floor: i64,
    pub min_budget: f64,
    pub max_budget: f64,
    /// Set when the submitted budgets arrived inverted and were swapped.
    /// Non-fatal; the page shows a warning.
    pub budget_swapped: bool,
}

impl FilterCriteria {
    /// Build criteria from decoded query parameters.
    ///
    /// Unknown or missing categorical values fall back to the form defaults
    /// rather than erroring: the form's selectboxes can only produce catalog
    /// members, so anything else is a hand-edited URL. `default_max_budget`
    /// comes from the dataset's price ceiling.
    pub fn from_query(params: &HashMap<String, String>, default_max_budget: f64) -> Self {
        let district = match params.get("gu").map(String::as_str) {
            None | Some(catalog::ALL_DISTRICTS) => None,
            Some(gu) => {
                if crate::geos::DISTRICT_CENTROIDS.iter().any(|(name, _, _)| *name == gu) {
                    Some(gu.to_string())
                } else {
                    None
                }
            }
        };

        let year_bracket = catalog::pick_option(
            catalog::YEAR_BRACKETS,
            params.get("year").map(String::as_str),
            catalog::DEFAULT_YEAR_BRACKET,
        );
        let building_type = catalog::pick_option(
            catalog::BUILDING_TYPES,
            params.get("building").map(String::as_str),
            catalog::DEFAULT_BUILDING_TYPE,
        );
        let area_bracket = catalog::pick_option(
            catalog::AREA_BRACKETS,
            params.get("area").map(String::as_str),
            catalog::DEFAULT_AREA_BRACKET,
        );

        // Negative floors are legal input (below-ground).
        let min_floor = params
            .get("floor")
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0);

        let min_budget = params
            .get("min_budget")
            .and_then(|v| v.parse::<f64>().ok())
            .map(|v| v.max(0.0))
            .unwrap_or(0.0);
        let max_budget = params
            .get("max_budget")
            .and_then(|v| v.parse::<f64>().ok())
            .map(|v| v.max(0.0))
            .unwrap_or(default_max_budget);

        let (min_budget, max_budget, budget_swapped) = normalize_budget(min_budget, max_budget);

        FilterCriteria {
            district,
            year_bracket: year_bracket.to_string(),
            building_type: building_type.to_string(),
            area_bracket: area_bracket.to_string(),
            min_floor,
            min_budget,
            max_budget,
            budget_swapped,
        }
    }

    /// District value as shown in the form and summary.
    pub fn district_label(&self) -> &str {
        self.district.as_deref().unwrap_or(catalog::ALL_DISTRICTS)
    }

    /// Percent-encoded query string reproducing this selection, used by the
    /// download link so the export sees the same filtered set as the page.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("gu", self.district_label())
            .append_pair("year", &self.year_bracket)
            .append_pair("building", &self.building_type)
            .append_pair("area", &self.area_bracket)
            .append_pair("floor", &self.min_floor.to_string())
            .append_pair("min_budget", &format!("{:.1}", self.min_budget))
            .append_pair("max_budget", &format!("{:.1}", self.max_budget))
            .finish()
    }
}

/// Order a budget pair, reporting whether a swap was needed. Applying this
/// twice yields the same ordered pair.
pub fn normalize_budget(min: f64, max: f64) -> (f64, f64, bool) {
    if max < min {
        (max, min, true)
    } else {
        (min, max, false)
    }
}
