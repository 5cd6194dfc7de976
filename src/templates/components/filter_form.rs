use maud::{html, Markup};

use crate::catalog;
use crate::domain::criteria::FilterCriteria;
use crate::geos;

/// Sidebar filter form. Submits as a GET query so the whole page (map,
/// summary, table) recomputes from the URL.
pub fn filter_form(criteria: &FilterCriteria, max_price: f64) -> Markup {
    html! {
        form class="sidebar" method="get" action="/" {
            h4 { "🔎 필터 조건 선택" }

            label for="gu" { "서울의 구 선택" }
            select id="gu" name="gu" {
                option value=(catalog::ALL_DISTRICTS)
                    selected[criteria.district.is_none()] { (catalog::ALL_DISTRICTS) }
                @for (gu, _, _) in geos::DISTRICT_CENTROIDS {
                    option value=(gu) selected[criteria.district.as_deref() == Some(*gu)] { (gu) }
                }
            }

            label for="year" { "건축년도 구분" }
            select id="year" name="year" {
                @for bracket in catalog::YEAR_BRACKETS {
                    option value=(bracket) selected[criteria.year_bracket == *bracket] { (bracket) }
                }
            }

            label for="building" { "건물 종류" }
            select id="building" name="building" {
                @for kind in catalog::BUILDING_TYPES {
                    option value=(kind) selected[criteria.building_type == *kind] { (kind) }
                }
            }

            label for="area" { "면적 (평)" }
            select id="area" name="area" {
                @for bracket in catalog::AREA_BRACKETS {
                    option value=(bracket) selected[criteria.area_bracket == *bracket] { (bracket) }
                }
            }

            label for="floor" { "최소 층수 (이상)" }
            // Below-ground floors are negative; allow them.
            input id="floor" name="floor" type="number" step="1" value=(criteria.min_floor);

            label for="min_budget" { "최소 예산 (억)" }
            input id="min_budget" name="min_budget" type="number" min="0" step="0.1"
                value=(format!("{:.1}", criteria.min_budget));

            label for="max_budget" { "최대 예산 (억)" }
            input id="max_budget" name="max_budget" type="number" min="0" step="0.1"
                value=(format!("{:.1}", criteria.max_budget))
                placeholder=(format!("{:.1}", max_price));

            @if criteria.budget_swapped {
                p class="warning" { "최대 예산이 최소 예산보다 작습니다. 값을 바꿔 적용했습니다." }
            }

            button type="submit" { "적용" }
        }
    }
}
