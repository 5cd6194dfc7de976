use maud::{html, Markup};

use crate::domain::criteria::FilterCriteria;

/// Echo of the active criteria plus the matched-row count, with the
/// download link for the same selection.
pub fn summary_panel(criteria: &FilterCriteria, matched: usize) -> Markup {
    html! {
        div class="summary" {
            h4 { "🎯 현재 선택된 필터" }
            ul {
                li { b { "건축년도 구분" } ": " (criteria.year_bracket) }
                li { b { "건물 종류" } ": " (criteria.building_type) }
                li { b { "면적" } ": " (criteria.area_bracket) }
                li { b { "최소 층수(이상)" } ": " (criteria.min_floor) "층" }
                li { b { "예산 범위" } ": "
                    (format!("{:.1}", criteria.min_budget)) "억 ~ "
                    (format!("{:.1}", criteria.max_budget)) "억" }
                li { b { "선택한 구" } ": " (criteria.district_label()) }
            }
            p { "🔎 매물 수: " (matched) "건" }
            a href=(format!("/download.xlsx?{}", criteria.to_query_string())) {
                "필터 결과 내려받기 (.xlsx)"
            }
        }
    }
}
