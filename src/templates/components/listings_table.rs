use maud::{html, Markup};

use crate::domain::listing::Listing;
use crate::map::markers::fmt_area;

fn dash_or<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Full filtered result with the original column set, inside an expander.
pub fn listings_table(filtered: &[&Listing]) -> Markup {
    html! {
        details {
            summary { "🏠 조건에 맞는 집 목록 보기 (모든 컬럼)" }
            @if filtered.is_empty() {
                p { "조건에 맞는 매물이 없습니다." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "자치구명" }
                            th { "법정동명" }
                            th { "건물명" }
                            th { "건물용도" }
                            th { "건축년도구분" }
                            th { "건축년도" }
                            th { "건물면적구분" }
                            th { "건물면적(평)" }
                            th { "층" }
                            th { "물건금액(억)" }
                        }
                    }
                    tbody {
                        @for listing in filtered {
                            tr {
                                td { (listing.district) }
                                td { (listing.subdivision) }
                                td { (listing.display_name()) }
                                td { (listing.building_type) }
                                td { (listing.year_bracket) }
                                td { (dash_or(&listing.built_year)) }
                                td { (listing.area_bracket) }
                                td { (fmt_area(listing.area)) }
                                td { (dash_or(&listing.floor)) }
                                td { (listing.price) }
                            }
                        }
                    }
                }
            }
        }
    }
}
