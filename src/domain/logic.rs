// src/domain/logic.rs

use crate::domain::criteria::FilterCriteria;
use crate::domain::listing::Listing;

/// Check a single listing against every active predicate.
///
/// Categorical fields use exact equality, so a record carrying a value
/// outside the fixed option lists can never match. Both budget bounds are
/// inclusive. A missing floor compares as ground level.
#[inline]
pub fn matches_criteria(listing: &Listing, criteria: &FilterCriteria) -> bool {
    if listing.year_bracket != criteria.year_bracket {
        return false;
    }

    if listing.building_type != criteria.building_type {
        return false;
    }

    if listing.area_bracket != criteria.area_bracket {
        return false;
    }

    if listing.floor_or_ground() < criteria.min_floor {
        return false;
    }

    if listing.price < criteria.min_budget || listing.price > criteria.max_budget {
        return false;
    }

    if let Some(district) = &criteria.district {
        if listing.district != *district {
            return false;
        }
    }

    true
}

/// Filter the dataset, keeping source row order. Pure: no side effects, and
/// an empty result is a normal outcome rather than an error.
pub fn filter_listings<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| matches_criteria(listing, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_listing() -> Listing {
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

    fn test_criteria() -> FilterCriteria {
        FilterCriteria {
            district: Some("강남구".to_string()),
            year_bracket: "2010년대".to_string(),
            building_type: "아파트".to_string(),
            area_bracket: "30평대".to_string(),
            min_floor: 0,
            min_budget: 0.0,
            max_budget: 20.0,
            budget_swapped: false,
        }
    }

    #[test]
    fn test_full_match() {
        assert!(matches_criteria(&test_listing(), &test_criteria()));
    }

    #[test]
    fn test_fail_year_bracket() {
        let mut listing = test_listing();
        listing.year_bracket = "1990년대".to_string();
        assert!(!matches_criteria(&listing, &test_criteria()));
    }

    #[test]
    fn test_fail_building_type() {
        let mut listing = test_listing();
        listing.building_type = "오피스텔".to_string();
        assert!(!matches_criteria(&listing, &test_criteria()));
    }

    #[test]
    fn test_fail_area_bracket() {
        let mut listing = test_listing();
        listing.area_bracket = "20평대".to_string();
        assert!(!matches_criteria(&listing, &test_criteria()));
    }

    #[test]
    fn test_min_floor_treats_missing_as_ground() {
        let mut listing = test_listing();
        listing.floor = None;

        let mut criteria = test_criteria();
        assert!(matches_criteria(&listing, &criteria));

        criteria.min_floor = 1;
        assert!(!matches_criteria(&listing, &criteria));

        // Below-ground requests still match a missing floor.
        criteria.min_floor = -2;
        assert!(matches_criteria(&listing, &criteria));
    }

    #[test]
    fn test_budget_bounds_are_inclusive() {
        let mut criteria = test_criteria();
        criteria.min_budget = 12.5;
        criteria.max_budget = 12.5;
        assert!(matches_criteria(&test_listing(), &criteria));

        criteria.min_budget = 12.6;
        criteria.max_budget = 20.0;
        assert!(!matches_criteria(&test_listing(), &criteria));

        criteria.min_budget = 0.0;
        criteria.max_budget = 12.4;
        assert!(!matches_criteria(&test_listing(), &criteria));
    }

    #[test]
    fn test_district_all_vs_specific() {
        let mut criteria = test_criteria();
        criteria.district = None;
        assert!(matches_criteria(&test_listing(), &criteria));

        criteria.district = Some("송파구".to_string());
        assert!(!matches_criteria(&test_listing(), &criteria));
    }

    #[test]
    fn test_out_of_catalog_value_never_matches() {
        let mut listing = test_listing();
        listing.year_bracket = "2010 년대".to_string(); // stray space, not a catalog member
        assert!(!matches_criteria(&listing, &test_criteria()));
    }

    #[test]
    fn test_filter_preserves_order_and_multiplicity() {
        let mut second = test_listing();
        second.building_name = Some("이편한세상".to_string());
        second.price = 9.0;

        let mut skipped = test_listing();
        skipped.price = 30.0;

        let rows = vec![test_listing(), skipped, second];
        let filtered = filter_listings(&rows, &test_criteria());

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].display_name(), "래미안");
        assert_eq!(filtered[1].display_name(), "이편한세상");
    }

    #[test]
    fn test_empty_result_is_silent() {
        let mut criteria = test_criteria();
        criteria.min_floor = 10;
        let rows = vec![test_listing()];
        assert!(filter_listings(&rows, &criteria).is_empty());
    }
}
