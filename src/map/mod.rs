pub mod markers;

use crate::geos;

/// Initial map view: a selected district gets its centroid close up, the
/// whole-city view sits at the default center zoomed out.
pub fn view_center(district: Option<&str>) -> ((f64, f64), u8) {
    match district {
        Some(gu) => (geos::district_center(gu), 13),
        None => (geos::DEFAULT_CENTER, 11),
    }
}
