// geos.rs
//
// District centroids and the marker jitter. Coordinates are (lat, lon).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// City-center fallback used when a district name is unknown.
pub const DEFAULT_CENTER: (f64, f64) = (37.5665, 126.9780);

/// Jitter spread: each uniform draw maps into [-0.002, +0.002) degrees.
const JITTER_SPREAD: f64 = 0.004;

/// Seed multiplier decorrelating consecutive row indices.
const SEED_STRIDE: u64 = 7919;

/// Seoul district centroids, 25 entries.
pub const DISTRICT_CENTROIDS: &[(&str, f64, f64)] = &[
    ("종로구", 37.572950, 126.979357),
    ("중구", 37.563757, 126.997730),
    ("용산구", 37.532600, 126.990860),
    ("성동구", 37.563680, 127.036580),
    ("광진구", 37.538420, 127.082550),
    ("동대문구", 37.574400, 127.039390),
    ("중랑구", 37.606570, 127.092720),
    ("성북구", 37.589910, 127.016900),
    ("강북구", 37.639970, 127.025980),
    ("도봉구", 37.668530, 127.047980),
    ("노원구", 37.654290, 127.056950),
    ("은평구", 37.602570, 126.929620),
    ("서대문구", 37.579680, 126.936880),
    ("마포구", 37.566680, 126.901450),
    ("양천구", 37.516340, 126.866940),
    ("강서구", 37.550940, 126.849530),
    ("구로구", 37.495650, 126.887770),
    ("금천구", 37.456430, 126.895160),
    ("영등포구", 37.526640, 126.896210),
    ("동작구", 37.512650, 126.939930),
    ("관악구", 37.478090, 126.951590),
    ("서초구", 37.483570, 127.032660),
    ("강남구", 37.517200, 127.047320),
    ("송파구", 37.514560, 127.105570),
    ("강동구", 37.530130, 127.123820),
];

/// Centroid of a district, or the city-center fallback for unknown names.
pub fn district_center(district: &str) -> (f64, f64) {
    DISTRICT_CENTROIDS
        .iter()
        .find(|(name, _, _)| *name == district)
        .map(|(_, lat, lon)| (*lat, *lon))
        .unwrap_or(DEFAULT_CENTER)
}

/// Deterministic jittered coordinate for the row at `index` in the current
/// filtered result. Same (district, index) always yields the same point, so
/// markers hold still across re-renders of an unchanged result. The index is
/// positional, not a listing identity: a row re-jitters when filtering moves
/// it.
pub fn jittered_coord(district: &str, index: usize) -> (f64, f64) {
    let (lat, lon) = district_center(district);
    let mut rng = StdRng::seed_from_u64((index as u64).wrapping_mul(SEED_STRIDE));
    let d_lat = (rng.gen::<f64>() - 0.5) * JITTER_SPREAD;
    let d_lon = (rng.gen::<f64>() - 0.5) * JITTER_SPREAD;
    (lat + d_lat, lon + d_lon)
}
