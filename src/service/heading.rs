use crate::models::PositionSample;

/// Below this magnitude both atan2 components are treated as zero (about
/// 6 micrometres of arc on the Earth's surface).
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Heading of travel between the two latest samples of a car.
///
/// Returns `None` when there is no older sample or the bearing between the
/// two samples is undefined (identical coordinates, or a degenerate pair such
/// as two points on the same pole).
pub fn resolve_heading(newer: &PositionSample, older: Option<&PositionSample>) -> Option<f64> {
    let older = older?;
    initial_bearing(
        (older.latitude, older.longitude),
        (newer.latitude, newer.longitude),
    )
}

/// Initial great-circle bearing from `from` to `to`, both `(lat, lon)` in
/// degrees. The result is in degrees clockwise from true north, in `[0, 360)`.
pub fn initial_bearing(from: (f64, f64), to: (f64, f64)) -> Option<f64> {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    if ![lat1, lon1, lat2, lon2].iter().all(|v| v.is_finite()) {
        return None;
    }
    // -180 and 180 are the same meridian
    let lon_gap = (lon2 - lon1).rem_euclid(360.0);
    if lat1 == lat2 && (lon_gap == 0.0 || lon_gap == 360.0) {
        return None;
    }

    let delta_lon = (lon2 - lon1).to_radians();
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();

    let y = delta_lon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lon.cos();
    // cos(90°) is not exactly zero, so pole pairs only come out near zero
    if x.abs() < DEGENERATE_EPSILON && y.abs() < DEGENERATE_EPSILON {
        return None;
    }

    let heading = (y.atan2(x).to_degrees() + 360.0) % 360.0;
    // tiny negative angles round up to exactly 360
    if heading >= 360.0 {
        Some(0.0)
    } else {
        Some(heading)
    }
}
