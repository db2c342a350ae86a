use crate::{
    constants::{Weight, EARTH_RADIUS_KM},
    graph::Station,
};

/// Great-circle distance in kilometers between two points given in degrees.
///
/// Uses the haversine formula. The result is bit-for-bit symmetric in its
/// arguments, `NaN` and infinite inputs are not guarded.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Weight {
    // abs() keeps the half-angle identical regardless of argument order
    let d_lat = (lat2 - lat1).abs().to_radians() / 2.0;
    let d_lon = (lon2 - lon1).abs().to_radians() / 2.0;

    let a = d_lat.sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * d_lon.sin().powi(2);
    // Rounding can push `a` just past 1 near antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Shorthand for [`haversine`] on two stations.
pub fn distance(src: &Station, dst: &Station) -> Weight {
    haversine(src.lat, src.lon, dst.lat, dst.lon)
}
