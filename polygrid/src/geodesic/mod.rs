//! Spherical geodesic math.
//!
//! Great-circle bearing, distance and destination-point calculations on a
//! sphere with the mean Earth radius. All functions are total: degenerate
//! input (identical start and end) yields a well-defined value instead of an
//! error.
//!
//! Formulas follow <https://www.movable-type.co.uk/scripts/latlong.html>.

mod types;

pub use types::{
    Position, Ring, COORD_PRECISION, EARTH_RADIUS_METERS, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON,
};

use std::f64::consts::PI;

/// Converts an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Converts a ground distance in meters to its central angle in radians.
#[inline]
pub fn meters_to_radians(meters: f64) -> f64 {
    meters / EARTH_RADIUS_METERS
}

/// Initial bearing of the great-circle path from `start` to `end`.
///
/// Returns degrees clockwise from north in the range `[0, 360)`. When
/// `start == end` the result is `atan2(0, 0)`, i.e. `0.0`.
pub fn bearing(start: Position, end: Position) -> f64 {
    let lat1 = degrees_to_radians(start.lat);
    let lat2 = degrees_to_radians(end.lat);
    let delta_lon = degrees_to_radians(end.lon) - degrees_to_radians(start.lon);

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    (radians_to_degrees(y.atan2(x)) + 360.0) % 360.0
}

/// Great-circle distance between two positions in meters (haversine).
pub fn haversine_distance(start: Position, end: Position) -> f64 {
    let lat1 = degrees_to_radians(start.lat);
    let lat2 = degrees_to_radians(end.lat);
    let delta_lat = degrees_to_radians(end.lat - start.lat);
    let delta_lon = degrees_to_radians(end.lon - start.lon);

    // Rounding can push the term past 1.0 for near-antipodal pairs.
    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Destination reached travelling `distance_meters` from `origin` along the
/// great circle leaving at `bearing_degrees`.
///
/// Both ordinates of the result are rounded to [`COORD_PRECISION`] decimal
/// places so repeated projections stay comparable.
pub fn terminal(origin: Position, distance_meters: f64, bearing_degrees: f64) -> Position {
    let lat1 = degrees_to_radians(origin.lat);
    let lon1 = degrees_to_radians(origin.lon);
    let heading = degrees_to_radians(bearing_degrees);
    let angular = meters_to_radians(distance_meters);

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * heading.cos()).asin();
    let lon2 = lon1
        + (heading.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Position::new(
        round_coordinate(radians_to_degrees(lon2)),
        round_coordinate(radians_to_degrees(lat2)),
    )
}

/// Round a coordinate to [`COORD_PRECISION`] decimal places.
#[inline]
fn round_coordinate(value: f64) -> f64 {
    let factor = 10_f64.powi(COORD_PRECISION);
    (value * factor).round() / factor
}
