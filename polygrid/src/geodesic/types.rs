//! Geodesic type definitions

use std::fmt;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Number of decimal places kept on projected coordinates.
///
/// 8 decimals of a degree is roughly 1.11 mm on the ground.
pub const COORD_PRECISION: i32 = 8;

/// A geographic position in decimal degrees.
///
/// Ordered the way GeoJSON orders it: longitude first, then latitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Longitude (east-west), -180 to 180
    pub lon: f64,
    /// Latitude (north-south), -90 to 90
    pub lat: f64,
}

impl Position {
    /// Create a new position from longitude and latitude.
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Build a position from a GeoJSON-style coordinate slice.
    ///
    /// Extra ordinates (altitude) are ignored. Returns `None` when the
    /// slice holds fewer than two numbers.
    pub fn from_slice(coords: &[f64]) -> Option<Self> {
        match coords {
            [lon, lat, ..] => Some(Self::new(*lon, *lat)),
            _ => None,
        }
    }

    /// Whether both ordinates fall within the valid geographic ranges.
    pub fn is_valid(&self) -> bool {
        (MIN_LON..=MAX_LON).contains(&self.lon) && (MIN_LAT..=MAX_LAT).contains(&self.lat)
    }

    /// Returns the position as a `[lon, lat]` pair.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<[f64; 2]> for Position {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl From<(f64, f64)> for Position {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<Position> for [f64; 2] {
    fn from(position: Position) -> Self {
        position.to_array()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

/// A closed sequence of positions, first element equal to last.
pub type Ring = Vec<Position>;
