//! Point-in-polygon predicate.
//!
//! The grid builder treats point-in-polygon as an opaque boolean oracle. The
//! edge policy belongs to the oracle, not to the caller. [`GeoPolygon`] is the
//! default oracle, backed by the `geo` crate, and counts points on the
//! boundary as inside.

use geo::{Coord, Intersects, LineString, Polygon};

use crate::geodesic::Position;

/// Boolean oracle answering whether a position lies in a polygon.
///
/// Implementations must be `Sync` so corner classification can run on a
/// thread pool.
pub trait PointInPolygon: Sync {
    /// Returns `true` if `point` is inside the polygon.
    fn contains(&self, point: Position) -> bool;
}

impl<F> PointInPolygon for F
where
    F: Fn(Position) -> bool + Sync,
{
    fn contains(&self, point: Position) -> bool {
        self(point)
    }
}

/// Polygon oracle built from an outer ring. Holes are not modelled.
#[derive(Debug, Clone)]
pub struct GeoPolygon {
    polygon: Polygon<f64>,
}

impl GeoPolygon {
    /// Build an oracle from an outer ring.
    ///
    /// An empty ring produces an oracle that contains nothing.
    pub fn from_ring(ring: &[Position]) -> Self {
        let exterior: LineString<f64> = ring
            .iter()
            .map(|p| Coord { x: p.lon, y: p.lat })
            .collect();
        Self {
            polygon: Polygon::new(exterior, Vec::new()),
        }
    }
}

impl PointInPolygon for GeoPolygon {
    fn contains(&self, point: Position) -> bool {
        self.polygon.intersects(&Coord {
            x: point.lon,
            y: point.lat,
        })
    }
}
