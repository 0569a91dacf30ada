//! Extent type definitions

use std::fmt;

use crate::geodesic::{Position, Ring};
use crate::pip::PointInPolygon;

/// Spatial relation between a grid cell and its source polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpatialRelation {
    /// Some, but not all, corners of the cell lie inside the polygon.
    Touches,
    /// All four corners of the cell lie inside the polygon.
    Within,
}

impl SpatialRelation {
    /// Lowercase name used when encoding a cell.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpatialRelation::Touches => "touches",
            SpatialRelation::Within => "within",
        }
    }
}

impl fmt::Display for SpatialRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis-aligned rectangle in longitude/latitude degrees.
///
/// `relation` is only set on extents produced as classified grid cells.
/// `west <= east` and `south <= north` hold for well-formed input but are not
/// enforced: a pre-existing bounding box is taken as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
    pub relation: Option<SpatialRelation>,
}

impl Extent {
    /// Create an unclassified extent.
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
            relation: None,
        }
    }

    /// Create an extent from a `[w, s, e, n]` bounding box.
    pub fn from_bbox([west, south, east, north]: [f64; 4]) -> Self {
        Self::new(west, south, east, north)
    }

    /// Returns the extent as a `[w, s, e, n]` bounding box.
    pub fn to_bbox(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }

    /// Returns a copy tagged with the given relation.
    pub fn with_relation(mut self, relation: SpatialRelation) -> Self {
        self.relation = Some(relation);
        self
    }

    pub fn south_west(&self) -> Position {
        Position::new(self.west, self.south)
    }

    pub fn north_west(&self) -> Position {
        Position::new(self.west, self.north)
    }

    pub fn north_east(&self) -> Position {
        Position::new(self.east, self.north)
    }

    pub fn south_east(&self) -> Position {
        Position::new(self.east, self.south)
    }

    /// Corners in `[sw, nw, ne, se]` order.
    pub fn corners(&self) -> [Position; 4] {
        [
            self.south_west(),
            self.north_west(),
            self.north_east(),
            self.south_east(),
        ]
    }

    /// Closed ring `[sw, nw, ne, se, sw]` tracing the rectangle.
    pub fn to_ring(&self) -> Ring {
        let [sw, nw, ne, se] = self.corners();
        vec![sw, nw, ne, se, sw]
    }

    /// Whether `point` lies within the rectangle, edges included.
    pub fn contains(&self, point: Position) -> bool {
        (self.west..=self.east).contains(&point.lon)
            && (self.south..=self.north).contains(&point.lat)
    }

    /// Classify the rectangle against a polygon by testing its four corners.
    ///
    /// Returns `None` when no corner is inside (the cell is dropped),
    /// [`SpatialRelation::Touches`] for one to three corners and
    /// [`SpatialRelation::Within`] for all four. A polygon edge crossing the
    /// cell without enclosing any corner is not detected.
    pub fn classify<P: PointInPolygon + ?Sized>(&self, polygon: &P) -> Option<SpatialRelation> {
        let inside = self
            .corners()
            .iter()
            .filter(|corner| polygon.contains(**corner))
            .count();

        match inside {
            0 => None,
            4 => Some(SpatialRelation::Within),
            _ => Some(SpatialRelation::Touches),
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.west, self.south, self.east, self.north
        )
    }
}
