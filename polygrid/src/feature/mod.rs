//! Feature capability interface.
//!
//! Extent and grid computation do not own a feature format. They read a
//! feature through the [`PolygonFeature`] trait: its geometry type, its
//! polygon rings, its optional bounding box and its properties. The only
//! write is [`PolygonFeature::set_bounding_box`], used to cache a computed
//! extent.
//!
//! [`geojson::Feature`] implements the trait out of the box.

mod geojson_feature;

use geojson::JsonObject;

use crate::geodesic::{Position, Ring};

/// Geometry type tag of the only supported geometry.
pub const POLYGON: &str = "Polygon";

/// Read access (plus a bounding-box cache write) to a polygon feature.
pub trait PolygonFeature {
    /// Geometry type tag (e.g. `"Polygon"`), or `None` when the feature has
    /// no geometry.
    fn geometry_type(&self) -> Option<&str>;

    /// All polygon rings, outer ring first. Empty for non-polygon geometry.
    fn rings(&self) -> Vec<Ring>;

    /// The outer (boundary) ring of the polygon, if any.
    fn outer_ring(&self) -> Option<Ring> {
        self.rings().into_iter().next()
    }

    /// Existing bounding box, if the feature carries one.
    fn bounding_box(&self) -> Option<&[f64]>;

    /// Cache a bounding box onto the feature, in `[w, s, e, n]` order.
    fn set_bounding_box(&mut self, bbox: [f64; 4]);

    /// Free-form properties carried through unchanged.
    fn properties(&self) -> Option<&JsonObject>;
}

/// Convert GeoJSON coordinates into a ring, skipping malformed positions.
pub(crate) fn ring_from_coords(coords: &[geojson::Position]) -> Ring {
    coords
        .iter()
        .filter_map(|c| Position::from_slice(c))
        .collect()
}
