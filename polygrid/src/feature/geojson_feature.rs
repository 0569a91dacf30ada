//! [`PolygonFeature`] for `geojson::Feature`.

use geojson::{Feature, JsonObject, Value};

use super::{ring_from_coords, PolygonFeature};
use crate::geodesic::Ring;

/// GeoJSON type name of a geometry value.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

impl PolygonFeature for Feature {
    fn geometry_type(&self) -> Option<&str> {
        self.geometry.as_ref().map(|g| type_name(&g.value))
    }

    fn rings(&self) -> Vec<Ring> {
        match self.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Polygon(rings)) => rings.iter().map(|r| ring_from_coords(r)).collect(),
            _ => Vec::new(),
        }
    }

    fn outer_ring(&self) -> Option<Ring> {
        match self.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Polygon(rings)) => rings.first().map(|r| ring_from_coords(r)),
            _ => None,
        }
    }

    fn bounding_box(&self) -> Option<&[f64]> {
        self.bbox.as_deref()
    }

    fn set_bounding_box(&mut self, bbox: [f64; 4]) {
        self.bbox = Some(bbox.to_vec());
    }

    fn properties(&self) -> Option<&JsonObject> {
        self.properties.as_ref()
    }
}
