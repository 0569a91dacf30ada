//! Grid cells and their GeoJSON encoding.

use std::sync::Arc;

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

use crate::extent::{Extent, SpatialRelation};

/// Foreign member carrying a cell's relation on its encoded feature.
pub const RELATION_MEMBER: &str = "relation";

/// A kept grid cell.
///
/// The extent's relation is always set. Properties are shared with the parent
/// feature and every sibling cell through one `Arc`, not copied per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Cell rectangle, tagged with its relation to the source polygon
    pub extent: Extent,
    /// Column index (west to east)
    pub column: usize,
    /// Row index (north to south)
    pub row: usize,
    /// Properties inherited from the parent feature
    pub properties: Option<Arc<JsonObject>>,
}

impl Cell {
    /// Relation of the cell to the source polygon.
    pub fn relation(&self) -> Option<SpatialRelation> {
        self.extent.relation
    }

    /// Encode the cell as a GeoJSON polygon feature.
    ///
    /// The geometry is the closed ring `[sw, nw, ne, se, sw]` and the bounding
    /// box uses the `[w, s, e, n]` order. The relation is written as a
    /// `"relation"` foreign member.
    pub fn to_feature(&self) -> Feature {
        let ring = self
            .extent
            .to_ring()
            .into_iter()
            .map(|p| vec![p.lon, p.lat])
            .collect();

        let foreign_members = self.relation().map(|relation| {
            let mut members = JsonObject::new();
            members.insert(
                RELATION_MEMBER.to_string(),
                JsonValue::from(relation.as_str()),
            );
            members
        });

        Feature {
            bbox: Some(self.extent.to_bbox().to_vec()),
            geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
            id: None,
            properties: self.properties.as_deref().cloned(),
            foreign_members,
        }
    }
}

/// Encode cells as a GeoJSON feature collection, preserving order.
pub fn cells_to_feature_collection(cells: &[Cell]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: cells.iter().map(Cell::to_feature).collect(),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cell(properties: Option<Arc<JsonObject>>) -> Cell {
        Cell {
            extent: Extent::new(1.0, 2.0, 3.0, 4.0).with_relation(SpatialRelation::Touches),
            column: 0,
            row: 1,
            properties,
        }
    }

    #[test]
    fn test_feature_geometry_is_closed_rectangle() {
        let feature = sample_cell(None).to_feature();
        let geometry = feature.geometry.expect("cell has geometry");

        match geometry.value {
            Value::Polygon(rings) => {
                assert_eq!(rings.len(), 1);
                assert_eq!(
                    rings[0],
                    vec![
                        vec![1.0, 2.0],
                        vec![1.0, 4.0],
                        vec![3.0, 4.0],
                        vec![3.0, 2.0],
                        vec![1.0, 2.0],
                    ]
                );
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_feature_bbox_is_west_south_east_north() {
        let feature = sample_cell(None).to_feature();
        assert_eq!(feature.bbox, Some(vec![1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_feature_carries_relation() {
        let feature = sample_cell(None).to_feature();
        let members = feature.foreign_members.expect("relation member");
        assert_eq!(
            members.get(RELATION_MEMBER),
            Some(&JsonValue::from("touches"))
        );
    }

    #[test]
    fn test_feature_copies_properties() {
        let mut props = JsonObject::new();
        props.insert("name".to_string(), JsonValue::from("park"));
        let feature = sample_cell(Some(Arc::new(props.clone()))).to_feature();
        assert_eq!(feature.properties, Some(props));
    }

    #[test]
    fn test_collection_preserves_order() {
        let mut second = sample_cell(None);
        second.extent = Extent::new(3.0, 2.0, 5.0, 4.0).with_relation(SpatialRelation::Within);
        let collection = cells_to_feature_collection(&[sample_cell(None), second]);

        assert_eq!(collection.features.len(), 2);
        assert_eq!(collection.features[1].bbox, Some(vec![3.0, 2.0, 5.0, 4.0]));
    }
}
