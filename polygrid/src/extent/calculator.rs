//! Extent derivation for polygon features.

use super::types::Extent;
use crate::error::GridError;
use crate::feature::{PolygonFeature, POLYGON};

/// Compute a feature's extent without touching the feature.
///
/// Returns the extent together with the bounding box that should be cached
/// onto the feature, if any. A pre-existing bounding box is authoritative and
/// yields no cache write. Otherwise the outer ring of a `Polygon` is scanned;
/// holes are ignored.
///
/// A 2D bounding box (`[w, s, e, n]`) and a 3D one
/// (`[w, s, zmin, e, n, zmax]`) are both accepted. Bounding boxes of any
/// other length are treated as absent.
///
/// # Errors
///
/// - [`GridError::UnsupportedGeometry`] for any geometry other than `Polygon`
/// - [`GridError::MissingGeometry`] when there is no geometry to scan
/// - [`GridError::EmptyPolygon`] when the outer ring has no vertices
pub fn resolve_extent<F>(feature: &F) -> Result<(Extent, Option<[f64; 4]>), GridError>
where
    F: PolygonFeature + ?Sized,
{
    if let Some(extent) = feature.bounding_box().and_then(extent_from_bbox) {
        return Ok((extent, None));
    }

    match feature.geometry_type() {
        Some(POLYGON) => {
            let ring = feature.outer_ring().unwrap_or_default();
            let (first, rest) = ring.split_first().ok_or(GridError::EmptyPolygon)?;

            let mut extent = Extent::new(first.lon, first.lat, first.lon, first.lat);
            for p in rest {
                extent.west = extent.west.min(p.lon);
                extent.south = extent.south.min(p.lat);
                extent.east = extent.east.max(p.lon);
                extent.north = extent.north.max(p.lat);
            }

            Ok((extent, Some(extent.to_bbox())))
        }
        Some(other) => Err(GridError::unsupported(other)),
        None => Err(GridError::MissingGeometry),
    }
}

/// Compute a feature's extent, caching it onto the feature.
///
/// When the feature has no bounding box, the computed `[w, s, e, n]` box is
/// written back with [`PolygonFeature::set_bounding_box`]. Later calls then
/// short-circuit to the cached value. This is the only mutation performed on
/// the feature.
pub fn extent<F>(feature: &mut F) -> Result<Extent, GridError>
where
    F: PolygonFeature + ?Sized,
{
    let (extent, cache) = resolve_extent(feature)?;
    if let Some(bbox) = cache {
        feature.set_bounding_box(bbox);
    }
    Ok(extent)
}

fn extent_from_bbox(bbox: &[f64]) -> Option<Extent> {
    match *bbox {
        [west, south, east, north] => Some(Extent::new(west, south, east, north)),
        [west, south, _, east, north, _] => Some(Extent::new(west, south, east, north)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Feature, GeoJson};

    fn parse(json: &str) -> Feature {
        json.parse::<GeoJson>()
            .ok()
            .and_then(|g| Feature::try_from(g).ok())
            .expect("test feature should parse")
    }

    const WITH_BBOX: &str = r#"{
        "type": "Feature",
        "properties": {},
        "bbox": [-74.004862, 40.726251, -73.999586, 40.730316],
        "geometry": {
            "type": "Polygon",
            "coordinates": [[
                [-74.004862, 40.726251],
                [-73.999586, 40.726251],
                [-73.999586, 40.730316],
                [-74.004862, 40.730316],
                [-74.004862, 40.726251]
            ]]
        }
    }"#;

    const WITHOUT_BBOX: &str = r#"{
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "Polygon",
            "coordinates": [[
                [-74.004862, 40.726251],
                [-73.999586, 40.726251],
                [-73.999586, 40.730316],
                [-74.004862, 40.730316],
                [-74.004862, 40.726251]
            ]]
        }
    }"#;

    const EXPECTED: Extent = Extent::new(-74.004862, 40.726251, -73.999586, 40.730316);

    #[test]
    fn test_existing_bbox_is_returned() {
        let mut feature = parse(WITH_BBOX);
        assert_eq!(extent(&mut feature), Ok(EXPECTED));
    }

    #[test]
    fn test_existing_bbox_is_authoritative() {
        // The bbox does not match the geometry at all; it wins anyway.
        let mut feature = parse(WITH_BBOX);
        feature.bbox = Some(vec![1.0, 2.0, 3.0, 4.0]);

        assert_eq!(extent(&mut feature), Ok(Extent::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(feature.bbox, Some(vec![1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_existing_bbox_needs_no_cache_write() {
        let feature = parse(WITH_BBOX);
        let (_, cache) = resolve_extent(&feature).unwrap();
        assert!(cache.is_none());
    }

    #[test]
    fn test_three_dimensional_bbox() {
        let mut feature = parse(WITHOUT_BBOX);
        feature.bbox = Some(vec![1.0, 2.0, -10.0, 3.0, 4.0, 10.0]);
        assert_eq!(extent(&mut feature), Ok(Extent::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_malformed_bbox_falls_back_to_geometry() {
        let mut feature = parse(WITHOUT_BBOX);
        feature.bbox = Some(vec![1.0, 2.0]);
        assert_eq!(extent(&mut feature), Ok(EXPECTED));
    }

    #[test]
    fn test_computed_from_outer_ring() {
        let mut feature = parse(WITHOUT_BBOX);
        assert_eq!(extent(&mut feature), Ok(EXPECTED));
    }

    #[test]
    fn test_computed_bbox_is_cached() {
        let mut feature = parse(WITHOUT_BBOX);
        assert!(feature.bbox.is_none());

        extent(&mut feature).unwrap();

        assert_eq!(feature.bbox, Some(EXPECTED.to_bbox().to_vec()));
    }

    #[test]
    fn test_resolve_does_not_mutate() {
        let feature = parse(WITHOUT_BBOX);
        let (got, cache) = resolve_extent(&feature).unwrap();

        assert_eq!(got, EXPECTED);
        assert_eq!(cache, Some(EXPECTED.to_bbox()));
        assert!(feature.bbox.is_none());
    }

    #[test]
    fn test_extent_is_idempotent() {
        let mut feature = parse(WITHOUT_BBOX);
        let first = extent(&mut feature).unwrap();
        let second = extent(&mut feature).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_holes_are_ignored() {
        let mut feature = parse(
            r#"{
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [
                        [[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]],
                        [[-5, -5], [5, -5], [5, 5], [-5, 5], [-5, -5]]
                    ]
                }
            }"#,
        );
        assert_eq!(extent(&mut feature), Ok(Extent::new(0.0, 0.0, 2.0, 2.0)));
    }

    #[test]
    fn test_irregular_ring() {
        let mut feature = parse(
            r#"{
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [
                        [[3, 1], [7, -2], [9, 4], [5, 8], [1, 5], [3, 1]]
                    ]
                }
            }"#,
        );
        assert_eq!(extent(&mut feature), Ok(Extent::new(1.0, -2.0, 9.0, 8.0)));
    }

    #[test]
    fn test_point_is_unsupported() {
        let mut feature = parse(
            r#"{
                "type": "Feature",
                "properties": {},
                "geometry": {"type": "Point", "coordinates": [1, 1]}
            }"#,
        );
        assert_eq!(
            extent(&mut feature),
            Err(GridError::UnsupportedGeometry {
                geometry_type: "Point".to_string()
            })
        );
        assert!(feature.bbox.is_none());
    }

    #[test]
    fn test_missing_geometry() {
        let mut feature = parse(r#"{"type": "Feature", "properties": {}, "geometry": null}"#);
        assert_eq!(extent(&mut feature), Err(GridError::MissingGeometry));
    }

    #[test]
    fn test_empty_polygon() {
        let mut feature = parse(
            r#"{
                "type": "Feature",
                "properties": {},
                "geometry": {"type": "Polygon", "coordinates": []}
            }"#,
        );
        assert_eq!(extent(&mut feature), Err(GridError::EmptyPolygon));
    }
}
