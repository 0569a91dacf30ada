//! Common types and utilities shared across CLI commands.

use geojson::{Feature, GeoJson};
use polygrid::geodesic::Position;
use polygrid::GridError;
use std::path::Path;
use tracing::warn;

use crate::error::CliError;

/// Read a GeoJSON Feature or FeatureCollection file into its features.
pub fn read_features(path: &Path) -> Result<Vec<Feature>, CliError> {
    let text = std::fs::read_to_string(path).map_err(|error| CliError::InputRead {
        path: path.display().to_string(),
        error,
    })?;

    let geojson: GeoJson = text.parse().map_err(|e: geojson::Error| CliError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    match geojson {
        GeoJson::Feature(feature) => Ok(vec![feature]),
        GeoJson::FeatureCollection(collection) => Ok(collection.features),
        GeoJson::Geometry(_) => Err(CliError::Parse {
            path: path.display().to_string(),
            reason: "expected a Feature or FeatureCollection, found a bare geometry".to_string(),
        }),
    }
}

/// Skip features whose geometry is not a polygon, fail on anything else.
///
/// Returns `Ok(None)` for a skipped feature.
pub fn skip_unsupported<T>(index: usize, result: Result<T, GridError>) -> Result<Option<T>, CliError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(GridError::UnsupportedGeometry { geometry_type }) => {
            warn!("Skipping feature {}: {} is not a Polygon", index, geometry_type);
            Ok(None)
        }
        Err(e) => Err(CliError::Grid(e)),
    }
}

/// Parse a `LON,LAT` pair in decimal degrees.
pub fn parse_position(s: &str) -> Result<Position, String> {
    let (lon, lat) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LON,LAT but got '{}'", s))?;

    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;

    let position = Position::new(lon, lat);
    if !position.is_valid() {
        return Err(format!(
            "{} is out of range (longitude -180..180, latitude -90..90)",
            position
        ));
    }
    Ok(position)
}
