//! Error types for extent and grid computation.

use thiserror::Error;

/// Errors that can occur while computing an extent or building a grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// The feature's geometry type is not supported (only `Polygon` is).
    #[error("unsupported geometry type {geometry_type}")]
    UnsupportedGeometry { geometry_type: String },

    /// The feature carries no geometry at all.
    #[error("feature has no geometry")]
    MissingGeometry,

    /// The polygon has no outer ring, or its outer ring has no vertices.
    #[error("polygon has an empty outer ring")]
    EmptyPolygon,

    /// Grid step is not a finite positive distance.
    #[error("invalid grid step: {0} (must be a finite number of meters > 0)")]
    InvalidStep(f64),
}

impl GridError {
    /// Build a [`GridError::UnsupportedGeometry`] for the given type tag.
    pub fn unsupported(geometry_type: impl Into<String>) -> Self {
        GridError::UnsupportedGeometry {
            geometry_type: geometry_type.into(),
        }
    }
}
