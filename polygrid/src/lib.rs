//! Polygrid - geodesic extents and grid tiling for GeoJSON polygons
//!
//! This library computes the bounding extent of a polygon feature and lays a
//! regular grid of roughly `step`-meter cells over it, keeping each cell that
//! touches or lies within the polygon. Distances follow great circles on a
//! spherical Earth.
//!
//! # High-Level API
//!
//! ```
//! use geojson::{Feature, GeoJson};
//! use polygrid::config::GridConfig;
//! use polygrid::grid::GridBuilder;
//!
//! let json = r#"{
//!     "type": "Feature",
//!     "properties": {},
//!     "geometry": {
//!         "type": "Polygon",
//!         "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]
//!     }
//! }"#;
//! let mut feature = Feature::try_from(json.parse::<GeoJson>().unwrap()).unwrap();
//!
//! let extent = polygrid::extent::extent(&mut feature).unwrap();
//! assert_eq!(extent.to_bbox(), [0.0, 0.0, 1.0, 1.0]);
//!
//! let grid = GridBuilder::new(GridConfig::default())
//!     .to_grid(&mut feature, 27_798.0)
//!     .unwrap();
//! let encoded = serde_json::to_string(&grid.to_feature_collection()).unwrap();
//! assert!(encoded.contains("\"relation\":\"within\""));
//! ```

pub mod config;
pub mod error;
pub mod extent;
pub mod feature;
pub mod geodesic;
pub mod grid;
pub mod log;
pub mod logging;
pub mod pip;
pub mod sampler;

pub use error::GridError;
pub use extent::{Extent, SpatialRelation};
pub use feature::PolygonFeature;
pub use geodesic::Position;
pub use grid::{Cell, Grid, GridBuilder};

/// Version of the polygrid library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
