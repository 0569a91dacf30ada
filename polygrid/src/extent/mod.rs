//! Geographic extents of polygon features.
//!
//! An [`Extent`] is an axis-aligned west/south/east/north rectangle. It is
//! either read from a feature's existing bounding box or derived by scanning
//! the polygon's outer ring, in which case the result is cached back onto the
//! feature.
//!
//! # Example
//!
//! ```
//! use polygrid::extent::{extent, Extent};
//! use geojson::{Feature, GeoJson};
//!
//! let json = r#"{
//!     "type": "Feature",
//!     "properties": {},
//!     "geometry": {
//!         "type": "Polygon",
//!         "coordinates": [[[0, 0], [2, 0], [2, 1], [0, 1], [0, 0]]]
//!     }
//! }"#;
//! let mut feature = Feature::try_from(json.parse::<GeoJson>().unwrap()).unwrap();
//!
//! assert_eq!(extent(&mut feature).unwrap(), Extent::new(0.0, 0.0, 2.0, 1.0));
//! assert_eq!(feature.bbox, Some(vec![0.0, 0.0, 2.0, 1.0]));
//! ```

mod calculator;
mod types;

pub use calculator::{extent, resolve_extent};
pub use types::{Extent, SpatialRelation};
