//! Grid tiling of polygon features.
//!
//! A [`GridBuilder`] lays a regular grid over a feature's [`Extent`], with
//! boundaries sampled every `step_meters` along great circles from the
//! north-west corner:
//!
//! - column boundaries along the north edge, west to east
//! - row boundaries along the west edge, north to south
//!
//! Each candidate cell is classified by how many of its corners fall inside
//! the polygon. Cells with no corner inside are dropped; the rest are kept as
//! [`Cell`]s tagged `touches` or `within`.
//!
//! [`Extent`]: crate::extent::Extent

mod builder;
mod cell;

pub use builder::{Grid, GridBuilder};
pub use cell::{cells_to_feature_collection, Cell, RELATION_MEMBER};
