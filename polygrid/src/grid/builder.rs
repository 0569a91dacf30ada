//! Grid construction over a feature's extent.

use std::sync::Arc;

use geojson::FeatureCollection;
use rayon::prelude::*;

use super::cell::{cells_to_feature_collection, Cell};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::extent::{extent, Extent};
use crate::feature::PolygonFeature;
use crate::geodesic::Position;
use crate::log::{Logger, NoOpLogger};
use crate::pip::{GeoPolygon, PointInPolygon};
use crate::sampler::points_on_line;
use crate::{log_debug, log_info};

/// Result of gridding one feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Extent the grid was laid over
    pub extent: Extent,
    /// Number of column boundaries sampled along the north edge
    pub columns: usize,
    /// Number of row boundaries sampled along the west edge
    pub rows: usize,
    /// Kept cells, columns outer and rows inner, both ascending
    pub cells: Vec<Cell>,
}

impl Grid {
    /// Number of candidate cells formed before classification.
    pub fn candidates(&self) -> usize {
        self.columns.saturating_sub(1) * self.rows.saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Encode the kept cells as a GeoJSON feature collection.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        cells_to_feature_collection(&self.cells)
    }
}

/// Partitions a polygon feature's extent into fixed-size cells.
///
/// # Example
///
/// ```
/// use polygrid::config::GridConfig;
/// use polygrid::grid::GridBuilder;
/// use geojson::{Feature, GeoJson};
///
/// let json = r#"{
///     "type": "Feature",
///     "properties": {"name": "unit square"},
///     "geometry": {
///         "type": "Polygon",
///         "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]
///     }
/// }"#;
/// let mut feature = Feature::try_from(json.parse::<GeoJson>().unwrap()).unwrap();
///
/// let grid = GridBuilder::new(GridConfig::default())
///     .to_grid(&mut feature, 27_798.0)
///     .unwrap();
/// assert_eq!(grid.len(), 20);
/// ```
pub struct GridBuilder {
    config: GridConfig,
    logger: Arc<dyn Logger>,
}

impl GridBuilder {
    /// Create a builder that logs nothing.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            logger: Arc::new(NoOpLogger),
        }
    }

    /// Route builder messages through the given logger.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Grid a feature using the configured step.
    pub fn grid<F: PolygonFeature>(&self, feature: &mut F) -> Result<Grid, GridError> {
        self.to_grid(feature, self.config.step_meters())
    }

    /// Grid a feature into cells of `step_meters` edge length.
    ///
    /// Cells are classified against the polygon's outer ring with the `geo`
    /// backed [`GeoPolygon`] oracle. The feature's bounding box may be cached
    /// as a side effect, see [`extent`](crate::extent::extent).
    pub fn to_grid<F: PolygonFeature>(
        &self,
        feature: &mut F,
        step_meters: f64,
    ) -> Result<Grid, GridError> {
        check_step(step_meters)?;
        let extent = extent(feature)?;
        let oracle = GeoPolygon::from_ring(&feature.outer_ring().unwrap_or_default());
        Ok(self.build(feature, extent, step_meters, &oracle))
    }

    /// Grid a feature, classifying cells with a caller-supplied oracle.
    pub fn to_grid_with<F, P>(
        &self,
        feature: &mut F,
        step_meters: f64,
        polygon: &P,
    ) -> Result<Grid, GridError>
    where
        F: PolygonFeature,
        P: PointInPolygon + ?Sized,
    {
        check_step(step_meters)?;
        let extent = extent(feature)?;
        Ok(self.build(feature, extent, step_meters, polygon))
    }

    fn build<F, P>(&self, feature: &F, extent: Extent, step_meters: f64, polygon: &P) -> Grid
    where
        F: PolygonFeature,
        P: PointInPolygon + ?Sized,
    {
        log_debug!(self.logger, "Gridding extent {} every {} m", extent, step_meters);

        let north_west = extent.north_west();
        let columns = points_on_line(
            north_west,
            Position::new(extent.east, extent.north),
            step_meters,
        );
        let rows = points_on_line(
            north_west,
            Position::new(extent.west, extent.south),
            step_meters,
        );
        log_debug!(
            self.logger,
            "Sampled {} column and {} row boundaries",
            columns.len(),
            rows.len()
        );

        let properties = feature.properties().cloned().map(Arc::new);
        let column_count = columns.len().saturating_sub(1);
        let total = column_count * rows.len().saturating_sub(1);

        // Candidates are classified as they are formed; rejected ones are
        // never stored.
        let (columns_ref, rows_ref, properties_ref) = (&columns, &rows, &properties);
        let column_cells = move |column: usize| {
            let (west, east) = (columns_ref[column].lon, columns_ref[column + 1].lon);
            rows_ref
                .windows(2)
                .enumerate()
                .filter_map(move |(row, bounds)| {
                    let extent = Extent::new(west, bounds[1].lat, east, bounds[0].lat);
                    let relation = extent.classify(polygon)?;
                    Some(Cell {
                        extent: extent.with_relation(relation),
                        column,
                        row,
                        properties: properties_ref.clone(),
                    })
                })
        };

        let cells: Vec<Cell> = if self.config.parallel() {
            (0..column_count)
                .into_par_iter()
                .flat_map_iter(column_cells)
                .collect()
        } else {
            (0..column_count).flat_map(column_cells).collect()
        };

        log_info!(self.logger, "Kept {} of {} grid cells", cells.len(), total);

        Grid {
            extent,
            columns: columns.len(),
            rows: rows.len(),
            cells,
        }
    }
}

fn check_step(step_meters: f64) -> Result<(), GridError> {
    if step_meters.is_finite() && step_meters > 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidStep(step_meters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extent::SpatialRelation;
    use geojson::{Feature, GeoJson};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn parse(json: &str) -> Feature {
        json.parse::<GeoJson>()
            .ok()
            .and_then(|g| Feature::try_from(g).ok())
            .expect("test feature should parse")
    }

    fn unit_square() -> Feature {
        parse(
            r#"{
                "type": "Feature",
                "properties": {"name": "unit"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]
                }
            }"#,
        )
    }

    fn builder() -> GridBuilder {
        GridBuilder::new(GridConfig::default())
    }

    #[test]
    fn test_unit_square_yields_twenty_cells() {
        let mut feature = unit_square();
        let grid = builder().to_grid(&mut feature, 27_798.0).unwrap();

        assert_eq!(grid.columns, 5);
        assert_eq!(grid.rows, 6);
        assert_eq!(grid.candidates(), 20);
        assert_eq!(grid.len(), 20);
    }

    #[test]
    fn test_emission_order_is_columns_then_rows() {
        let mut feature = unit_square();
        let grid = builder().to_grid(&mut feature, 27_798.0).unwrap();

        let order: Vec<(usize, usize)> = grid.cells.iter().map(|c| (c.column, c.row)).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert_eq!(order[0], (0, 0));
        assert_eq!(order[1], (0, 1));
    }

    #[test]
    fn test_cells_are_adjacent() {
        let mut feature = unit_square();
        let grid = builder().to_grid(&mut feature, 27_798.0).unwrap();

        let first = grid.cells[0].extent;
        let below = grid.cells[1].extent;
        assert_eq!(first.west, 0.0);
        assert_eq!(first.north, 1.0);
        assert_eq!(first.south, below.north);
        assert_eq!(first.west, below.west);
        assert!(first.north > first.south);
        assert!(first.east > first.west);
    }

    #[test]
    fn test_interior_cells_are_within() {
        let mut feature = unit_square();
        let grid = builder().to_grid(&mut feature, 27_798.0).unwrap();

        let interior = grid
            .cells
            .iter()
            .find(|c| c.column == 1 && c.row == 1)
            .expect("interior cell is kept");
        assert_eq!(interior.relation(), Some(SpatialRelation::Within));

        let overshooting = grid
            .cells
            .iter()
            .find(|c| c.column == 3 && c.row == 4)
            .expect("south-east cell is kept");
        assert_eq!(overshooting.relation(), Some(SpatialRelation::Touches));
    }

    #[test]
    fn test_properties_are_shared() {
        let mut feature = unit_square();
        let grid = builder().to_grid(&mut feature, 27_798.0).unwrap();

        let first = grid.cells[0].properties.as_ref().expect("properties");
        let last = grid.cells[grid.len() - 1]
            .properties
            .as_ref()
            .expect("properties");
        assert!(Arc::ptr_eq(first, last));
        assert_eq!(first.get("name").and_then(|v| v.as_str()), Some("unit"));
    }

    #[test]
    fn test_extent_is_cached_on_feature() {
        let mut feature = unit_square();
        builder().to_grid(&mut feature, 27_798.0).unwrap();
        assert_eq!(feature.bbox, Some(vec![0.0, 0.0, 1.0, 1.0]));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut sequential_feature = unit_square();
        let mut parallel_feature = unit_square();

        let sequential = builder().to_grid(&mut sequential_feature, 10_000.0).unwrap();
        let parallel = GridBuilder::new(GridConfig::default().with_parallel(true))
            .to_grid(&mut parallel_feature, 10_000.0)
            .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_cells_without_corners_inside_are_dropped() {
        let mut feature = unit_square();
        let nothing = |_: Position| false;
        let grid = builder()
            .to_grid_with(&mut feature, 27_798.0, &nothing)
            .unwrap();

        assert_eq!(grid.candidates(), 20);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_oracle_is_asked_four_times_per_cell() {
        let calls = AtomicUsize::new(0);
        let counting = |_: Position| {
            calls.fetch_add(1, Ordering::Relaxed);
            true
        };

        let mut feature = unit_square();
        let grid = builder()
            .to_grid_with(&mut feature, 27_798.0, &counting)
            .unwrap();

        assert_eq!(calls.load(Ordering::Relaxed), 4 * grid.candidates());
        assert!(grid
            .cells
            .iter()
            .all(|c| c.relation() == Some(SpatialRelation::Within)));
    }

    #[test]
    fn test_thin_strip_of_kept_cells() {
        let west_edge = |p: Position| p.lon <= 0.0;

        for parallel in [false, true] {
            let mut feature = unit_square();
            let grid = GridBuilder::new(GridConfig::default().with_parallel(parallel))
                .to_grid_with(&mut feature, 200.0, &west_edge)
                .unwrap();

            assert!(grid.candidates() > 250_000);
            assert_eq!(grid.len(), grid.rows - 1);
            assert!(grid.cells.iter().all(|c| c.column == 0));
            assert!(grid
                .cells
                .iter()
                .enumerate()
                .all(|(i, c)| c.row == i && c.relation() == Some(SpatialRelation::Touches)));
        }
    }

    #[test]
    fn test_triangle_drops_far_corner() {
        let mut feature = parse(
            r#"{
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0, 0], [1, 0], [0, 1], [0, 0]]]
                }
            }"#,
        );
        let grid = builder().to_grid(&mut feature, 27_798.0).unwrap();

        assert_eq!(grid.candidates(), 20);
        assert!(grid.len() < 20);
        assert!(grid
            .cells
            .iter()
            .all(|c| !(c.column == 3 && c.row == 0)));
    }

    #[test]
    fn test_unsupported_geometry_propagates() {
        let mut feature = parse(
            r#"{
                "type": "Feature",
                "properties": {},
                "geometry": {"type": "Point", "coordinates": [1, 1]}
            }"#,
        );
        assert_eq!(
            builder().to_grid(&mut feature, 1000.0),
            Err(GridError::unsupported("Point"))
        );
    }

    #[test]
    fn test_invalid_step_is_rejected_before_caching() {
        let mut feature = unit_square();
        for step in [0.0, -1.0, f64::NAN] {
            let result = builder().to_grid(&mut feature, step);
            assert!(matches!(result, Err(GridError::InvalidStep(_))));
        }
        assert!(feature.bbox.is_none());
    }

    #[test]
    fn test_grid_uses_configured_step() {
        let mut feature = unit_square();
        let grid = GridBuilder::new(GridConfig::new(27_798.0))
            .grid(&mut feature)
            .unwrap();
        assert_eq!(grid.len(), 20);
    }

    #[test]
    fn test_feature_collection_encoding() {
        let mut feature = unit_square();
        let grid = builder().to_grid(&mut feature, 27_798.0).unwrap();
        let collection = grid.to_feature_collection();
        assert_eq!(collection.features.len(), 20);
    }
}
