//! Grid building configuration.

/// Default grid cell edge length in meters.
pub const DEFAULT_STEP_METERS: f64 = 1000.0;

/// Corner classification runs sequentially unless enabled.
pub const DEFAULT_PARALLEL: bool = false;

/// Configuration for grid building.
///
/// # Example
///
/// ```
/// use polygrid::config::GridConfig;
///
/// let config = GridConfig::default();
/// assert_eq!(config.step_meters(), 1000.0);
/// assert!(!config.parallel());
///
/// let config = GridConfig::new(250.0).with_parallel(true);
/// assert_eq!(config.step_meters(), 250.0);
/// assert!(config.parallel());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Cell edge length in meters
    step_meters: f64,
    /// Classify candidate cells on the rayon thread pool
    parallel: bool,
}

impl GridConfig {
    /// Create a configuration with the given cell edge length.
    pub fn new(step_meters: f64) -> Self {
        Self {
            step_meters,
            parallel: DEFAULT_PARALLEL,
        }
    }

    /// Set the cell edge length in meters.
    pub fn with_step_meters(mut self, step_meters: f64) -> Self {
        self.step_meters = step_meters;
        self
    }

    /// Enable or disable parallel cell classification.
    ///
    /// Emission order does not depend on this setting.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Get the cell edge length in meters.
    pub fn step_meters(&self) -> f64 {
        self.step_meters
    }

    /// Whether cells are classified in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_METERS)
    }
}
