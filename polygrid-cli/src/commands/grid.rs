//! `polygrid grid` command.

use clap::Args;
use polygrid::grid::cells_to_feature_collection;
use std::path::PathBuf;
use tracing::info;

use super::common::{read_features, skip_unsupported};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the grid command.
#[derive(Debug, Args)]
pub struct GridArgs {
    /// GeoJSON Feature or FeatureCollection file
    pub input: PathBuf,

    /// Cell edge length in meters (default: grid.step_meters from config)
    #[arg(long)]
    pub step: Option<f64>,

    /// Write the FeatureCollection here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Classify cells in parallel; `--parallel false` overrides the config
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub parallel: Option<bool>,
}

/// Grid every polygon feature and emit all kept cells as one
/// FeatureCollection, in feature order.
pub fn run(args: GridArgs, runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("grid");

    let builder = runner.create_builder(args.step, args.parallel);
    let step = builder.config().step_meters();

    let mut features = read_features(&args.input)?;
    info!("Read {} features from {}", features.len(), args.input.display());

    let mut cells = Vec::new();
    let mut gridded = 0;
    for (index, feature) in features.iter_mut().enumerate() {
        let Some(grid) = skip_unsupported(index, builder.to_grid(feature, step))? else {
            continue;
        };
        info!(
            "Feature {}: {} columns x {} rows, kept {} of {} cells",
            index,
            grid.columns.saturating_sub(1),
            grid.rows.saturating_sub(1),
            grid.len(),
            grid.candidates()
        );
        cells.extend(grid.cells);
        gridded += 1;
    }

    info!("Gridded {} features into {} cells", gridded, cells.len());

    let collection = cells_to_feature_collection(&cells);
    let encoded = serde_json::to_string(&collection)?;
    runner.write_output(args.output.as_deref(), &encoded)
}
