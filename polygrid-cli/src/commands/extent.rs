//! `polygrid extent` command.

use clap::Args;
use polygrid::extent::resolve_extent;
use std::path::PathBuf;
use tracing::{debug, info};

use super::common::{read_features, skip_unsupported};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the extent command.
#[derive(Debug, Args)]
pub struct ExtentArgs {
    /// GeoJSON Feature or FeatureCollection file
    pub input: PathBuf,
}

/// Print the `[w, s, e, n]` extent of every polygon feature, one per line.
///
/// Non-polygon features are skipped with a warning.
pub fn run(args: ExtentArgs, runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("extent");

    let features = read_features(&args.input)?;
    info!("Read {} features from {}", features.len(), args.input.display());

    let mut printed = 0;
    for (index, feature) in features.iter().enumerate() {
        let Some((extent, _)) = skip_unsupported(index, resolve_extent(feature))? else {
            continue;
        };
        debug!("Feature {} extent {}", index, extent);

        let line = serde_json::to_string(&extent.to_bbox())?;
        runner.write_output(None, &line)?;
        printed += 1;
    }

    info!("Printed {} extents", printed);
    Ok(())
}
