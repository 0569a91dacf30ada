//! `polygrid sample` command.

use clap::Args;
use geojson::{Geometry, Value};
use polygrid::geodesic::Position;
use polygrid::sampler::LineSampler;
use polygrid::GridError;
use tracing::info;

use super::common::parse_position;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the sample command.
#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Start point as LON,LAT
    #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
    pub from: Position,

    /// End point as LON,LAT
    #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
    pub to: Position,

    /// Distance between samples in meters
    #[arg(long)]
    pub step: f64,
}

/// Print the sampled points as a GeoJSON LineString.
pub fn run(args: SampleArgs, runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("sample");

    if !(args.step.is_finite() && args.step > 0.0) {
        return Err(CliError::Grid(GridError::InvalidStep(args.step)));
    }

    let sampler = LineSampler::new(args.from, args.to, args.step);
    info!(
        "Sampling {} to {}: heading {:.4}°, distance {:.1} m",
        args.from,
        args.to,
        sampler.heading(),
        sampler.distance()
    );

    let line: Vec<Vec<f64>> = sampler.map(|p| p.to_array().to_vec()).collect();
    info!("Sampled {} points", line.len());

    let geometry = Geometry::new(Value::LineString(line));
    runner.write_output(None, &serde_json::to_string(&geometry)?)
}
