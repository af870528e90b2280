use std::env;
use std::process::ExitCode;

use log::error;
use trackplot::{render::viewer, Result, ScatterPlot, TrajectoryLoader, Transformer, DEFAULT_INPUT};

fn run(path: &str) -> Result<()> {
    let transformer = Transformer::wgs84_to_utm49n()?;
    let points = TrajectoryLoader::new(transformer).load(path)?;

    let plot = ScatterPlot::from_points(&points);
    viewer::show(&plot, &format!("trackplot - {}", path))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_string());

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
