//! trackplot - GPS trajectory reprojection and scatter plotting
//!
//! trackplot reads a text file of GPS fixes, one
//! `<identifier> <latitude> <longitude> <altitude>` record per line,
//! reprojects each fix from WGS84 (EPSG:4326) to UTM zone 49N (EPSG:32649)
//! and plots the projected points.
//!
//! # Examples
//!
//! ```no_run
//! use trackplot::{ScatterPlot, TrajectoryLoader, Transformer};
//!
//! let loader = TrajectoryLoader::new(Transformer::wgs84_to_utm49n()?);
//! let points = loader.load("proj/gps.txt")?;
//!
//! let image = ScatterPlot::from_points(&points).render();
//! println!("{} points on a {}x{} canvas", points.len(), image.width(), image.height());
//! # Ok::<(), trackplot::Error>(())
//! ```

pub mod error;
pub mod record;
pub mod projection;
pub mod trajectory;
pub mod render;

pub use error::{Error, Result};
pub use record::{GpsRecord, RecordError};
pub use projection::{epsg, Coordinate, Transform, Transformer};
pub use trajectory::{Bounds, PointCollection, TrajectoryLoader};
pub use render::{PlotStyle, ScatterPlot};

/// Input file read when no path is given on the command line
pub const DEFAULT_INPUT: &str = "proj/gps.txt";
