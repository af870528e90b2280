//! Loading a GPS trajectory file into projected planar points

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, trace};

use crate::error::{Error, Result};
use crate::projection::{Coordinate, Transform};
use crate::record::GpsRecord;

/// Axis-aligned extent of a set of points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    fn include(&mut self, point: Coordinate) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }
}

/// Projected points in input order, kept as parallel x and y sequences
///
/// Both sequences always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCollection {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PointCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: Coordinate) {
        self.xs.push(point.x);
        self.ys.push(point.y);
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn get(&self, index: usize) -> Option<Coordinate> {
        Some(Coordinate::new(*self.xs.get(index)?, self.ys[index]))
    }

    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| Coordinate::new(x, y))
    }

    /// Returns the extent of all points, `None` when empty
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.iter();
        let first = points.next()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        points.for_each(|point| bounds.include(point));
        Some(bounds)
    }
}

impl Extend<Coordinate> for PointCollection {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        iter.into_iter().for_each(|point| self.push(point));
    }
}

impl FromIterator<Coordinate> for PointCollection {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut points = Self::new();
        points.extend(iter);
        points
    }
}

/// Reads `identifier latitude longitude altitude` lines and projects each fix
///
/// The first malformed line or failed transformation aborts the whole load.
pub struct TrajectoryLoader<T> {
    transform: T,
}

impl<T: Transform> TrajectoryLoader<T> {
    pub fn new(transform: T) -> Self {
        Self { transform }
    }

    /// Loads and projects every record in the file at `path`
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<PointCollection> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let points = self.load_from_reader(BufReader::new(file))?;
        info!("loaded {} points from {}", points.len(), path.display());
        Ok(points)
    }

    /// Loads and projects every record produced by `reader`
    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<PointCollection> {
        let mut points = PointCollection::new();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line?;

            let record = GpsRecord::parse(&line).map_err(|source| Error::MalformedRecord {
                line: line_number,
                source,
            })?;
            trace!("line {}: {:?}", line_number, record);

            let projected = self
                .transform
                .transform(Coordinate::from_lonlat(record.longitude, record.latitude))
                .map_err(|e| match e {
                    Error::Projection(msg) => Error::Projection(format!("line {}: {}", line_number, msg)),
                    other => other,
                })?;

            points.push(projected);
        }

        if let Some(bounds) = points.bounds() {
            debug!(
                "projected extent: x [{:.2}, {:.2}], y [{:.2}, {:.2}]",
                bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
            );
        }

        Ok(points)
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }
}
