//! Scatter plot rendering
//!
//! [`ScatterPlot`] rasterizes parallel x/y sequences into an [`RgbaImage`];
//! with the `viewer` feature, [`viewer::show`] puts that image in a native
//! window and blocks until the user closes it.

#[cfg(feature = "viewer")]
pub mod viewer;

use image::{Rgba, RgbaImage};
use log::debug;

use crate::error::{Error, Result};
use crate::projection::Coordinate;
use crate::trajectory::{Bounds, PointCollection};

pub const DEFAULT_BG_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const DEFAULT_FRAME_COLOR: Rgba<u8> = Rgba([128, 128, 128, 255]);
pub const DEFAULT_MARKER_COLOR: Rgba<u8> = Rgba([31, 119, 180, 255]);

/// Fraction of the data range left empty on each side of the plot area
const DATA_PADDING: f64 = 0.05;

/// Canvas and marker settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Gap between the canvas edge and the plot frame, in pixels
    pub margin: u32,
    /// Marker radius in pixels
    pub marker_radius: f64,
    pub marker_color: Rgba<u8>,
    pub background: Rgba<u8>,
    pub frame_color: Rgba<u8>,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 40,
            marker_radius: 3.0,
            marker_color: DEFAULT_MARKER_COLOR,
            background: DEFAULT_BG_COLOR,
            frame_color: DEFAULT_FRAME_COLOR,
        }
    }
}

impl PlotStyle {
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    pub fn marker_color(mut self, color: Rgba<u8>) -> Self {
        self.marker_color = color;
        self
    }

    /// Plot area as (left, top, right, bottom) in pixel coordinates
    fn plot_area(&self) -> (f64, f64, f64, f64) {
        let margin = self.margin.min(self.width / 2).min(self.height / 2) as f64;
        (
            margin,
            margin,
            self.width as f64 - margin,
            self.height as f64 - margin,
        )
    }
}

/// A scatter plot where point `i` sits at `(xs[i], ys[i])`
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    xs: Vec<f64>,
    ys: Vec<f64>,
    style: PlotStyle,
}

impl ScatterPlot {
    /// Creates a plot from parallel coordinate sequences
    ///
    /// Fails when the sequences have different lengths.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::Render(format!(
                "x and y sequences differ in length ({} vs {})",
                xs.len(),
                ys.len()
            )));
        }

        Ok(Self {
            xs,
            ys,
            style: PlotStyle::default(),
        })
    }

    pub fn from_points(points: &PointCollection) -> Self {
        Self {
            xs: points.xs().to_vec(),
            ys: points.ys().to_vec(),
            style: PlotStyle::default(),
        }
    }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Data range shown on the axes: the points' extent, padded, with
    /// degenerate axes widened by one unit each way
    pub fn view_bounds(&self) -> Option<Bounds> {
        let (min_x, max_x) = padded_range(&self.xs)?;
        let (min_y, max_y) = padded_range(&self.ys)?;
        Some(Bounds { min_x, min_y, max_x, max_y })
    }

    /// Maps a data coordinate to a pixel position, `None` for an empty plot
    pub fn to_pixel(&self, coord: Coordinate) -> Option<(f64, f64)> {
        let bounds = self.view_bounds()?;
        Some(self.map(&bounds, coord))
    }

    fn map(&self, bounds: &Bounds, coord: Coordinate) -> (f64, f64) {
        let (left, top, right, bottom) = self.style.plot_area();
        let px = left + (coord.x - bounds.min_x) / bounds.width() * (right - left);
        let py = bottom - (coord.y - bounds.min_y) / bounds.height() * (bottom - top);
        (px, py)
    }

    /// Draws the frame and one filled circle per point
    pub fn render(&self) -> RgbaImage {
        let style = &self.style;
        let mut image = RgbaImage::from_pixel(style.width, style.height, style.background);
        draw_frame(&mut image, style);

        let Some(bounds) = self.view_bounds() else {
            return image;
        };
        debug!(
            "rendering {} points over x [{:.2}, {:.2}], y [{:.2}, {:.2}]",
            self.len(),
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y
        );

        for (&x, &y) in self.xs.iter().zip(&self.ys) {
            let (px, py) = self.map(&bounds, Coordinate::new(x, y));
            fill_circle(&mut image, px, py, style.marker_radius, style.marker_color);
        }

        image
    }
}

fn padded_range(values: &[f64]) -> Option<(f64, f64)> {
    let (min, max) = values
        .iter()
        .fold(None, |range: Option<(f64, f64)>, &v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;

    let span = max - min;
    if span > 0.0 {
        Some((min - span * DATA_PADDING, max + span * DATA_PADDING))
    } else {
        Some((min - 1.0, max + 1.0))
    }
}

fn draw_frame(image: &mut RgbaImage, style: &PlotStyle) {
    let (left, top, right, bottom) = style.plot_area();
    let (left, top) = (left as u32, top as u32);
    let right = (right as u32).saturating_sub(1).max(left);
    let bottom = (bottom as u32).saturating_sub(1).max(top);

    for x in left..=right {
        put(image, x, top, style.frame_color);
        put(image, x, bottom, style.frame_color);
    }
    for y in top..=bottom {
        put(image, left, y, style.frame_color);
        put(image, right, y, style.frame_color);
    }
}

fn fill_circle(image: &mut RgbaImage, cx: f64, cy: f64, radius: f64, color: Rgba<u8>) {
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = (cx + radius).ceil().max(0.0) as u32;
    let y1 = (cy + radius).ceil().max(0.0) as u32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                put(image, x, y, color);
            }
        }
    }
}

fn put(image: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>) {
    if x < image.width() && y < image.height() {
        image.put_pixel(x, y, color);
    }
}
