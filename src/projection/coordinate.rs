/// A 2D coordinate in any coordinate reference system
///
/// Geographic coordinates keep longitude in `x` and latitude in `y`;
/// projected ones hold easting and northing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Creates a new coordinate
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a coordinate from longitude/latitude in degrees (WGS84)
    pub fn from_lonlat(lon: f64, lat: f64) -> Self {
        Self::new(lon, lat)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lonlat_axis_order() {
        let coord = Coordinate::from_lonlat(121.4737, 31.2304);
        assert_eq!(coord.x, 121.4737);
        assert_eq!(coord.y, 31.2304);
    }

    #[test]
    fn test_is_finite() {
        assert!(Coordinate::new(1.0, 2.0).is_finite());
        assert!(!Coordinate::new(f64::INFINITY, 2.0).is_finite());
        assert!(!Coordinate::new(1.0, f64::NAN).is_finite());
    }
}
