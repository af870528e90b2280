use log::debug;
use proj::Proj;

use crate::error::{Error, Result};
use crate::projection::coordinate::Coordinate;
use crate::projection::epsg;

/// Anything able to map a coordinate from one CRS into another
pub trait Transform {
    fn transform(&self, coord: Coordinate) -> Result<Coordinate>;
}

/// Transforms coordinates between two EPSG coordinate reference systems using PROJ
///
/// Axis order is normalised for visualisation: geographic input is
/// longitude/latitude and projected output is easting/northing.
pub struct Transformer {
    proj: Proj,
    from_epsg: u16,
    to_epsg: u16,
}

impl Transformer {
    /// Creates a new transformer from source to target CRS using EPSG codes
    pub fn new(from_epsg: u16, to_epsg: u16) -> Result<Self> {
        let from = format!("EPSG:{}", from_epsg);
        let to = format!("EPSG:{}", to_epsg);

        let proj = Proj::new_known_crs(&from, &to, None)
            .map_err(|e| Error::Projection(format!("Failed to create {} -> {} transformation: {}", from, to, e)))?;

        debug!("created transformation {} -> {}", from, to);

        Ok(Self {
            proj,
            from_epsg,
            to_epsg,
        })
    }

    /// WGS84 geographic degrees to UTM zone 49N metres
    pub fn wgs84_to_utm49n() -> Result<Self> {
        Self::new(epsg::WGS84, epsg::UTM_ZONE_49N)
    }

    pub fn from_epsg(&self) -> u16 {
        self.from_epsg
    }

    pub fn to_epsg(&self) -> u16 {
        self.to_epsg
    }
}

impl Transform for Transformer {
    /// Fails when PROJ rejects the coordinate or lands outside the target domain
    fn transform(&self, coord: Coordinate) -> Result<Coordinate> {
        let result: Coordinate = self.proj.convert((coord.x, coord.y))
            .map_err(|e| Error::Projection(format!("Transformation of ({}, {}) failed: {}", coord.x, coord.y, e)))?
            .into();

        if !result.is_finite() {
            return Err(Error::Projection(format!(
                "({}, {}) is outside the domain of EPSG:{}",
                coord.x, coord.y, self.to_epsg
            )));
        }

        Ok(result)
    }
}
