//! Coordinate reference systems and transformations
//!
//! The heavy lifting is delegated to PROJ through the `proj` crate.

mod coordinate;
mod transformer;

pub use coordinate::Coordinate;
pub use transformer::{Transform, Transformer};

/// EPSG codes used by trackplot
pub mod epsg {
    /// WGS84 geographic, degrees
    pub const WGS84: u16 = 4326;
    /// WGS84 / UTM zone 49N, metres
    pub const UTM_ZONE_49N: u16 = 32649;
}
