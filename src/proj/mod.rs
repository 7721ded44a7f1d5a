pub mod albers_equal_area;
pub mod bacon;
pub mod common;
pub mod ellipsoid;
pub mod equirectangular;
pub mod geocentric;
pub mod lambert_conformal;
pub mod longlat;
pub mod mercator;
pub mod pipeline;
pub mod sinusoidal;
pub mod stereographic;
pub mod transverse_mercator;

use crate::error::ProjError;

/// Per-family projection math.
///
/// Implementations hold their frozen constants (ellipsoid, central meridian,
/// false origin, family terms) and are immutable after construction. Angles
/// are radians; projected coordinates are metres.
pub trait Projector: Send + Sync {
    /// Family identifier, e.g. `"merc"`.
    fn id(&self) -> &'static str;

    /// Forward: (lon_rad, lat_rad) -> (easting, northing)
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError>;

    /// Inverse: (easting, northing) -> (lon_rad, lat_rad)
    fn inverse(&self, _x: f64, _y: f64) -> Result<(f64, f64), ProjError> {
        Err(ProjError::InverseUnsupported(self.id().to_string()))
    }

    fn has_inverse(&self) -> bool {
        true
    }

    fn ellipsoid(&self) -> &ellipsoid::Ellipsoid;
}
