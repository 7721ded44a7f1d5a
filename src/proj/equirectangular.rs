//! Equirectangular (Plate Carrée) projection.
//!
//! forward: x = a·(λ - λ₀)·cos(φ₁), y = a·(φ - φ₀)
//! inverse: λ = λ₀ + x/(a·cos(φ₁)), φ = φ₀ + y/a

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;
use crate::proj::common::{adjlon, EPS10};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::Projector;

pub struct Equirectangular {
    ellipsoid: Ellipsoid,
    lon0: f64,
    lat0: f64,
    cos_lat_ts: f64,
    false_easting: f64,
    false_northing: f64,
}

impl Equirectangular {
    pub fn new(
        ellipsoid: Ellipsoid,
        lon0: f64,
        lat0: f64,
        lat_ts: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Result<Self, ProjError> {
        let cos_lat_ts = lat_ts.cos();
        if cos_lat_ts <= EPS10 {
            return Err(ProjError::invalid_value("lat_ts", "cos(lat_ts) must be positive"));
        }
        Ok(Self {
            ellipsoid,
            lon0,
            lat0,
            cos_lat_ts,
            false_easting,
            false_northing,
        })
    }
}

impl Projector for Equirectangular {
    fn id(&self) -> &'static str {
        "eqc"
    }

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let x = self.ellipsoid.a * adjlon(lon - self.lon0) * self.cos_lat_ts + self.false_easting;
        let y = self.ellipsoid.a * (lat - self.lat0) + self.false_northing;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let lat = self.lat0 + (y - self.false_northing) / self.ellipsoid.a;
        if lat.abs() > FRAC_PI_2 + EPS10 {
            return Err(ProjError::NumericallyInvalid(
                "northing beyond the pole".into(),
            ));
        }
        let lon = self.lon0 + (x - self.false_easting) / (self.ellipsoid.a * self.cos_lat_ts);
        Ok((adjlon(lon), lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::WGS84;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn plate_carree() -> Equirectangular {
        Equirectangular::new(WGS84, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap()
    }

    #[test]
    fn test_roundtrip() {
        let proj = plate_carree();
        let lon = 10.0_f64.to_radians();
        let lat = 45.0_f64.to_radians();
        let (x, y) = proj.forward(lon, lat).unwrap();
        let (lon2, lat2) = proj.inverse(x, y).unwrap();
        assert_relative_eq!(lon2, lon, epsilon = 1e-12);
        assert_relative_eq!(lat2, lat, epsilon = 1e-12);
    }

    #[test]
    fn test_origin() {
        let proj = plate_carree();
        let (x, y) = proj.forward(0.0, 0.0).unwrap();
        assert_relative_eq!(x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_with_standard_parallel() {
        // With standard parallel at 30°, x should be scaled by cos(30°)
        let lat_ts = 30.0_f64.to_radians();
        let proj = Equirectangular::new(WGS84, 0.0, 0.0, lat_ts, 0.0, 0.0).unwrap();
        let lon = 1.0_f64.to_radians();
        let (x, _) = proj.forward(lon, 0.0).unwrap();
        let expected_x = WGS84.a * lon * lat_ts.cos();
        assert_relative_eq!(x, expected_x, epsilon = 1e-6);
    }

    #[test]
    fn test_dateline() {
        let proj = plate_carree();
        let (xe, _) = proj.forward(PI, 0.0).unwrap();
        let (xw, _) = proj.forward(-PI, 0.0).unwrap();
        assert_relative_eq!(xe, -xw, epsilon = 1e-6);
    }

    #[test]
    fn test_polar_standard_parallel_rejected() {
        assert!(Equirectangular::new(WGS84, 0.0, 0.0, FRAC_PI_2, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_inverse_beyond_pole() {
        let proj = plate_carree();
        let err = proj.inverse(0.0, WGS84.a * 2.0).unwrap_err();
        assert!(matches!(err, ProjError::NumericallyInvalid(_)));
    }
}
