//! Mercator projection: Normal (ellipsoidal) and Web Mercator (spherical).
//!
//! Normal Mercator (ellipsoidal, scale from k₀ or the standard parallel):
//!   forward: x = a·k₀·(λ - λ₀), y = a·k₀·ψ
//!            ψ = asinh(tan φ) - e·atanh(e·sin φ)  (isometric latitude)
//!   inverse: λ = λ₀ + x/(a·k₀), φ = phi_from_ts(exp(-y/(a·k₀)), e)
//!
//! Web Mercator (EPSG:3857, spherical equations on the ellipsoid's a):
//!   forward: x = a·(λ - λ₀), y = a·asinh(tan φ)
//!   inverse: λ = λ₀ + x/a, φ = 2·atan(exp(y/a)) - π/2

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;
use crate::proj::common::{adjlon, msfn, phi_from_ts, EPS10};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::Projector;

/// Isometric latitude. Exactly zero on the equator.
fn isometric_latitude(lat: f64, e: f64) -> f64 {
    lat.tan().asinh() - e * (e * lat.sin()).atanh()
}

fn check_pole(lat: f64) -> Result<(), ProjError> {
    if (lat.abs() - FRAC_PI_2).abs() <= EPS10 {
        return Err(ProjError::NumericallyInvalid(
            "Mercator is undefined at the poles".into(),
        ));
    }
    Ok(())
}

/// Ellipsoidal Mercator projection.
pub struct Mercator {
    ellipsoid: Ellipsoid,
    lon0: f64,
    k0: f64,
    false_easting: f64,
    false_northing: f64,
}

impl Mercator {
    /// Mercator true to scale along `lat_ts`.
    pub fn new(
        ellipsoid: Ellipsoid,
        lon0: f64,
        lat_ts: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Result<Self, ProjError> {
        if lat_ts.abs() >= FRAC_PI_2 {
            return Err(ProjError::invalid_value("lat_ts", "|lat_ts| must be below 90°"));
        }
        // Scale factor from standard parallel
        let k0 = msfn(lat_ts, ellipsoid.e2);
        Ok(Self::with_scale(ellipsoid, lon0, k0, false_easting, false_northing))
    }

    /// Mercator with an explicit scale factor on the equator.
    pub fn with_scale(
        ellipsoid: Ellipsoid,
        lon0: f64,
        k0: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        Self {
            ellipsoid,
            lon0,
            k0,
            false_easting,
            false_northing,
        }
    }
}

impl Projector for Mercator {
    fn id(&self) -> &'static str {
        "merc"
    }

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        check_pole(lat)?;
        let e = self.ellipsoid.eccentricity();
        let ak0 = self.ellipsoid.a * self.k0;
        let x = ak0 * adjlon(lon - self.lon0) + self.false_easting;
        let y = ak0 * isometric_latitude(lat, e) + self.false_northing;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let e = self.ellipsoid.eccentricity();
        let ak0 = self.ellipsoid.a * self.k0;
        let lon = adjlon(self.lon0 + (x - self.false_easting) / ak0);
        let ts = (-(y - self.false_northing) / ak0).exp();
        let lat = phi_from_ts(ts, e)?;
        Ok((lon, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}

/// Web Mercator projection (EPSG:3857).
pub struct WebMercator {
    ellipsoid: Ellipsoid,
    lon0: f64,
    false_easting: f64,
    false_northing: f64,
}

impl WebMercator {
    pub fn new(ellipsoid: Ellipsoid, lon0: f64, false_easting: f64, false_northing: f64) -> Self {
        Self {
            ellipsoid,
            lon0,
            false_easting,
            false_northing,
        }
    }
}

impl Projector for WebMercator {
    fn id(&self) -> &'static str {
        "webmerc"
    }

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        check_pole(lat)?;
        let a = self.ellipsoid.a;
        let x = a * adjlon(lon - self.lon0) + self.false_easting;
        let y = a * isometric_latitude(lat, 0.0) + self.false_northing;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let a = self.ellipsoid.a;
        let lon = adjlon(self.lon0 + (x - self.false_easting) / a);
        let lat = 2.0 * ((y - self.false_northing) / a).exp().atan() - FRAC_PI_2;
        Ok((lon, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}
