//! Sinusoidal (Sanson–Flamsteed) projection, ellipsoidal form.
//!
//! forward: x = a·(λ - λ₀)·cos(φ) / sqrt(1 - e² sin²φ), y = M(φ)
//! inverse: φ = M⁻¹(y), λ = λ₀ + x·sqrt(1 - e² sin²φ) / (a·cos(φ))
//!
//! On a sphere this reduces to x = a·(λ - λ₀)·cos(φ), y = a·φ.

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;
use crate::proj::common::{adjlon, inverse_meridional_arc, meridional_arc, EPS10};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::Projector;

pub struct Sinusoidal {
    ellipsoid: Ellipsoid,
    lon0: f64,
    false_easting: f64,
    false_northing: f64,
    // Meridional arc to the pole
    m_pole: f64,
}

impl Sinusoidal {
    pub fn new(ellipsoid: Ellipsoid, lon0: f64, false_easting: f64, false_northing: f64) -> Self {
        Self {
            m_pole: meridional_arc(&ellipsoid, FRAC_PI_2),
            ellipsoid,
            lon0,
            false_easting,
            false_northing,
        }
    }
}

impl Projector for Sinusoidal {
    fn id(&self) -> &'static str {
        "sinu"
    }

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let (s, c) = lat.sin_cos();
        let nu = self.ellipsoid.a / (1.0 - self.ellipsoid.e2 * s * s).sqrt();
        let x = nu * adjlon(lon - self.lon0) * c + self.false_easting;
        let y = meridional_arc(&self.ellipsoid, lat) + self.false_northing;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let m = y - self.false_northing;
        let over = m.abs() - self.m_pole;
        if over > EPS10 * self.ellipsoid.a {
            return Err(ProjError::NumericallyInvalid(
                "northing beyond the pole".into(),
            ));
        }
        if over.abs() <= EPS10 * self.ellipsoid.a {
            // At the poles, longitude is undefined; return lon0
            return Ok((self.lon0, FRAC_PI_2.copysign(m)));
        }
        let lat = inverse_meridional_arc(&self.ellipsoid, m)?;
        let (s, c) = lat.sin_cos();
        let nu = self.ellipsoid.a / (1.0 - self.ellipsoid.e2 * s * s).sqrt();
        let lon = adjlon(self.lon0 + (x - self.false_easting) / (nu * c));
        Ok((lon, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}
