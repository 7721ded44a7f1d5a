//! Apian Globular I, Bacon Globular and Ortelius Oval.
//!
//! Spherical, forward-only globular projections sharing one construction:
//!   y = (π/2)·sin φ (Bacon) or y = φ
//!   x = sign(λ)·(|λ| - F + sqrt(F² - y²)), F = ((π/2)²/|λ| + |λ|)/2
//! Ortelius uses straight lines beyond ±90° of longitude.

use crate::error::ProjError;
use crate::proj::common::adjlon;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::Projector;

const HLFPI2: f64 = 2.467_401_100_272_339_654_67; // (π/2)²
const EPS: f64 = 1e-10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Globular {
    Apian,
    Bacon,
    Ortelius,
}

pub struct GlobularProjection {
    variant: Globular,
    ellipsoid: Ellipsoid,
    lon0: f64,
    false_easting: f64,
    false_northing: f64,
}

impl GlobularProjection {
    pub fn new(
        variant: Globular,
        ellipsoid: Ellipsoid,
        lon0: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        Self {
            variant,
            ellipsoid,
            lon0,
            false_easting,
            false_northing,
        }
    }
}

impl Projector for GlobularProjection {
    fn id(&self) -> &'static str {
        match self.variant {
            Globular::Apian => "apian",
            Globular::Bacon => "bacon",
            Globular::Ortelius => "ortel",
        }
    }

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let lam = adjlon(lon - self.lon0);
        let y = match self.variant {
            Globular::Bacon => std::f64::consts::FRAC_PI_2 * lat.sin(),
            _ => lat,
        };
        let ax = lam.abs();
        let x = if ax >= EPS {
            let x = if self.variant == Globular::Ortelius && ax >= std::f64::consts::FRAC_PI_2 {
                (HLFPI2 - lat * lat + EPS).sqrt() + ax - std::f64::consts::FRAC_PI_2
            } else {
                let f = 0.5 * (HLFPI2 / ax + ax);
                ax - f + (f * f - y * y).sqrt()
            };
            x.copysign(lam)
        } else {
            0.0
        };
        let a = self.ellipsoid.a;
        Ok((a * x + self.false_easting, a * y + self.false_northing))
    }

    fn has_inverse(&self) -> bool {
        false
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn unit(variant: Globular) -> GlobularProjection {
        GlobularProjection::new(variant, Ellipsoid::sphere(1.0).unwrap(), 0.0, 0.0, 0.0)
    }

    #[test]
    fn test_central_meridian_is_straight() {
        for v in [Globular::Apian, Globular::Bacon, Globular::Ortelius] {
            let (x, _) = unit(v).forward(0.0, 0.6).unwrap();
            assert_eq!(x, 0.0);
        }
    }

    #[test]
    fn test_boundary_meridian_is_a_circle() {
        // λ = 90°: x² + y² = (π/2)² for the apian globular
        let (x, y) = unit(Globular::Apian).forward(FRAC_PI_2, 0.7).unwrap();
        assert_relative_eq!(x * x + y * y, HLFPI2, epsilon = 1e-12);
    }

    #[test]
    fn test_bacon_parallels() {
        let (_, y) = unit(Globular::Bacon).forward(0.3, 0.5).unwrap();
        assert_relative_eq!(y, FRAC_PI_2 * 0.5_f64.sin(), epsilon = 1e-15);
    }

    #[test]
    fn test_ortelius_outer_meridians() {
        let (x, y) = unit(Globular::Ortelius).forward(-2.5, 0.0).unwrap();
        assert_eq!(y, 0.0);
        assert_relative_eq!(x, -(HLFPI2 + EPS).sqrt() - 2.5 + FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let proj = unit(Globular::Apian);
        let (x1, y1) = proj.forward(1.2, 0.4).unwrap();
        let (x2, y2) = proj.forward(-1.2, -0.4).unwrap();
        assert_relative_eq!(x1, -x2, epsilon = 1e-15);
        assert_relative_eq!(y1, -y2, epsilon = 1e-15);
    }

    #[test]
    fn test_no_inverse() {
        let proj = unit(Globular::Ortelius);
        assert!(!proj.has_inverse());
        assert_eq!(
            proj.inverse(0.0, 0.0),
            Err(ProjError::InverseUnsupported("ortel".into()))
        );
    }
}
