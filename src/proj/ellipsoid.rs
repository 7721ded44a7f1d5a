use crate::error::ProjError;

/// Reference ellipsoid with its derived shape constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared
    pub e2: f64,
    /// Second eccentricity squared: e^2 / (1 - e^2)
    pub ep2: f64,
    /// Third flattening: f / (2 - f)
    pub n: f64,
}

impl Ellipsoid {
    /// Build from semi-major axis and flattening without validation.
    pub const fn new(a: f64, f: f64) -> Self {
        let b = a * (1.0 - f);
        let e2 = 2.0 * f - f * f;
        let ep2 = e2 / (1.0 - e2);
        let n = f / (2.0 - f);
        Self { a, f, b, e2, ep2, n }
    }

    /// Semi-major axis and reciprocal flattening; `rf == 0` is rejected, use
    /// [`Ellipsoid::sphere`] for a sphere.
    pub fn from_a_rf(a: f64, rf: f64) -> Result<Self, ProjError> {
        if rf == 0.0 || !rf.is_finite() {
            return Err(ProjError::invalid_value("rf", "reciprocal flattening (1/f) = 0"));
        }
        Self::checked(a, 1.0 / rf)
    }

    /// Semi-major and semi-minor axes.
    pub fn from_a_b(a: f64, b: f64) -> Result<Self, ProjError> {
        if !(b > 0.0) || !b.is_finite() {
            return Err(ProjError::invalid_value("b", "semi-minor axis must be positive"));
        }
        Self::checked(a, (a - b) / a)
    }

    /// Sphere of radius `r`.
    pub fn sphere(r: f64) -> Result<Self, ProjError> {
        Self::checked(r, 0.0)
    }

    fn checked(a: f64, f: f64) -> Result<Self, ProjError> {
        if !(a > 0.0) || !a.is_finite() {
            return Err(ProjError::invalid_value("a", "major axis or radius is zero or not given"));
        }
        let ell = Self::new(a, f);
        if !(0.0..1.0).contains(&ell.e2) {
            return Err(ProjError::invalid_value(
                "es",
                format!("squared eccentricity {} outside [0, 1)", ell.e2),
            ));
        }
        Ok(ell)
    }

    /// First eccentricity.
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }

    pub fn is_sphere(&self) -> bool {
        self.e2 == 0.0
    }

    /// Same size and shape, within a tolerance far below survey precision.
    pub fn same_shape(&self, other: &Ellipsoid) -> bool {
        (self.a - other.a).abs() < 5e-5 && (self.e2 - other.e2).abs() < 5e-11
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_222_101);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wgs84_constants() {
        assert_relative_eq!(WGS84.a, 6_378_137.0);
        assert_relative_eq!(WGS84.b, 6_356_752.314_245_179, epsilon = 0.001);
        assert_relative_eq!(WGS84.eccentricity(), 0.081_819_190_842_622, epsilon = 1e-12);
        assert_relative_eq!(WGS84.n, 0.001_679_220_386_383_705, epsilon = 1e-12);
    }

    #[test]
    fn test_grs80_close_to_wgs84() {
        // WGS84 and GRS80 differ only slightly
        assert_relative_eq!(WGS84.a, GRS80.a);
        assert!((WGS84.f - GRS80.f).abs() < 1e-8);
        assert!(WGS84.same_shape(&GRS80));
    }

    #[test]
    fn test_from_a_b_matches_rf() {
        let clarke = Ellipsoid::from_a_b(6_378_206.4, 6_356_583.8).unwrap();
        assert_relative_eq!(1.0 / clarke.f, 294.978_698_2, epsilon = 1e-6);
        assert_relative_eq!(clarke.b, 6_356_583.8, epsilon = 1e-6);
    }

    #[test]
    fn test_sphere() {
        let s = Ellipsoid::sphere(6_370_997.0).unwrap();
        assert!(s.is_sphere());
        assert_eq!(s.eccentricity(), 0.0);
    }

    #[test]
    fn test_rejects_degenerate() {
        assert!(Ellipsoid::from_a_rf(6_378_137.0, 0.0).is_err());
        assert!(Ellipsoid::from_a_rf(0.0, 298.0).is_err());
        assert!(Ellipsoid::from_a_b(6_378_137.0, 0.0).is_err());
        // b > a gives negative e²
        assert!(Ellipsoid::from_a_b(6_378_137.0, 6_400_000.0).is_err());
        assert!(Ellipsoid::sphere(-1.0).is_err());
    }
}
