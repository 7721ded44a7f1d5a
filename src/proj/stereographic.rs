//! Stereographic projection: Polar and Oblique variants.
//!
//! Polar Stereographic: EPSG:3031 (Antarctic), EPSG:3413 (Arctic), UPS
//! Oblique Stereographic: double projection through the conformal sphere
//! (EPSG method 9809), used for both `sterea` and non-polar `stere`.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::error::ProjError;
use crate::proj::common::{adjlon, phi_from_ts, tsfn, EPS10};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::Projector;

/// Polar Stereographic projection.
pub struct PolarStereographic {
    ellipsoid: Ellipsoid,
    lon0: f64,
    is_north: bool,
    false_easting: f64,
    false_northing: f64,
    // ρ = akm · t
    akm: f64,
}

impl PolarStereographic {
    /// Polar stereographic about the north (`is_north`) or south pole.
    ///
    /// With a latitude of true scale (variant B) `k0` is ignored; without
    /// one the scale at the pole is `k0` (variant A, e.g. UPS with 0.994).
    pub fn new(
        ellipsoid: Ellipsoid,
        lon0: f64,
        is_north: bool,
        lat_ts: Option<f64>,
        k0: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        let e = ellipsoid.eccentricity();
        let e2 = ellipsoid.e2;

        let akm = match lat_ts {
            Some(ts) if (ts.abs() - FRAC_PI_2).abs() >= EPS10 => {
                let ts = ts.abs();
                let sin_ts = ts.sin();
                let m_c = ts.cos() / (1.0 - e2 * sin_ts * sin_ts).sqrt();
                ellipsoid.a * m_c / tsfn(ts, e)
            }
            _ => {
                let ep = (1.0 + e).powf(1.0 + e) * (1.0 - e).powf(1.0 - e);
                ellipsoid.a * 2.0 * k0 / ep.sqrt()
            }
        };

        Self {
            ellipsoid,
            lon0,
            is_north,
            false_easting,
            false_northing,
            akm,
        }
    }
}

impl Projector for PolarStereographic {
    fn id(&self) -> &'static str {
        "stere"
    }

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let lat_adj = if self.is_north { lat } else { -lat };
        if lat_adj <= -FRAC_PI_2 + EPS10 {
            return Err(ProjError::NumericallyInvalid(
                "point at the pole opposite the projection centre".into(),
            ));
        }

        let rho = self.akm * tsfn(lat_adj, self.ellipsoid.eccentricity());
        let (sin_dlam, cos_dlam) = adjlon(lon - self.lon0).sin_cos();

        let x = rho * sin_dlam + self.false_easting;
        let y = if self.is_north {
            -rho * cos_dlam
        } else {
            rho * cos_dlam
        } + self.false_northing;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let x_ = x - self.false_easting;
        let y_ = y - self.false_northing;

        let rho = x_.hypot(y_);
        let pole = if self.is_north { FRAC_PI_2 } else { -FRAC_PI_2 };
        if rho < EPS10 {
            return Ok((self.lon0, pole));
        }

        let lat_adj = phi_from_ts(rho / self.akm, self.ellipsoid.eccentricity())?;
        let (lat, dlam) = if self.is_north {
            (lat_adj, x_.atan2(-y_))
        } else {
            (-lat_adj, x_.atan2(y_))
        };

        Ok((adjlon(self.lon0 + dlam), lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}

/// Oblique Stereographic (Double) projection.
pub struct ObliqueStereographic {
    id: &'static str,
    ellipsoid: Ellipsoid,
    lon0: f64,
    false_easting: f64,
    false_northing: f64,
    // Conformal sphere parameters
    n_conf: f64,
    sqrt_c: f64,
    sin_chi0: f64,
    cos_chi0: f64,
    // 2·R·k₀ with R the conformal sphere radius
    two_rk: f64,
}

impl ObliqueStereographic {
    pub fn new(
        ellipsoid: Ellipsoid,
        lon0: f64,
        lat0: f64,
        k0: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Result<Self, ProjError> {
        if (lat0.abs() - FRAC_PI_2).abs() < EPS10 {
            return Err(ProjError::invalid_value(
                "lat_0",
                "polar origin needs the polar stereographic",
            ));
        }
        let e2 = ellipsoid.e2;
        let e = ellipsoid.eccentricity();
        let (sin0, cos0) = lat0.sin_cos();

        // R = sqrt(ρ₀·ν₀) = a·sqrt(1-e²) / (1 - e²·sin²φ₀)
        let r_sphere = ellipsoid.a * (1.0 - e2).sqrt() / (1.0 - e2 * sin0 * sin0);
        let n_conf = (1.0 + e2 * cos0.powi(4) / (1.0 - e2)).sqrt();

        let s1 = (1.0 + sin0) / (1.0 - sin0);
        let s2 = (1.0 - e * sin0) / (1.0 + e * sin0);
        let w1 = (s1 * s2.powf(e)).powf(n_conf);
        let sin_chi00 = (w1 - 1.0) / (w1 + 1.0);
        let c = (n_conf + sin0) * (1.0 - sin_chi00) / ((n_conf - sin0) * (1.0 + sin_chi00));
        let w2 = c * w1;
        let chi0 = ((w2 - 1.0) / (w2 + 1.0)).asin();

        Ok(Self {
            id: "sterea",
            ellipsoid,
            lon0,
            false_easting,
            false_northing,
            n_conf,
            sqrt_c: c.sqrt(),
            sin_chi0: chi0.sin(),
            cos_chi0: chi0.cos(),
            two_rk: 2.0 * r_sphere * k0,
        })
    }

    /// Report a different family id (non-polar `stere` shares this math).
    pub fn with_id(mut self, id: &'static str) -> Self {
        self.id = id;
        self
    }

    /// Geodetic latitude → conformal latitude χ.
    fn conformal_latitude(&self, lat: f64) -> f64 {
        let ts = tsfn(lat, self.ellipsoid.eccentricity());
        2.0 * (self.sqrt_c / ts.powf(self.n_conf)).atan() - FRAC_PI_2
    }

    /// Conformal latitude χ → geodetic latitude.
    fn geodetic_latitude(&self, chi: f64) -> Result<f64, ProjError> {
        let ts = ((FRAC_PI_4 + 0.5 * chi).tan() / self.sqrt_c).powf(-1.0 / self.n_conf);
        phi_from_ts(ts, self.ellipsoid.eccentricity())
    }
}

impl Projector for ObliqueStereographic {
    fn id(&self) -> &'static str {
        self.id
    }

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let chi = self.conformal_latitude(lat);
        let lambda = self.n_conf * adjlon(lon - self.lon0);

        let (sin_chi, cos_chi) = chi.sin_cos();
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let b_denom = 1.0 + self.sin_chi0 * sin_chi + self.cos_chi0 * cos_chi * cos_lambda;
        if b_denom < EPS10 {
            return Err(ProjError::NumericallyInvalid(
                "antipode of the projection centre".into(),
            ));
        }
        let b = self.two_rk / b_denom;

        let x = b * cos_chi * sin_lambda + self.false_easting;
        let y = b * (self.cos_chi0 * sin_chi - self.sin_chi0 * cos_chi * cos_lambda)
            + self.false_northing;

        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let xd = x - self.false_easting;
        let yd = y - self.false_northing;
        let rho = xd.hypot(yd);

        let (chi, lambda) = if rho < EPS10 {
            (self.sin_chi0.asin(), 0.0)
        } else {
            let c = 2.0 * (rho / self.two_rk).atan();
            let (sin_c, cos_c) = c.sin_cos();
            let chi = (cos_c * self.sin_chi0 + yd * sin_c * self.cos_chi0 / rho)
                .clamp(-1.0, 1.0)
                .asin();
            let lambda =
                (xd * sin_c).atan2(rho * self.cos_chi0 * cos_c - yd * self.sin_chi0 * sin_c);
            (chi, lambda)
        };

        let lat = self.geodetic_latitude(chi)?;
        let lon = adjlon(self.lon0 + lambda / self.n_conf);
        Ok((lon, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}
