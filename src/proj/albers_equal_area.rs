//! Albers Equal Area Conic projection.
//!
//! Area-preserving conic using `qsfn` from common.rs.

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;
use crate::proj::common::{adjlon, msfn, phi_from_q, qsfn, EPS10};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::Projector;

pub struct AlbersEqualArea {
    ellipsoid: Ellipsoid,
    lon0: f64,
    n: f64,
    c: f64,
    rho0: f64,
    // q at the pole, for the near-pole clamp in the inverse
    q_pole: f64,
    false_easting: f64,
    false_northing: f64,
}

impl AlbersEqualArea {
    pub fn new(
        ellipsoid: Ellipsoid,
        lon0: f64,
        lat0: f64,
        lat1: f64,
        lat2: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Result<Self, ProjError> {
        if (lat1 + lat2).abs() < EPS10 {
            return Err(ProjError::InvalidParameterCombination(
                "lat_1 and lat_2 are opposite parallels".into(),
            ));
        }
        let e = ellipsoid.eccentricity();
        let e2 = ellipsoid.e2;

        let m1 = msfn(lat1, e2);
        let q1 = qsfn(lat1, e);

        let n = if (lat1 - lat2).abs() > EPS10 {
            let m2 = msfn(lat2, e2);
            let q2 = qsfn(lat2, e);
            (m1 * m1 - m2 * m2) / (q2 - q1)
        } else {
            lat1.sin()
        };
        if n.abs() < EPS10 {
            return Err(ProjError::invalid_value("lat_1", "cone constant is zero"));
        }

        let c = m1 * m1 + n * q1;
        let rho0 = Self::radius(ellipsoid.a, c, n, qsfn(lat0, e))
            .ok_or_else(|| ProjError::invalid_value("lat_0", "origin outside the projection"))?;

        Ok(Self {
            ellipsoid,
            lon0,
            n,
            c,
            rho0,
            q_pole: qsfn(FRAC_PI_2, e),
            false_easting,
            false_northing,
        })
    }

    fn radius(a: f64, c: f64, n: f64, q: f64) -> Option<f64> {
        let d = c - n * q;
        if d < 0.0 {
            return None;
        }
        Some(a * d.sqrt() / n)
    }
}

impl Projector for AlbersEqualArea {
    fn id(&self) -> &'static str {
        "aea"
    }

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let e = self.ellipsoid.eccentricity();
        let q = qsfn(lat, e);
        let theta = self.n * adjlon(lon - self.lon0);
        let rho = Self::radius(self.ellipsoid.a, self.c, self.n, q).ok_or_else(|| {
            ProjError::NumericallyInvalid("latitude outside the Albers cone".into())
        })?;

        let x = rho * theta.sin() + self.false_easting;
        let y = self.rho0 - rho * theta.cos() + self.false_northing;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let x_ = x - self.false_easting;
        let y_ = self.rho0 - (y - self.false_northing);

        let (xn, yn) = if self.n < 0.0 { (-x_, -y_) } else { (x_, y_) };

        let rho = xn.hypot(yn);
        if rho < EPS10 {
            let lat = if self.n > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
            return Ok((self.lon0, lat));
        }
        let theta = xn.atan2(yn);

        let q = (self.c - (rho * self.n / self.ellipsoid.a).powi(2)) / self.n;

        let lat = if (self.q_pole - q.abs()).abs() < 1e-7 {
            FRAC_PI_2.copysign(q)
        } else if q.abs() > self.q_pole {
            return Err(ProjError::NumericallyInvalid(
                "point outside the Albers cone".into(),
            ));
        } else {
            phi_from_q(q, self.ellipsoid.eccentricity())?
        };

        let lon = adjlon(self.lon0 + theta / self.n);
        Ok((lon, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}
