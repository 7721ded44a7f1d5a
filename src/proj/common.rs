//! Common helpers for projection math (meridional arc, latitude conversions, etc.).

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use super::ellipsoid::Ellipsoid;
use crate::error::ProjError;

/// Iteration cap shared by every iterative inverse.
pub const MAX_ITER: usize = 30;
/// Convergence tolerance (radians) for iterative inverses.
pub const TOL: f64 = 1e-12;
/// Angular tolerance used for singularity tests.
pub const EPS10: f64 = 1e-10;

/// Wrap a longitude into [-π, π].
pub fn adjlon(lon: f64) -> f64 {
    if lon.abs() <= PI + 1e-12 {
        return lon;
    }
    let shifted = lon + PI;
    shifted - TAU * (shifted / TAU).floor() - PI
}

/// Compute the meridional arc length from the equator to latitude phi.
/// Uses the series expansion in powers of n (third flattening).
pub fn meridional_arc(ellipsoid: &Ellipsoid, phi: f64) -> f64 {
    let n = ellipsoid.n;
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n3 * n;

    let a = ellipsoid.a / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0);

    let a0 = 1.0;
    let a2 = -3.0 / 2.0 * n + 9.0 / 16.0 * n3;
    let a4 = 15.0 / 16.0 * n2 - 15.0 / 32.0 * n4;
    let a6 = -35.0 / 48.0 * n3;
    let a8 = 315.0 / 512.0 * n4;

    a * (a0 * phi + a2 * (2.0 * phi).sin() + a4 * (4.0 * phi).sin()
        + a6 * (6.0 * phi).sin()
        + a8 * (8.0 * phi).sin())
}

/// Latitude whose meridional arc is `m`, by Newton iteration on
/// [`meridional_arc`].
pub fn inverse_meridional_arc(ellipsoid: &Ellipsoid, m: f64) -> Result<f64, ProjError> {
    let e2 = ellipsoid.e2;
    let scale = ellipsoid.a * (1.0 - e2);
    let mut phi = m / ellipsoid.a;
    for _ in 0..MAX_ITER {
        let s = phi.sin();
        let w = 1.0 - e2 * s * s;
        // dM/dφ = a(1-e²) / (1 - e² sin²φ)^(3/2)
        let dphi = (meridional_arc(ellipsoid, phi) - m) * w * w.sqrt() / scale;
        phi -= dphi;
        if dphi.abs() < TOL {
            return Ok(phi);
        }
    }
    Err(ProjError::ConvergenceFailure {
        what: "inverse meridional distance",
        iterations: MAX_ITER,
    })
}

/// Snyder (1987) eq. 14-15: m = cos φ / sqrt(1 - e² sin² φ).
pub fn msfn(phi: f64, e2: f64) -> f64 {
    let (s, c) = phi.sin_cos();
    c / (1.0 - e2 * s * s).sqrt()
}

/// Snyder (1987) eq. 7-10: t = tan(π/4 - φ/2) / ((1 - e sin φ)/(1 + e sin φ))^(e/2).
///
/// `exp(-ψ)` for isometric latitude ψ; zero at the north pole.
pub fn tsfn(phi: f64, e: f64) -> f64 {
    let es = e * phi.sin();
    (FRAC_PI_4 - 0.5 * phi).tan() / ((1.0 - es) / (1.0 + es)).powf(0.5 * e)
}

/// Invert [`tsfn`]: latitude from t, by fixed-point iteration (Snyder 7-9).
pub fn phi_from_ts(ts: f64, e: f64) -> Result<f64, ProjError> {
    let half_e = 0.5 * e;
    let mut phi = FRAC_PI_2 - 2.0 * ts.atan();
    for i in 0..MAX_ITER {
        let con = e * phi.sin();
        let dphi = FRAC_PI_2 - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(half_e)).atan() - phi;
        phi += dphi;
        if dphi.abs() <= TOL {
            log::trace!("phi_from_ts converged after {} iterations", i + 1);
            return Ok(phi);
        }
    }
    Err(ProjError::ConvergenceFailure {
        what: "latitude from isometric latitude",
        iterations: MAX_ITER,
    })
}

/// Snyder (1987) eq. 3-12: authalic q(φ).
pub fn qsfn(phi: f64, e: f64) -> f64 {
    let sin_phi = phi.sin();
    if e < 1e-7 {
        return 2.0 * sin_phi;
    }
    let con = e * sin_phi;
    (1.0 - e * e) * (sin_phi / (1.0 - con * con) - (0.5 / e) * ((1.0 - con) / (1.0 + con)).ln())
}

/// Invert [`qsfn`] by Newton iteration (Snyder 3-16).
pub fn phi_from_q(q: f64, e: f64) -> Result<f64, ProjError> {
    let mut phi = (0.5 * q).clamp(-1.0, 1.0).asin();
    if e < 1e-7 {
        return Ok(phi);
    }
    let one_es = 1.0 - e * e;
    for _ in 0..MAX_ITER {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let con = e * sin_phi;
        let com = 1.0 - con * con;
        let dphi = 0.5 * com * com / cos_phi
            * (q / one_es - sin_phi / com + 0.5 / e * ((1.0 - con) / (1.0 + con)).ln());
        phi += dphi;
        if dphi.abs() <= TOL {
            return Ok(phi);
        }
    }
    Err(ProjError::ConvergenceFailure {
        what: "latitude from authalic q",
        iterations: MAX_ITER,
    })
}
