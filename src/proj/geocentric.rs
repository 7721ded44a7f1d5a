//! Geodetic ↔ geocentric (earth-centred, earth-fixed) conversion and the
//! Helmert shifts applied between the two.
//!
//! Geocentric X points at (0°, 0°), Y at (90°E, 0°), Z at the north pole.
//! All lengths are metres.

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;
use crate::proj::common::{EPS10, MAX_ITER, TOL};
use crate::proj::ellipsoid::Ellipsoid;
use crate::registry::DatumShift;

/// Arc-seconds to radians.
const SEC_TO_RAD: f64 = 4.848_136_811_095_359_935_9e-6;

/// Geodetic (lon, lat radians, height metres) to geocentric X, Y, Z.
pub fn geodetic_to_geocentric(
    ellipsoid: &Ellipsoid,
    lon: f64,
    lat: f64,
    h: f64,
) -> Result<[f64; 3], ProjError> {
    let lat = if lat.abs() > FRAC_PI_2 {
        if lat.abs() > FRAC_PI_2 + EPS10 {
            return Err(ProjError::NumericallyInvalid(format!(
                "latitude {lat} outside [-π/2, π/2]"
            )));
        }
        FRAC_PI_2.copysign(lat)
    } else {
        lat
    };

    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    let e2 = ellipsoid.e2;

    // Prime vertical radius of curvature
    let n = ellipsoid.a / (1.0 - e2 * sin_lat * sin_lat).sqrt();

    Ok([
        (n + h) * cos_lat * cos_lon,
        (n + h) * cos_lat * sin_lon,
        (n * (1.0 - e2) + h) * sin_lat,
    ])
}

/// Geocentric X, Y, Z to geodetic (lon, lat radians, height metres).
///
/// Iterates on latitude with the height taken along the normal; converges
/// in a handful of steps for terrestrial points.
pub fn geocentric_to_geodetic(
    ellipsoid: &Ellipsoid,
    x: f64,
    y: f64,
    z: f64,
) -> Result<(f64, f64, f64), ProjError> {
    let a = ellipsoid.a;
    let e2 = ellipsoid.e2;
    let p = x.hypot(y);

    if p < EPS10 * a {
        // On the polar axis; longitude is arbitrary.
        let lat = if z < 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 };
        return Ok((0.0, lat, z.abs() - ellipsoid.b));
    }

    let lon = y.atan2(x);
    let mut lat = z.atan2(p * (1.0 - e2));
    for i in 0..MAX_ITER {
        let (sin_lat, cos_lat) = lat.sin_cos();
        let w = (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let n = a / w;
        let h = p * cos_lat + z * sin_lat - a * w;
        let next = z.atan2(p * (1.0 - e2 * n / (n + h)));
        if (next - lat).abs() < TOL {
            log::trace!("geocentric_to_geodetic converged after {} iterations", i + 1);
            let (sin_lat, cos_lat) = next.sin_cos();
            let h = p * cos_lat + z * sin_lat - a * (1.0 - e2 * sin_lat * sin_lat).sqrt();
            return Ok((lon, next, h));
        }
        lat = next;
    }
    Err(ProjError::ConvergenceFailure {
        what: "geodetic latitude from geocentric coordinates",
        iterations: MAX_ITER,
    })
}

/// Apply a datum's `towgs84` shift: datum frame → WGS84 frame.
///
/// Seven parameter shifts use the position vector convention with
/// rotations in arc-seconds and scale in parts per million.
pub fn to_wgs84(shift: &DatumShift, [x, y, z]: [f64; 3]) -> [f64; 3] {
    match *shift {
        DatumShift::ThreeParam([dx, dy, dz]) => [x + dx, y + dy, z + dz],
        DatumShift::SevenParam([dx, dy, dz, rx, ry, rz, ds]) => {
            let (rx, ry, rz) = (rx * SEC_TO_RAD, ry * SEC_TO_RAD, rz * SEC_TO_RAD);
            let m = 1.0 + ds * 1e-6;
            [
                m * (x - rz * y + ry * z) + dx,
                m * (rz * x + y - rx * z) + dy,
                m * (-ry * x + rx * y + z) + dz,
            ]
        }
    }
}

/// Inverse of [`to_wgs84`]: WGS84 frame → datum frame.
pub fn from_wgs84(shift: &DatumShift, [x, y, z]: [f64; 3]) -> [f64; 3] {
    match *shift {
        DatumShift::ThreeParam([dx, dy, dz]) => [x - dx, y - dy, z - dz],
        DatumShift::SevenParam([dx, dy, dz, rx, ry, rz, ds]) => {
            let (rx, ry, rz) = (rx * SEC_TO_RAD, ry * SEC_TO_RAD, rz * SEC_TO_RAD);
            let m = 1.0 + ds * 1e-6;
            let (x, y, z) = ((x - dx) / m, (y - dy) / m, (z - dz) / m);
            // Transposed rotation; exact to first order in the small angles.
            [x + rz * y - ry * z, -rz * x + y + rx * z, ry * x - rx * y + z]
        }
    }
}
