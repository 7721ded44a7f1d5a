//! Pipeline: moves a point between two resolved coordinate systems.
//!
//! ```text
//! src coords ─inverse─▶ geodetic(src) ─▶ geocentric ─towgs84─▶ WGS84
//!                                                                │
//! dst coords ◀─forward─ geodetic(dst) ◀─ geocentric ◀─inverse────┘
//! ```
//!
//! The geocentric leg runs only when the two datums differ and both are
//! known.

use std::ptr;

use crate::error::ProjError;
use crate::point::Point;
use crate::proj::common::adjlon;
use crate::proj::geocentric::{
    from_wgs84, geocentric_to_geodetic, geodetic_to_geocentric, to_wgs84,
};
use crate::projection::Projection;

/// Transform `point` from `src` coordinates into `dst` coordinates.
///
/// Geographic ends are in radians. A 2D point is treated as lying on the
/// ellipsoid and comes back 2D, except into a geocentric system, whose
/// output always carries Z. Geocentric input must carry Z.
pub fn transform(src: &Projection, dst: &Projection, point: Point) -> Result<Point, ProjError> {
    if ptr::eq(src, dst) || src.definition() == dst.definition() {
        return Ok(point);
    }

    let (lon, lat, h) = to_geodetic(src, point)?;
    let (lon, lat, h) = shift_datum(src, dst, lon, lat, h)?;
    let (x, y, h) = from_geodetic(dst, lon, lat, h)?;

    let z = if dst.is_geocentric() {
        Some(h)
    } else {
        point.z.map(|_| h)
    };
    Ok(Point { x, y, z })
}

/// Source coordinates to Greenwich-relative geodetic (lon, lat, h).
fn to_geodetic(src: &Projection, point: Point) -> Result<(f64, f64, f64), ProjError> {
    if src.is_geocentric() {
        let z = point.z.ok_or_else(|| {
            ProjError::NumericallyInvalid("geocentric input requires a z coordinate".into())
        })?;
        let k = src.to_meter();
        return geocentric_to_geodetic(src.ellipsoid(), point.x * k, point.y * k, z * k);
    }
    let h = point.z.unwrap_or(0.0);
    let (lon, lat) = src.inverse(point.x, point.y)?;
    Ok((adjlon(lon + src.prime_meridian_offset()), lat, h))
}

/// Greenwich-relative geodetic to destination coordinates.
fn from_geodetic(
    dst: &Projection,
    lon: f64,
    lat: f64,
    h: f64,
) -> Result<(f64, f64, f64), ProjError> {
    if dst.is_geocentric() {
        let [x, y, z] = geodetic_to_geocentric(dst.ellipsoid(), lon, lat, h)?;
        let k = dst.to_meter();
        return Ok((x / k, y / k, z / k));
    }
    let (x, y) = dst.forward(adjlon(lon - dst.prime_meridian_offset()), lat)?;
    Ok((x, y, h))
}

fn shift_datum(
    src: &Projection,
    dst: &Projection,
    lon: f64,
    lat: f64,
    h: f64,
) -> Result<(f64, f64, f64), ProjError> {
    let (src_shift, dst_shift) = match (src.datum_shift(), dst.datum_shift()) {
        (Some(s), Some(d)) => (s, d),
        // Unknown datum on either side: no shift
        _ => return Ok((lon, lat, h)),
    };
    if src_shift == dst_shift && src.ellipsoid().same_shape(dst.ellipsoid()) {
        return Ok((lon, lat, h));
    }

    log::debug!(
        "datum shift {:?} -> {:?}",
        src.datum_id().unwrap_or("custom"),
        dst.datum_id().unwrap_or("custom")
    );

    let xyz = geodetic_to_geocentric(src.ellipsoid(), lon, lat, h)?;
    let xyz = from_wgs84(dst_shift, to_wgs84(src_shift, xyz));
    geocentric_to_geodetic(dst.ellipsoid(), xyz[0], xyz[1], xyz[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEG_TO_RAD, RAD_TO_DEG};
    use approx::assert_relative_eq;

    fn proj(spec: &str) -> Projection {
        spec.parse().unwrap()
    }

    #[test]
    fn test_identical_definitions_pass_through() {
        let a = proj("+proj=utm +zone=33 +ellps=WGS84");
        let b = proj("+proj=utm +zone=33 +ellps=WGS84");
        let p = Point::new(1e300, f64::NAN);
        let out = transform(&a, &b, p).unwrap();
        assert_eq!(out.x, 1e300);
        assert!(out.y.is_nan());
        assert_eq!(out.z, None);
    }

    #[test]
    fn test_utm_to_latlong() {
        let utm = proj("+proj=utm +zone=33 +ellps=WGS84");
        let ll = proj("+proj=longlat +ellps=WGS84");
        let out = transform(&utm, &ll, Point::new(500_000.0, 5_760_000.0)).unwrap();
        assert_relative_eq!(out.x * RAD_TO_DEG, 15.0, epsilon = 1e-9);
        assert!(out.y * RAD_TO_DEG > 51.0 && out.y * RAD_TO_DEG < 53.0);
        assert_eq!(out.z, None);
    }

    #[test]
    fn test_utm_to_webmerc_and_back() {
        let utm = proj("+proj=utm +zone=33 +datum=WGS84");
        let wm = proj("+proj=webmerc +datum=WGS84");
        let p = Point::new(510_000.0, 5_770_000.0);
        let q = transform(&utm, &wm, p).unwrap();
        assert!(q.x.abs() < 20_037_509.0 && q.y.abs() < 20_037_509.0);
        let back = transform(&wm, &utm, q).unwrap();
        assert_relative_eq!(back.x, p.x, epsilon = 1e-6);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-6);
    }

    #[test]
    fn test_prime_meridian_applied() {
        let paris = proj("+proj=longlat +ellps=WGS84 +pm=paris");
        let greenwich = proj("+proj=longlat +ellps=WGS84");
        let out = transform(&paris, &greenwich, Point::new(0.0, 0.8)).unwrap();
        assert_relative_eq!(out.x, paris.prime_meridian_offset(), epsilon = 1e-15);
        assert_relative_eq!(out.y, 0.8, epsilon = 1e-15);
    }

    #[test]
    fn test_geocentric_endpoints() {
        let ll = proj("+proj=longlat +datum=WGS84");
        let gc = proj("+proj=geocent +datum=WGS84");
        let out = transform(&ll, &gc, Point::new_3d(0.0, 0.0, 100.0)).unwrap();
        assert_relative_eq!(out.x, 6_378_237.0, epsilon = 1e-6);
        assert_relative_eq!(out.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(out.z.unwrap(), 0.0, epsilon = 1e-6);

        let back = transform(&gc, &ll, out).unwrap();
        assert_relative_eq!(back.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(back.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(back.z.unwrap(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_geocentric_output_keeps_z_for_2d_input() {
        let ll = proj("+proj=longlat +datum=WGS84");
        let gc = proj("+proj=geocent +datum=WGS84");
        let out = transform(&ll, &gc, Point::new(0.5, 0.8)).unwrap();
        assert!(out.z.unwrap() > 4_000_000.0);

        let back = transform(&gc, &ll, out).unwrap();
        assert_relative_eq!(back.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(back.y, 0.8, epsilon = 1e-12);
        assert_relative_eq!(back.z.unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_geocentric_input_without_z_fails() {
        let ll = proj("+proj=longlat +datum=WGS84");
        let gc = proj("+proj=geocent +datum=WGS84");
        let err = transform(&gc, &ll, Point::new(3_906_440.0, 2_134_098.0)).unwrap_err();
        assert!(matches!(err, ProjError::NumericallyInvalid(_)));
    }

    #[test]
    fn test_geocentric_units() {
        let ll = proj("+proj=longlat +datum=WGS84");
        let gc_km = proj("+proj=geocent +datum=WGS84 +units=km");
        let out = transform(&ll, &gc_km, Point::new(0.0, 0.0)).unwrap();
        assert_relative_eq!(out.x, 6_378.137, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_datum_skips_shift() {
        let clarke = proj("+proj=longlat +ellps=clrk66");
        let potsdam = proj("+proj=longlat +datum=potsdam");
        let p = Point::new(0.2, 0.7);
        let out = transform(&clarke, &potsdam, p).unwrap();
        assert_eq!((out.x, out.y), (p.x, p.y));
    }

    #[test]
    fn test_potsdam_shift_moves_point() {
        let potsdam = proj("+proj=longlat +datum=potsdam");
        let wgs = proj("+proj=longlat +datum=WGS84");
        let p = Point::new(8.43 * DEG_TO_RAD, 48.99 * DEG_TO_RAD);
        let q = transform(&potsdam, &wgs, p).unwrap();
        // A few tens of metres, well under a hundredth of a degree.
        let dlon = (q.x - p.x) * RAD_TO_DEG;
        let dlat = (q.y - p.y) * RAD_TO_DEG;
        assert!(dlon.abs() > 1e-4 && dlon.abs() < 1e-2, "dlon = {dlon}");
        assert!(dlat.abs() > 1e-4 && dlat.abs() < 1e-2, "dlat = {dlat}");

        let back = transform(&wgs, &potsdam, q).unwrap();
        assert_relative_eq!(back.x, p.x, epsilon = 1e-10);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-10);
    }

    #[test]
    fn test_failure_propagates() {
        let ll = proj("+proj=longlat +datum=WGS84");
        let merc = proj("+proj=merc +datum=WGS84");
        let err = transform(&ll, &merc, Point::new(0.0, std::f64::consts::FRAC_PI_2)).unwrap_err();
        assert!(matches!(err, ProjError::NumericallyInvalid(_)));
    }
}
