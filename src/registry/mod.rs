//! Static definition tables: ellipsoids, datums, prime meridians, linear
//! units and projection types.
//!
//! Tables are plain `static` slices, so lookups need no initialization and no
//! locking. `list` functions return entries in declaration order.

mod datums;
mod ellipsoids;
mod prime_meridians;
mod projection_types;
mod units;

use std::fmt;

use crate::dms;
use crate::error::ProjError;
use crate::proj::ellipsoid::Ellipsoid;

pub use datums::DATUMS;
pub use ellipsoids::ELLIPSOIDS;
pub use prime_meridians::PRIME_MERIDIANS;
pub use projection_types::PROJECTION_TYPES;
pub use units::UNITS;

/// Second defining parameter of an ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EllipsoidShape {
    /// Reciprocal flattening.
    Rf(f64),
    /// Semi-minor axis in metres.
    B(f64),
}

/// A named reference ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipsoidDef {
    pub id: &'static str,
    /// Semi-major axis (metres)
    pub a: f64,
    pub shape: EllipsoidShape,
    pub name: &'static str,
}

impl EllipsoidDef {
    /// Semi-major axis as a definition token, e.g. `a=6377397.155`.
    pub fn major(&self) -> String {
        format!("a={}", self.a)
    }

    /// Flattening parameter as a definition token, e.g. `rf=299.1528128`.
    pub fn ell(&self) -> String {
        match self.shape {
            EllipsoidShape::Rf(rf) => format!("rf={rf}"),
            EllipsoidShape::B(b) => format!("b={b}"),
        }
    }

    pub fn to_ellipsoid(&self) -> Result<Ellipsoid, ProjError> {
        match self.shape {
            EllipsoidShape::Rf(rf) => Ellipsoid::from_a_rf(self.a, rf),
            EllipsoidShape::B(b) => Ellipsoid::from_a_b(self.a, b),
        }
    }
}

impl fmt::Display for EllipsoidDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

/// Shift from a datum into WGS84, in the `towgs84` convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DatumShift {
    /// Geocentric translation (dx, dy, dz) in metres.
    ThreeParam([f64; 3]),
    /// Helmert: dx, dy, dz (m), rx, ry, rz (arc-seconds), ds (ppm).
    SevenParam([f64; 7]),
}

impl DatumShift {
    /// Parse the comma separated `towgs84` value (3 or 7 numbers).
    pub fn parse(value: &str) -> Result<Self, ProjError> {
        let values = value
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|_| ProjError::invalid_value("towgs84", format!("'{value}' is not a list of numbers")))?;

        match values.len() {
            3 => Ok(DatumShift::ThreeParam([values[0], values[1], values[2]])),
            7 => {
                let mut p = [0.0; 7];
                p.copy_from_slice(&values);
                // A seven parameter set without rotation or scale is a translation.
                if p[3..].iter().all(|&v| v == 0.0) {
                    Ok(DatumShift::ThreeParam([p[0], p[1], p[2]]))
                } else {
                    Ok(DatumShift::SevenParam(p))
                }
            }
            n => Err(ProjError::invalid_value(
                "towgs84",
                format!("expected 3 or 7 values, got {n}"),
            )),
        }
    }
}

/// A named geodetic datum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatumDef {
    pub id: &'static str,
    pub ellipse_id: &'static str,
    /// Shift definition, e.g. `towgs84=606.0,23.0,413.0`.
    pub defn: &'static str,
    pub comments: &'static str,
}

impl DatumDef {
    /// Parsed shift parameters of this datum.
    pub fn shift(&self) -> Result<DatumShift, ProjError> {
        let value = self
            .defn
            .strip_prefix("towgs84=")
            .ok_or_else(|| ProjError::UnknownDatum(format!("{}: unsupported definition '{}'", self.id, self.defn)))?;
        DatumShift::parse(value)
    }
}

impl fmt::Display for DatumDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

/// A named prime meridian.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrimeMeridianDef {
    pub id: &'static str,
    /// Longitude east of Greenwich as an angle string.
    pub defn: &'static str,
}

impl PrimeMeridianDef {
    /// Offset from Greenwich in radians.
    pub fn offset(&self) -> Result<f64, ProjError> {
        dms::parse_radians(self.defn)
            .ok_or_else(|| ProjError::invalid_value("pm", format!("'{}' is not an angle", self.defn)))
    }
}

impl fmt::Display for PrimeMeridianDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

/// A named linear unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitDef {
    pub id: &'static str,
    /// Conversion factor to metres, plain or as `numerator/denominator`.
    pub to_meter: &'static str,
    pub name: &'static str,
}

impl UnitDef {
    /// Numeric conversion factor to metres.
    pub fn factor(&self) -> Result<f64, ProjError> {
        parse_factor(self.to_meter).ok_or_else(|| ProjError::UnknownUnit(self.id.to_string()))
    }
}

impl fmt::Display for UnitDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

/// A supported projection family, as listed to callers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionTypeDef {
    pub id: &'static str,
    /// Name, category and parameters separated by `\n\t`.
    pub descr: &'static str,
}

impl ProjectionTypeDef {
    /// First line of the description.
    pub fn name(&self) -> &'static str {
        self.descr.split('\n').next().unwrap_or(self.descr)
    }
}

impl fmt::Display for ProjectionTypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

/// Parse a positive conversion factor: `0.3048` or `1200/3937`.
pub fn parse_factor(s: &str) -> Option<f64> {
    let value = match s.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().ok()?;
            let den: f64 = den.trim().parse().ok()?;
            num / den
        }
        None => s.trim().parse().ok()?,
    };
    (value.is_finite() && value > 0.0).then_some(value)
}

pub fn lookup_ellipsoid(id: &str) -> Option<&'static EllipsoidDef> {
    ELLIPSOIDS.iter().find(|e| e.id == id)
}

pub fn lookup_datum(id: &str) -> Option<&'static DatumDef> {
    DATUMS.iter().find(|d| d.id == id)
}

pub fn lookup_prime_meridian(id: &str) -> Option<&'static PrimeMeridianDef> {
    PRIME_MERIDIANS.iter().find(|p| p.id == id)
}

pub fn lookup_unit(id: &str) -> Option<&'static UnitDef> {
    UNITS.iter().find(|u| u.id == id)
}

pub fn lookup_projection_type(id: &str) -> Option<&'static ProjectionTypeDef> {
    PROJECTION_TYPES.iter().find(|p| p.id == id)
}

pub fn ellipsoids() -> &'static [EllipsoidDef] {
    ELLIPSOIDS
}

pub fn datums() -> &'static [DatumDef] {
    DATUMS
}

pub fn prime_meridians() -> &'static [PrimeMeridianDef] {
    PRIME_MERIDIANS
}

pub fn units() -> &'static [UnitDef] {
    UNITS
}

pub fn projection_types() -> &'static [ProjectionTypeDef] {
    PROJECTION_TYPES
}
