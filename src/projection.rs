//! The resolved, immutable projection handle.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::ProjError;
use crate::factory;
use crate::params::ProjectionParameters;
use crate::point::{Coordinate, Point};
use crate::proj::common::EPS10;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::{pipeline, Projector};
use crate::registry::{DatumShift, ProjectionTypeDef};
use crate::{DEG_TO_RAD, RAD_TO_DEG};

/// Largest accepted input longitude magnitude, in radians.
const MAX_LON: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SystemKind {
    LatLong,
    Geocentric,
    Projected,
}

/// Datum as resolved by the factory. `shift == None` is an unknown datum:
/// points pass through without a datum shift.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Datum {
    pub id: Option<&'static str>,
    pub shift: Option<DatumShift>,
}

/// A fully resolved coordinate system.
///
/// Built once from a parameter set and never mutated afterwards, so a single
/// instance can be shared across threads.
pub struct Projection {
    pub(crate) params: ProjectionParameters,
    pub(crate) definition: String,
    pub(crate) projection_type: &'static ProjectionTypeDef,
    pub(crate) kind: SystemKind,
    pub(crate) projector: Box<dyn Projector>,
    pub(crate) datum: Datum,
    pub(crate) pm_offset: f64,
    pub(crate) to_meter: f64,
}

impl Projection {
    pub fn new(params: ProjectionParameters) -> Result<Self, ProjError> {
        factory::build(params)
    }

    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ProjError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(ProjectionParameters::from_tokens(tokens)?)
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ProjError>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::new(ProjectionParameters::from_pairs(pairs)?)
    }

    /// Family identifier as given in `proj=`, e.g. `"utm"` or `"latlong"`.
    pub fn family_id(&self) -> &'static str {
        self.projection_type.id
    }

    pub fn projection_type(&self) -> &'static ProjectionTypeDef {
        self.projection_type
    }

    pub fn has_inverse(&self) -> bool {
        self.projector.has_inverse()
    }

    pub fn is_latlong(&self) -> bool {
        self.kind == SystemKind::LatLong
    }

    pub fn is_geocentric(&self) -> bool {
        self.kind == SystemKind::Geocentric
    }

    /// Registry id of the datum, when it has one.
    pub fn datum_id(&self) -> Option<&'static str> {
        self.datum.id
    }

    /// Shift into WGS84, or `None` for an unknown datum.
    pub fn datum_shift(&self) -> Option<&DatumShift> {
        self.datum.shift.as_ref()
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        self.projector.ellipsoid()
    }

    /// Prime meridian longitude east of Greenwich, radians.
    pub fn prime_meridian_offset(&self) -> f64 {
        self.pm_offset
    }

    /// Metres per projected unit.
    pub fn to_meter(&self) -> f64 {
        self.to_meter
    }

    /// The parameters this projection was built from.
    pub fn parameters(&self) -> &ProjectionParameters {
        &self.params
    }

    /// Canonical `+key=value` definition, datum expansions appended.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Project geographic coordinates (radians) to map coordinates.
    pub fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        if self.kind == SystemKind::Geocentric {
            return Ok((lon, lat));
        }
        check_geodetic(lon, lat)?;
        let (x, y) = self.projector.forward(lon, lat)?;
        let (x, y) = match self.kind {
            SystemKind::Projected => (x / self.to_meter, y / self.to_meter),
            _ => (x, y),
        };
        check_finite(x, y)?;
        Ok((x, y))
    }

    /// Map coordinates back to geographic coordinates (radians).
    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        if !self.has_inverse() {
            return Err(ProjError::InverseUnsupported(self.family_id().to_string()));
        }
        if self.kind == SystemKind::Geocentric {
            return Ok((x, y));
        }
        check_finite(x, y)?;
        let (x, y) = match self.kind {
            SystemKind::Projected => (x * self.to_meter, y * self.to_meter),
            _ => (x, y),
        };
        let (lon, lat) = self.projector.inverse(x, y)?;
        check_finite(lon, lat)?;
        check_geodetic(lon, lat)?;
        Ok((lon, lat))
    }

    /// [`Projection::forward`] taking degrees.
    pub fn forward_deg(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        self.forward(lon * DEG_TO_RAD, lat * DEG_TO_RAD)
    }

    /// [`Projection::inverse`] returning degrees.
    pub fn inverse_deg(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let (lon, lat) = self.inverse(x, y)?;
        Ok((lon * RAD_TO_DEG, lat * RAD_TO_DEG))
    }

    /// Transform a point from this system into `dst`, shifting datums as
    /// needed.
    pub fn transform(&self, dst: &Projection, point: Point) -> Result<Point, ProjError> {
        pipeline::transform(self, dst, point)
    }

    /// Forward-project every coordinate in place.
    ///
    /// A failing coordinate is left untouched and its error returned.
    pub fn forward_all<C: Coordinate + Send>(&self, coords: &mut [C]) -> Result<(), ProjError> {
        apply_all(coords, |c| {
            let (x, y) = self.forward(c.x(), c.y())?;
            c.set_xy(x, y);
            Ok(())
        })
    }

    /// Inverse-project every coordinate in place.
    pub fn inverse_all<C: Coordinate + Send>(&self, coords: &mut [C]) -> Result<(), ProjError> {
        apply_all(coords, |c| {
            let (lon, lat) = self.inverse(c.x(), c.y())?;
            c.set_xy(lon, lat);
            Ok(())
        })
    }

    /// Transform every coordinate into `dst` in place.
    pub fn transform_all<C: Coordinate + Send>(
        &self,
        dst: &Projection,
        coords: &mut [C],
    ) -> Result<(), ProjError> {
        apply_all(coords, |c| {
            let p = pipeline::transform(self, dst, c.to_point())?;
            c.set_point(p);
            Ok(())
        })
    }
}

#[cfg(feature = "parallel")]
fn apply_all<C, F>(coords: &mut [C], f: F) -> Result<(), ProjError>
where
    C: Coordinate + Send,
    F: Fn(&mut C) -> Result<(), ProjError> + Sync + Send,
{
    coords.par_iter_mut().try_for_each(f)
}

#[cfg(not(feature = "parallel"))]
fn apply_all<C, F>(coords: &mut [C], f: F) -> Result<(), ProjError>
where
    C: Coordinate + Send,
    F: Fn(&mut C) -> Result<(), ProjError> + Sync + Send,
{
    coords.iter_mut().try_for_each(f)
}

fn check_geodetic(lon: f64, lat: f64) -> Result<(), ProjError> {
    if !(lat.abs() <= FRAC_PI_2 + EPS10 && lon.abs() <= MAX_LON) {
        return Err(ProjError::NumericallyInvalid(
            "latitude or longitude exceeded limits".into(),
        ));
    }
    Ok(())
}

fn check_finite(x: f64, y: f64) -> Result<(), ProjError> {
    if !(x.is_finite() && y.is_finite()) {
        return Err(ProjError::NumericallyInvalid("non-finite coordinate".into()));
    }
    Ok(())
}

impl FromStr for Projection {
    type Err = ProjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.parse()?)
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition)
    }
}

impl fmt::Debug for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection")
            .field("definition", &self.definition)
            .field("kind", &self.kind)
            .finish()
    }
}
