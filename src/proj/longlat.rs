//! Pass-through systems: geographic (`longlat`) and geocentric (`geocent`).
//!
//! Neither projects anything. Geographic coordinates stay in radians;
//! geocentric coordinates are handled by the pipeline via
//! [`crate::proj::geocentric`].

use crate::error::ProjError;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::Projector;

pub struct LongLat {
    ellipsoid: Ellipsoid,
}

impl LongLat {
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }
}

impl Projector for LongLat {
    fn id(&self) -> &'static str {
        "longlat"
    }

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        Ok((lon, lat))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        Ok((x, y))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}

pub struct Geocentric {
    ellipsoid: Ellipsoid,
}

impl Geocentric {
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }
}

impl Projector for Geocentric {
    fn id(&self) -> &'static str {
        "geocent"
    }

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        Ok((lon, lat))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        Ok((x, y))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}
