//! Resolves a parameter set into a [`Projection`].
//!
//! Defaults when a parameter is absent: WGS84 ellipsoid, Greenwich prime
//! meridian, metre units, `lon_0 = lat_0 = x_0 = y_0 = 0`, `k_0 = 1`.

use std::f64::consts::FRAC_PI_2;

use crate::dms;
use crate::error::ProjError;
use crate::params::ProjectionParameters;
use crate::proj::albers_equal_area::AlbersEqualArea;
use crate::proj::bacon::{Globular, GlobularProjection};
use crate::proj::common::EPS10;
use crate::proj::ellipsoid::{Ellipsoid, WGS84};
use crate::proj::equirectangular::Equirectangular;
use crate::proj::lambert_conformal::LambertConformalConic;
use crate::proj::longlat::{Geocentric, LongLat};
use crate::proj::mercator::{Mercator, WebMercator};
use crate::proj::sinusoidal::Sinusoidal;
use crate::proj::stereographic::{ObliqueStereographic, PolarStereographic};
use crate::proj::transverse_mercator::TransverseMercator;
use crate::proj::Projector;
use crate::projection::{Datum, Projection, SystemKind};
use crate::registry::{self, DatumDef, DatumShift};

pub(crate) fn build(params: ProjectionParameters) -> Result<Projection, ProjError> {
    let family = match params.get_str("proj") {
        Some(name) => name,
        None => {
            return Err(ProjError::UnknownProjectionFamily(
                "projection not named".into(),
            ))
        }
    };
    let projection_type = registry::lookup_projection_type(family)
        .ok_or_else(|| ProjError::UnknownProjectionFamily(family.to_string()))?;

    check_combinations(&params)?;

    let datum_def = match params.get("datum") {
        None => None,
        Some(None) => return Err(ProjError::invalid_value("datum", "missing datum name")),
        Some(Some(id)) => Some(
            registry::lookup_datum(id).ok_or_else(|| ProjError::UnknownDatum(id.to_string()))?,
        ),
    };

    let ellipsoid = resolve_ellipsoid(&params, datum_def)?;
    let datum = resolve_datum(&params, datum_def, &ellipsoid)?;
    let pm_offset = resolve_prime_meridian(&params)?;
    let to_meter = resolve_unit(&params)?;
    let (kind, projector) = build_projector(projection_type.id, &params, ellipsoid)?;
    let definition = expand_definition(&params, datum_def);

    log::debug!(
        "built {} projection ({}): {}",
        projection_type.id,
        projector.id(),
        definition
    );

    Ok(Projection {
        params,
        definition,
        projection_type,
        kind,
        projector,
        datum,
        pm_offset,
        to_meter,
    })
}

fn check_combinations(params: &ProjectionParameters) -> Result<(), ProjError> {
    let has = |key| params.contains(key);
    if has("ellps") && has("a") && (has("b") || has("rf")) {
        return Err(ProjError::InvalidParameterCombination(
            "ellps given together with a complete a/b or a/rf ellipsoid".into(),
        ));
    }
    if has("b") && has("rf") {
        return Err(ProjError::InvalidParameterCombination(
            "b and rf both define the flattening".into(),
        ));
    }
    if has("units") && has("to_meter") {
        return Err(ProjError::InvalidParameterCombination(
            "units and to_meter both define the unit".into(),
        ));
    }
    Ok(())
}

fn resolve_ellipsoid(
    params: &ProjectionParameters,
    datum_def: Option<&'static DatumDef>,
) -> Result<Ellipsoid, ProjError> {
    if let Some(r) = params.get_f64("R")? {
        return Ellipsoid::sphere(r);
    }

    let named = match params.get("ellps") {
        None => None,
        Some(None) => return Err(ProjError::invalid_value("ellps", "missing ellipsoid name")),
        Some(Some(id)) => Some(
            registry::lookup_ellipsoid(id)
                .ok_or_else(|| ProjError::UnknownEllipsoid(id.to_string()))?,
        ),
    };
    // A datum only supplies its ellipsoid when none was given explicitly.
    let named = match (named, datum_def) {
        (Some(def), _) => Some(def),
        (None, Some(datum)) => Some(
            registry::lookup_ellipsoid(datum.ellipse_id)
                .ok_or_else(|| ProjError::UnknownEllipsoid(datum.ellipse_id.to_string()))?,
        ),
        (None, None) => None,
    };

    let base = match named {
        Some(def) => def.to_ellipsoid()?,
        None => WGS84,
    };
    let a = params.get_f64("a")?;

    if let Some(b) = params.get_f64("b")? {
        return Ellipsoid::from_a_b(a.unwrap_or(base.a), b);
    }
    if let Some(rf) = params.get_f64("rf")? {
        return Ellipsoid::from_a_rf(a.unwrap_or(base.a), rf);
    }
    match a {
        // Explicit major axis keeps the flattening of the named ellipsoid,
        // or makes a sphere when nothing was named.
        Some(a) if named.is_none() => Ellipsoid::sphere(a),
        Some(a) if base.f == 0.0 => Ellipsoid::sphere(a),
        Some(a) => Ellipsoid::from_a_rf(a, 1.0 / base.f),
        None => Ok(base),
    }
}

fn resolve_datum(
    params: &ProjectionParameters,
    datum_def: Option<&'static DatumDef>,
    ellipsoid: &Ellipsoid,
) -> Result<Datum, ProjError> {
    let id = datum_def.map(|d| d.id);
    match params.get("towgs84") {
        Some(None) => return Err(ProjError::invalid_value("towgs84", "missing shift values")),
        Some(Some(value)) => {
            return Ok(Datum {
                id,
                shift: Some(DatumShift::parse(value)?),
            })
        }
        None => {}
    }
    if let Some(def) = datum_def {
        return Ok(Datum {
            id,
            shift: Some(def.shift()?),
        });
    }
    if ellipsoid.same_shape(&WGS84) {
        return Ok(Datum {
            id: None,
            shift: Some(DatumShift::ThreeParam([0.0; 3])),
        });
    }
    Ok(Datum { id: None, shift: None })
}

fn resolve_prime_meridian(params: &ProjectionParameters) -> Result<f64, ProjError> {
    match params.get("pm") {
        None => Ok(0.0),
        Some(None) => Err(ProjError::UnknownUnit("pm".into())),
        Some(Some(v)) => match registry::lookup_prime_meridian(v) {
            Some(def) => def.offset(),
            None => dms::parse_radians(v).ok_or_else(|| ProjError::UnknownUnit(v.to_string())),
        },
    }
}

fn resolve_unit(params: &ProjectionParameters) -> Result<f64, ProjError> {
    if let Some(value) = params.get("to_meter") {
        let value = value.unwrap_or("");
        return registry::parse_factor(value).ok_or_else(|| {
            ProjError::invalid_value("to_meter", format!("'{value}' is not a positive factor"))
        });
    }
    match params.get("units") {
        None => Ok(1.0),
        Some(None) => Err(ProjError::UnknownUnit("units".into())),
        Some(Some(id)) => registry::lookup_unit(id)
            .ok_or_else(|| ProjError::UnknownUnit(id.to_string()))?
            .factor(),
    }
}

/// Latitude-valued parameter, checked against [-90°, 90°].
fn latitude(params: &ProjectionParameters, key: &str) -> Result<Option<f64>, ProjError> {
    match params.get_angle(key)? {
        Some(lat) if lat.abs() > FRAC_PI_2 + EPS10 => Err(ProjError::invalid_value(
            key,
            "latitude outside [-90°, 90°]",
        )),
        other => Ok(other),
    }
}

fn scale_factor(params: &ProjectionParameters) -> Result<f64, ProjError> {
    let (key, k) = match params.get_f64("k_0")? {
        Some(k) => ("k_0", Some(k)),
        None => ("k", params.get_f64("k")?),
    };
    match k {
        Some(k) if k <= 0.0 => Err(ProjError::invalid_value(key, "scale factor must be positive")),
        Some(k) => Ok(k),
        None => Ok(1.0),
    }
}

fn is_polar(lat: f64) -> bool {
    (lat.abs() - FRAC_PI_2).abs() < EPS10
}

fn build_projector(
    family: &'static str,
    params: &ProjectionParameters,
    ell: Ellipsoid,
) -> Result<(SystemKind, Box<dyn Projector>), ProjError> {
    let lon0 = params.get_angle("lon_0")?.unwrap_or(0.0);
    let lat0 = latitude(params, "lat_0")?;
    let x0 = params.get_f64("x_0")?.unwrap_or(0.0);
    let y0 = params.get_f64("y_0")?.unwrap_or(0.0);
    let k0 = scale_factor(params)?;

    let projector: Box<dyn Projector> = match family {
        "longlat" | "latlong" | "lonlat" | "latlon" => {
            return Ok((SystemKind::LatLong, Box::new(LongLat::new(ell))))
        }
        "geocent" => return Ok((SystemKind::Geocentric, Box::new(Geocentric::new(ell)))),
        "merc" => match latitude(params, "lat_ts")? {
            Some(lat_ts) => Box::new(Mercator::new(ell, lon0, lat_ts, x0, y0)?),
            None => Box::new(Mercator::with_scale(ell, lon0, k0, x0, y0)),
        },
        "webmerc" => Box::new(WebMercator::new(ell, lon0, x0, y0)),
        "tmerc" => Box::new(TransverseMercator::new(
            ell,
            lon0,
            lat0.unwrap_or(0.0),
            k0,
            x0,
            y0,
        )),
        "utm" => {
            let zone = match params.get_int("zone")? {
                Some(zone) => zone,
                None => TransverseMercator::zone_for_longitude(lon0),
            };
            Box::new(TransverseMercator::utm_zone(ell, zone, params.get_bool("south")?)?)
        }
        "lcc" => {
            let lat1 = latitude(params, "lat_1")?.unwrap_or(0.0);
            let lat2 = latitude(params, "lat_2")?;
            // Tangent cone at lat_1 when lat_2 is absent, origin on it too
            let lat0 = match (lat0, lat2) {
                (Some(lat0), _) => lat0,
                (None, Some(_)) => 0.0,
                (None, None) => lat1,
            };
            Box::new(LambertConformalConic::new(
                ell,
                lon0,
                lat0,
                lat1,
                lat2.unwrap_or(lat1),
                k0,
                x0,
                y0,
            )?)
        }
        "aea" => {
            let lat1 = latitude(params, "lat_1")?.unwrap_or(0.0);
            let lat2 = latitude(params, "lat_2")?.unwrap_or(0.0);
            Box::new(AlbersEqualArea::new(
                ell,
                lon0,
                lat0.unwrap_or(0.0),
                lat1,
                lat2,
                x0,
                y0,
            )?)
        }
        "eqc" => {
            let lat_ts = latitude(params, "lat_ts")?.unwrap_or(0.0);
            Box::new(Equirectangular::new(
                ell,
                lon0,
                lat0.unwrap_or(0.0),
                lat_ts,
                x0,
                y0,
            )?)
        }
        "sinu" => Box::new(Sinusoidal::new(ell, lon0, x0, y0)),
        "stere" | "sterea" => {
            let lat0 = lat0.unwrap_or(0.0);
            if is_polar(lat0) {
                let lat_ts = if family == "stere" {
                    latitude(params, "lat_ts")?
                } else {
                    None
                };
                Box::new(PolarStereographic::new(ell, lon0, lat0 > 0.0, lat_ts, k0, x0, y0))
            } else {
                Box::new(ObliqueStereographic::new(ell, lon0, lat0, k0, x0, y0)?.with_id(family))
            }
        }
        "apian" => Box::new(GlobularProjection::new(Globular::Apian, ell, lon0, x0, y0)),
        "bacon" => Box::new(GlobularProjection::new(Globular::Bacon, ell, lon0, x0, y0)),
        "ortel" => Box::new(GlobularProjection::new(Globular::Ortelius, ell, lon0, x0, y0)),
        other => return Err(ProjError::UnknownProjectionFamily(other.to_string())),
    };
    Ok((SystemKind::Projected, projector))
}

/// Given parameters in order, followed by the implied ellipsoid (the
/// datum's, else WGS84) and the datum's `towgs84`.
fn expand_definition(params: &ProjectionParameters, datum_def: Option<&'static DatumDef>) -> String {
    let mut expanded = params.clone();
    let has_ellipsoid = ["ellps", "a", "b", "rf", "R"].iter().any(|k| params.contains(k));
    if !has_ellipsoid {
        let ellps = datum_def.map_or("WGS84", |d| d.ellipse_id);
        expanded.set("ellps", Some(ellps.to_string()));
    }
    if let Some(def) = datum_def {
        if !params.contains("towgs84") {
            if let Some(shift) = def.defn.strip_prefix("towgs84=") {
                expanded.set("towgs84", Some(shift.to_string()));
            }
        }
    }
    expanded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    fn kind_of(spec: &str) -> ErrorKind {
        spec.parse::<Projection>().unwrap_err().kind()
    }

    #[test]
    fn test_defaults() {
        let p: Projection = "+proj=merc".parse().unwrap();
        assert_eq!(p.ellipsoid(), &WGS84);
        assert_eq!(p.prime_meridian_offset(), 0.0);
        assert_eq!(p.to_meter(), 1.0);
        assert_eq!(p.datum_id(), None);
        assert_eq!(p.datum_shift(), Some(&DatumShift::ThreeParam([0.0; 3])));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(kind_of("+proj=nope"), ErrorKind::UnknownProjectionFamily);
        assert_eq!(kind_of("+ellps=WGS84"), ErrorKind::UnknownProjectionFamily);
        assert_eq!(kind_of("+proj=merc +ellps=nope"), ErrorKind::UnknownEllipsoid);
        assert_eq!(kind_of("+proj=merc +datum=nope"), ErrorKind::UnknownDatum);
        assert_eq!(kind_of("+proj=merc +units=furlong"), ErrorKind::UnknownUnit);
        assert_eq!(kind_of("+proj=merc +pm=atlantis"), ErrorKind::UnknownUnit);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(kind_of("+proj=tmerc +lat_0=91"), ErrorKind::InvalidParameterValue);
        assert_eq!(kind_of("+proj=tmerc +k=0"), ErrorKind::InvalidParameterValue);
        assert_eq!(kind_of("+proj=tmerc +x_0=east"), ErrorKind::InvalidParameterValue);
        assert_eq!(kind_of("+proj=utm +zone=61"), ErrorKind::InvalidParameterValue);
        assert_eq!(kind_of("+proj=merc +a=-1"), ErrorKind::InvalidParameterValue);
        assert_eq!(kind_of("+proj=merc +a=6378137 +rf=0"), ErrorKind::InvalidParameterValue);
        assert_eq!(kind_of("+proj=merc +to_meter=0"), ErrorKind::InvalidParameterValue);
    }

    #[test]
    fn test_invalid_combinations() {
        for spec in [
            "+proj=merc +ellps=WGS84 +a=6378137 +b=6356752",
            "+proj=merc +ellps=WGS84 +a=6378137 +rf=298.257",
            "+proj=merc +a=6378137 +b=6356752 +rf=298.257",
            "+proj=merc +units=km +to_meter=1000",
            "+proj=lcc +lat_1=30 +lat_2=-30",
        ] {
            assert_eq!(kind_of(spec), ErrorKind::InvalidParameterCombination, "{spec}");
        }
    }

    #[test]
    fn test_explicit_axes_override_ellps() {
        let p: Projection = "+proj=merc +ellps=bessel +a=6378137".parse().unwrap();
        assert_eq!(p.ellipsoid().a, 6_378_137.0);
        assert_relative_eq!(1.0 / p.ellipsoid().f, 299.152_812_8, epsilon = 1e-6);

        let p: Projection = "+proj=merc +a=6378137 +b=6356752.314245".parse().unwrap();
        assert_relative_eq!(1.0 / p.ellipsoid().f, 298.257_223_563, epsilon = 1e-4);

        let p: Projection = "+proj=merc +R=6370997 +ellps=clrk66".parse().unwrap();
        assert!(p.ellipsoid().is_sphere());
    }

    #[test]
    fn test_datum_implies_ellipsoid() {
        let p: Projection = "+proj=tmerc +datum=potsdam".parse().unwrap();
        assert_eq!(p.ellipsoid().a, 6_377_397.155);
        assert_eq!(p.datum_id(), Some("potsdam"));
        assert_eq!(
            p.datum_shift(),
            Some(&DatumShift::ThreeParam([606.0, 23.0, 413.0]))
        );
    }

    #[test]
    fn test_towgs84_overrides_datum() {
        let p: Projection = "+proj=longlat +ellps=intl +towgs84=1,2,3".parse().unwrap();
        assert_eq!(p.datum_shift(), Some(&DatumShift::ThreeParam([1.0, 2.0, 3.0])));
        assert_eq!(
            kind_of("+proj=longlat +towgs84=1,2,3,4"),
            ErrorKind::InvalidParameterValue
        );
    }

    #[test]
    fn test_unknown_datum_for_foreign_ellipsoid() {
        let p: Projection = "+proj=longlat +ellps=clrk66".parse().unwrap();
        assert_eq!(p.datum_shift(), None);
    }

    #[test]
    fn test_prime_meridian_by_name_and_angle() {
        let paris: Projection = "+proj=longlat +pm=paris".parse().unwrap();
        assert_relative_eq!(
            paris.prime_meridian_offset().to_degrees(),
            2.337_229_166_666_7,
            epsilon = 1e-9
        );
        let custom: Projection = "+proj=longlat +pm=-9.5".parse().unwrap();
        assert_relative_eq!(custom.prime_meridian_offset(), (-9.5_f64).to_radians());
    }

    #[test]
    fn test_units() {
        let us: Projection = "+proj=tmerc +units=us-ft".parse().unwrap();
        assert_relative_eq!(us.to_meter(), 1200.0 / 3937.0);
        let tm: Projection = "+proj=tmerc +to_meter=0.3048".parse().unwrap();
        assert_eq!(tm.to_meter(), 0.3048);
    }

    #[test]
    fn test_family_flags() {
        let ll: Projection = "+proj=latlong".parse().unwrap();
        assert!(ll.is_latlong());
        assert_eq!(ll.family_id(), "latlong");
        let gc: Projection = "+proj=geocent".parse().unwrap();
        assert!(gc.is_geocentric());
        let st: Projection = "+proj=stere +lat_0=90 +lat_ts=70".parse().unwrap();
        assert!(!st.is_latlong() && !st.is_geocentric());
        assert!(st.has_inverse());
    }

    #[test]
    fn test_utm_zone_from_central_meridian() {
        let explicit: Projection = "+proj=utm +zone=32".parse().unwrap();
        let guessed: Projection = "+proj=utm +lon_0=9".parse().unwrap();
        assert_eq!(
            explicit.forward_deg(9.5, 50.0).unwrap(),
            guessed.forward_deg(9.5, 50.0).unwrap()
        );
    }

    #[test]
    fn test_definition_expands_datum() {
        let p = Projection::from_tokens([
            "init=epsg:4326",
            "proj=longlat",
            "datum=WGS84",
            "no_defs",
        ])
        .unwrap();
        assert_eq!(
            p.definition(),
            "+init=epsg:4326 +proj=longlat +datum=WGS84 +no_defs +ellps=WGS84 +towgs84=0,0,0"
        );
        assert_eq!(p.to_string(), p.definition());
        assert_eq!(p.datum_id(), Some("WGS84"));
    }

    #[test]
    fn test_definition_adds_default_ellipsoid() {
        let p: Projection = "+proj=ortel +lon_0=90w".parse().unwrap();
        assert_eq!(p.definition(), "+proj=ortel +lon_0=90w +ellps=WGS84");
        let sphere: Projection = "+proj=merc +R=6370997".parse().unwrap();
        assert_eq!(sphere.definition(), "+proj=merc +R=6370997");
    }

    #[test]
    fn test_definition_round_trips() {
        let p: Projection = "+proj=tmerc +lon_0=9 +k=1 +x_0=3500000 +datum=potsdam"
            .parse()
            .unwrap();
        let again: Projection = p.definition().parse().unwrap();
        assert_eq!(again.definition(), p.definition());
        assert_eq!(
            again.forward_deg(8.43, 48.99).unwrap(),
            p.forward_deg(8.43, 48.99).unwrap()
        );
    }
}
