use pyo3::prelude::*;

mod errors;
mod projection;
mod transform;

use crate::registry;

/// Register all Python-visible functions and types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<projection::PyProjection>()?;
    m.add_function(wrap_pyfunction!(transform::transform_points, m)?)?;
    m.add_function(wrap_pyfunction!(list_projections, m)?)?;
    m.add_function(wrap_pyfunction!(list_ellipsoids, m)?)?;
    m.add_function(wrap_pyfunction!(list_datums, m)?)?;
    m.add_function(wrap_pyfunction!(list_prime_meridians, m)?)?;
    m.add_function(wrap_pyfunction!(list_units, m)?)?;
    m.add_function(wrap_pyfunction!(error_message, m)?)?;
    m.add("DEG_TO_RAD", crate::DEG_TO_RAD)?;
    m.add("RAD_TO_DEG", crate::RAD_TO_DEG)?;
    errors::register(m)
}

/// (id, description) of every projection family.
#[pyfunction]
fn list_projections() -> Vec<(&'static str, &'static str)> {
    registry::projection_types()
        .iter()
        .map(|p| (p.id, p.descr))
        .collect()
}

/// (id, major, ell, name), e.g. `("bessel", "a=6377397.155", "rf=299.1528128", ...)`.
#[pyfunction]
fn list_ellipsoids() -> Vec<(&'static str, String, String, &'static str)> {
    registry::ellipsoids()
        .iter()
        .map(|e| (e.id, e.major(), e.ell(), e.name))
        .collect()
}

/// (id, ellipse_id, definition, comments)
#[pyfunction]
fn list_datums() -> Vec<(&'static str, &'static str, &'static str, &'static str)> {
    registry::datums()
        .iter()
        .map(|d| (d.id, d.ellipse_id, d.defn, d.comments))
        .collect()
}

#[pyfunction]
fn list_prime_meridians() -> Vec<(&'static str, &'static str)> {
    registry::prime_meridians()
        .iter()
        .map(|p| (p.id, p.defn))
        .collect()
}

/// (id, to_meter, name)
#[pyfunction]
fn list_units() -> Vec<(&'static str, &'static str, &'static str)> {
    registry::units()
        .iter()
        .map(|u| (u.id, u.to_meter, u.name))
        .collect()
}

/// Text for a numeric error code.
#[pyfunction]
fn error_message(code: i32) -> &'static str {
    crate::error::message(code)
}
