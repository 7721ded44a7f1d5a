//! PyO3 binding for batch coordinate transformation.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use super::errors::to_py_err;
use super::projection::PyProjection;
use crate::point::Point;

type Columns<'py> = (
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
    Option<Bound<'py, PyArray1<f64>>>,
);

/// Transform arrays of coordinates from `src` into `dst`.
///
/// Args:
///     src: Source projection.
///     dst: Destination projection.
///     x: 1D array of x coordinates (longitude in radians or easting).
///     y: 1D array of y coordinates (latitude in radians or northing).
///     z: Optional 1D array of heights.
///
/// Returns:
///     Tuple of (x_out, y_out, z_out); z_out is None when z was not given
///     and dst is not geocentric.
#[pyfunction]
#[pyo3(signature = (src, dst, x, y, z=None))]
pub fn transform_points<'py>(
    py: Python<'py>,
    src: PyRef<'py, PyProjection>,
    dst: PyRef<'py, PyProjection>,
    x: PyReadonlyArray1<'py, f64>,
    y: PyReadonlyArray1<'py, f64>,
    z: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<Columns<'py>> {
    let x_view = x.as_array();
    let y_view = y.as_array();

    let n = x_view.len();
    if n != y_view.len() {
        return Err(PyValueError::new_err(format!(
            "x and y must have same length, got {} and {}",
            n,
            y_view.len()
        )));
    }

    let mut points: Vec<Point> = x_view
        .iter()
        .zip(y_view.iter())
        .map(|(&xi, &yi)| Point::new(xi, yi))
        .collect();

    let has_z = match &z {
        Some(z) => {
            let z_view = z.as_array();
            if z_view.len() != n {
                return Err(PyValueError::new_err(format!(
                    "z must have the same length as x, got {} and {}",
                    z_view.len(),
                    n
                )));
            }
            for (p, &zi) in points.iter_mut().zip(z_view.iter()) {
                p.z = Some(zi);
            }
            true
        }
        None => false,
    };

    let (src, dst) = (&src.inner, &dst.inner);
    let has_z = has_z || dst.is_geocentric();
    let points = py.allow_threads(move || -> PyResult<Vec<Point>> {
        src.transform_all(dst, &mut points).map_err(to_py_err)?;
        Ok(points)
    })?;

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let zs = has_z.then(|| {
        let zs: Vec<f64> = points.iter().map(|p| p.z.unwrap_or(0.0)).collect();
        PyArray1::from_owned_array(py, ndarray::Array1::from(zs))
    });

    Ok((
        PyArray1::from_owned_array(py, ndarray::Array1::from(xs)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(ys)),
        zs,
    ))
}
