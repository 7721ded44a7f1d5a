//! `proj4.Projection`: a resolved projection exposed to Python.

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::errors::to_py_err;
use crate::point::Point;
use crate::projection::Projection;

#[pyclass(name = "Projection", module = "proj4", frozen)]
pub struct PyProjection {
    pub(crate) inner: Projection,
}

/// Accepts `"+proj=utm +zone=33"`, `["proj=utm", "zone=33"]` or
/// `{"proj": "utm", "zone": 33, "south": None}`.
fn from_python(definition: &Bound<'_, PyAny>) -> PyResult<Projection> {
    if let Ok(s) = definition.extract::<String>() {
        return s.parse().map_err(to_py_err);
    }
    if let Ok(dict) = definition.downcast::<PyDict>() {
        let mut pairs = Vec::with_capacity(dict.len());
        for (key, value) in dict.iter() {
            let key = key.str()?.to_string();
            let value = if value.is_none() {
                None
            } else {
                Some(value.str()?.to_string())
            };
            pairs.push((key, value));
        }
        return Projection::from_pairs(pairs).map_err(to_py_err);
    }
    if let Ok(tokens) = definition.extract::<Vec<String>>() {
        return Projection::from_tokens(tokens).map_err(to_py_err);
    }
    Err(PyTypeError::new_err(
        "definition must be a str, a list of str or a dict",
    ))
}

#[pymethods]
impl PyProjection {
    #[new]
    fn new(definition: &Bound<'_, PyAny>) -> PyResult<Self> {
        Ok(Self {
            inner: from_python(definition)?,
        })
    }

    /// Project (lon, lat) in radians.
    fn forward(&self, lon: f64, lat: f64) -> PyResult<(f64, f64)> {
        self.inner.forward(lon, lat).map_err(to_py_err)
    }

    /// Unproject (x, y) to (lon, lat) in radians.
    fn inverse(&self, x: f64, y: f64) -> PyResult<(f64, f64)> {
        self.inner.inverse(x, y).map_err(to_py_err)
    }

    fn forward_deg(&self, lon: f64, lat: f64) -> PyResult<(f64, f64)> {
        self.inner.forward_deg(lon, lat).map_err(to_py_err)
    }

    fn inverse_deg(&self, x: f64, y: f64) -> PyResult<(f64, f64)> {
        self.inner.inverse_deg(x, y).map_err(to_py_err)
    }

    /// Transform one point into `dst`; `z` is returned only when given.
    #[pyo3(signature = (dst, x, y, z=None))]
    fn transform(
        &self,
        dst: PyRef<'_, PyProjection>,
        x: f64,
        y: f64,
        z: Option<f64>,
    ) -> PyResult<(f64, f64, Option<f64>)> {
        let p = self
            .inner
            .transform(&dst.inner, Point { x, y, z })
            .map_err(to_py_err)?;
        Ok((p.x, p.y, p.z))
    }

    #[getter]
    fn family_id(&self) -> &'static str {
        self.inner.family_id()
    }

    #[getter]
    fn definition(&self) -> &str {
        self.inner.definition()
    }

    #[getter]
    fn datum_id(&self) -> Option<&'static str> {
        self.inner.datum_id()
    }

    #[getter]
    fn has_inverse(&self) -> bool {
        self.inner.has_inverse()
    }

    #[getter]
    fn is_latlong(&self) -> bool {
        self.inner.is_latlong()
    }

    #[getter]
    fn is_geocentric(&self) -> bool {
        self.inner.is_geocentric()
    }

    /// (a, b) of the ellipsoid in metres.
    #[getter]
    fn ellipsoid(&self) -> (f64, f64) {
        let e = self.inner.ellipsoid();
        (e.a, e.b)
    }

    fn __str__(&self) -> &str {
        self.inner.definition()
    }

    fn __repr__(&self) -> String {
        format!("Projection('{}')", self.inner.definition())
    }
}
