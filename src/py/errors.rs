//! Python exception classes, one per [`ErrorKind`], all deriving from
//! `ProjException`.

use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;

use crate::error::{ErrorKind, ProjError};

create_exception!(proj4, ProjException, PyException);
create_exception!(proj4, MalformedSpecification, ProjException);
create_exception!(proj4, UnknownProjectionFamily, ProjException);
create_exception!(proj4, UnknownEllipsoid, ProjException);
create_exception!(proj4, UnknownDatum, ProjException);
create_exception!(proj4, UnknownUnit, ProjException);
create_exception!(proj4, InvalidParameterValue, ProjException);
create_exception!(proj4, InvalidParameterCombination, ProjException);
create_exception!(proj4, NumericallyInvalid, ProjException);
create_exception!(proj4, InverseUnsupported, ProjException);
create_exception!(proj4, ConvergenceFailure, ProjException);

pub fn to_py_err(err: ProjError) -> PyErr {
    let msg = err.to_string();
    match err.kind() {
        ErrorKind::MalformedSpecification => MalformedSpecification::new_err(msg),
        ErrorKind::UnknownProjectionFamily => UnknownProjectionFamily::new_err(msg),
        ErrorKind::UnknownEllipsoid => UnknownEllipsoid::new_err(msg),
        ErrorKind::UnknownDatum => UnknownDatum::new_err(msg),
        ErrorKind::UnknownUnit => UnknownUnit::new_err(msg),
        ErrorKind::InvalidParameterValue => InvalidParameterValue::new_err(msg),
        ErrorKind::InvalidParameterCombination => InvalidParameterCombination::new_err(msg),
        ErrorKind::NumericallyInvalid => NumericallyInvalid::new_err(msg),
        ErrorKind::InverseUnsupported => InverseUnsupported::new_err(msg),
        ErrorKind::ConvergenceFailure => ConvergenceFailure::new_err(msg),
    }
}

/// Add the base class and every kind's class to the module.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add("ProjException", py.get_type::<ProjException>())?;
    for &kind in ErrorKind::all() {
        let class = match kind {
            ErrorKind::MalformedSpecification => py.get_type::<MalformedSpecification>(),
            ErrorKind::UnknownProjectionFamily => py.get_type::<UnknownProjectionFamily>(),
            ErrorKind::UnknownEllipsoid => py.get_type::<UnknownEllipsoid>(),
            ErrorKind::UnknownDatum => py.get_type::<UnknownDatum>(),
            ErrorKind::UnknownUnit => py.get_type::<UnknownUnit>(),
            ErrorKind::InvalidParameterValue => py.get_type::<InvalidParameterValue>(),
            ErrorKind::InvalidParameterCombination => {
                py.get_type::<InvalidParameterCombination>()
            }
            ErrorKind::NumericallyInvalid => py.get_type::<NumericallyInvalid>(),
            ErrorKind::InverseUnsupported => py.get_type::<InverseUnsupported>(),
            ErrorKind::ConvergenceFailure => py.get_type::<ConvergenceFailure>(),
        };
        m.add(kind.name(), class)?;
    }
    Ok(())
}
