pub mod dms;
pub mod error;
mod factory;
pub mod params;
pub mod point;
pub mod proj;
pub mod projection;
pub mod registry;
#[cfg(feature = "python")]
mod py;

pub use error::{ErrorKind, ProjError};
pub use params::ProjectionParameters;
pub use point::{Coordinate, Point};
pub use projection::Projection;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pyo3::pymodule]
fn proj4(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    py::register(m)
}
