//! Coordinate values and the adapter trait the batch helpers accept.

use num_traits::{Float, NumCast};

/// A 2D or 3D coordinate. `z == None` marks a 2D point.
///
/// Units depend on where the point is in a pipeline: radians for
/// geographic systems, metres (or the system's unit) for projected ones.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    pub fn is_3d(&self) -> bool {
        self.z.is_some()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new_3d(x, y, z)
    }
}

/// Anything that exposes two, optionally three, numeric coordinates.
///
/// Implemented for [`Point`] and for plain tuples and arrays of any float
/// type, so foreign point types can be transformed in place.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> Option<f64> {
        None
    }
    fn set_xy(&mut self, x: f64, y: f64);
    /// Ignored by 2D coordinate types.
    fn set_z(&mut self, _z: f64) {}

    fn to_point(&self) -> Point {
        Point {
            x: self.x(),
            y: self.y(),
            z: self.z(),
        }
    }

    fn set_point(&mut self, p: Point) {
        self.set_xy(p.x, p.y);
        if let Some(z) = p.z {
            self.set_z(z);
        }
    }
}

impl Coordinate for Point {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> Option<f64> {
        self.z
    }
    fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
    fn set_z(&mut self, z: f64) {
        self.z = Some(z);
    }
}

fn to_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

fn from_f64<T: Float>(v: f64) -> T {
    <T as NumCast>::from(v).unwrap_or_else(T::nan)
}

impl<T: Float> Coordinate for (T, T) {
    fn x(&self) -> f64 {
        to_f64(self.0)
    }
    fn y(&self) -> f64 {
        to_f64(self.1)
    }
    fn set_xy(&mut self, x: f64, y: f64) {
        self.0 = from_f64(x);
        self.1 = from_f64(y);
    }
}

impl<T: Float> Coordinate for (T, T, T) {
    fn x(&self) -> f64 {
        to_f64(self.0)
    }
    fn y(&self) -> f64 {
        to_f64(self.1)
    }
    fn z(&self) -> Option<f64> {
        Some(to_f64(self.2))
    }
    fn set_xy(&mut self, x: f64, y: f64) {
        self.0 = from_f64(x);
        self.1 = from_f64(y);
    }
    fn set_z(&mut self, z: f64) {
        self.2 = from_f64(z);
    }
}

impl<T: Float> Coordinate for [T; 2] {
    fn x(&self) -> f64 {
        to_f64(self[0])
    }
    fn y(&self) -> f64 {
        to_f64(self[1])
    }
    fn set_xy(&mut self, x: f64, y: f64) {
        self[0] = from_f64(x);
        self[1] = from_f64(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_dimensions() {
        assert!(!Point::new(1.0, 2.0).is_3d());
        assert!(Point::new_3d(1.0, 2.0, 3.0).is_3d());
        assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_tuple_adapters() {
        let mut t = (1.5_f32, 2.5_f32);
        assert_eq!(t.x(), 1.5);
        assert_eq!(t.z(), None);
        t.set_point(Point::new_3d(3.0, 4.0, 5.0));
        assert_eq!(t, (3.0, 4.0));

        let mut t3 = (0.0_f64, 0.0, 7.0);
        assert_eq!(t3.to_point(), Point::new_3d(0.0, 0.0, 7.0));
        t3.set_point(Point::new_3d(1.0, 2.0, 3.0));
        assert_eq!(t3, (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_array_adapter() {
        let mut a = [0.0_f64; 2];
        a.set_xy(-1.0, 1.0);
        assert_eq!(a, [-1.0, 1.0]);
        assert_eq!(a.to_point(), Point::new(-1.0, 1.0));
    }

    #[test]
    fn test_point_keeps_z_when_unset() {
        let mut p = Point::new_3d(0.0, 0.0, 9.0);
        p.set_point(Point::new(1.0, 1.0));
        assert_eq!(p.z, Some(9.0));
    }
}
