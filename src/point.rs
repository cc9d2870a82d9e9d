use std::fmt;
use std::ops;
use serde::{Deserialize, Deserializer, Serialize};
use serde::de;

use crate::error::{GeometryError, Result};
use crate::plane::{Point2, Vector2};
use crate::space::{Point3, Vector3};

/// A point in N-dimensional space.
///
/// Points can be built from a list of coordinates, from another point, or
/// from any of the cgmath point and vector types. All forms end up as the
/// same ordered sequence of coordinates:
///
/// ```
/// # use regula::Point;
/// # use regula::plane::{p2, v2};
/// let a = Point::new(vec![3.0, 4.0]);
/// assert_eq!(a, Point::from(p2(3.0, 4.0)));
/// assert_eq!(a, Point::from(v2(3.0, 4.0)));
/// assert_eq!(a, Point::from(a.clone()));
/// assert_eq!(a, [3.0, 4.0]);
/// ```
///
/// Supports coordinate-wise addition and subtraction between points of the
/// same dimension:
///
/// ```
/// # use regula::Point;
/// let p = Point::from([1.0, 2.0]) + Point::from([3.0, 4.0]);
/// assert_eq!(p, [4.0, 6.0]);
/// assert!(Point::from([1.0, 2.0]).try_add(&Point::from([1.0, 2.0, 3.0])).is_err());
/// ```
#[derive(Clone, PartialEq, Serialize)]
#[serde(into = "Vec<f64>")]
pub struct Point {
    coordinates: Vec<f64>,
}

impl Point {
    /// Takes the coordinates as given. An empty list makes a 0-D point,
    /// which in-code callers may use as a placeholder; deserializing one is
    /// rejected.
    pub fn new<I>(coordinates: I) -> Point
    where I: IntoIterator<Item = f64> {
        Point { coordinates: coordinates.into_iter().collect() }
    }

    /// The origin of an `n`-dimensional space.
    pub fn zero(n: usize) -> Point {
        Point { coordinates: vec![0.0; n] }
    }

    /// Number of coordinates.
    pub fn size(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinate(&self, i: usize) -> Option<f64> {
        self.coordinates.get(i).cloned()
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    pub fn x(&self) -> Option<f64> { self.coordinate(0) }
    pub fn y(&self) -> Option<f64> { self.coordinate(1) }
    pub fn z(&self) -> Option<f64> { self.coordinate(2) }

    fn zip_with<F>(&self, other: &Point, f: F) -> Result<Point>
    where F: Fn(f64, f64) -> f64 {
        if self.size() != other.size() {
            return Err(GeometryError::DimensionMismatch {
                left: self.size(),
                right: other.size(),
            })
        }

        Ok(Point::new(
            self.coordinates.iter().zip(&other.coordinates).map(|(&a, &b)| f(a, b))
        ))
    }

    pub fn try_add(&self, other: &Point) -> Result<Point> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn try_sub(&self, other: &Point) -> Result<Point> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Adds a bare number, which only makes sense for a 1-D point.
    pub fn try_add_scalar(&self, value: f64) -> Result<Point> {
        if self.size() != 1 {
            return Err(GeometryError::InvalidOperand(format!(
                "cannot add a scalar to a {}-dimensional point", self.size()
            )))
        }
        Ok(Point::new(vec![self.coordinates[0] + value]))
    }

    pub fn try_sub_scalar(&self, value: f64) -> Result<Point> {
        self.try_add_scalar(-value)
    }

    /// Euclidean distance to another point of the same dimension.
    pub fn distance(&self, other: &Point) -> Result<f64> {
        let d = self.try_sub(other)?;
        Ok(d.coordinates.iter().map(|c| c * c).sum::<f64>().sqrt())
    }

    pub(crate) fn scale(&self, factor: f64) -> Point {
        Point::new(self.coordinates.iter().map(|c| c * factor))
    }
}

/// Reads a plain sequence of at least one number.
impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Point, D::Error>
    where D: Deserializer<'de> {
        let coordinates = Vec::<f64>::deserialize(deserializer)?;
        if coordinates.is_empty() {
            return Err(de::Error::invalid_length(0, &"at least one coordinate"))
        }
        Ok(Point { coordinates })
    }
}

impl ops::Index<usize> for Point {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.coordinates[i]
    }
}

fn unwrap_or_panic(result: Result<Point>) -> Point {
    match result {
        Ok(p) => p,
        Err(e) => panic!("{}", e),
    }
}

/// Panics on a dimension mismatch; use [`Point::try_add`] to check instead.
impl<'a> ops::Add<&'a Point> for &'a Point {
    type Output = Point;

    fn add(self, other: &Point) -> Point {
        unwrap_or_panic(self.try_add(other))
    }
}

impl ops::Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        &self + &other
    }
}

/// Panics on a dimension mismatch; use [`Point::try_sub`] to check instead.
impl<'a> ops::Sub<&'a Point> for &'a Point {
    type Output = Point;

    fn sub(self, other: &Point) -> Point {
        unwrap_or_panic(self.try_sub(other))
    }
}

impl ops::Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        &self - &other
    }
}

impl ops::Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.scale(-1.0)
    }
}

impl PartialEq<[f64]> for Point {
    fn eq(&self, other: &[f64]) -> bool {
        self.coordinates.as_slice() == other
    }
}

impl PartialEq<Vec<f64>> for Point {
    fn eq(&self, other: &Vec<f64>) -> bool {
        &self.coordinates == other
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Point {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.coordinates.as_slice() == &other[..]
    }
}

impl PartialEq<Point> for Vec<f64> {
    fn eq(&self, other: &Point) -> bool {
        other == self
    }
}

impl From<Vec<f64>> for Point {
    fn from(coordinates: Vec<f64>) -> Point {
        Point { coordinates }
    }
}

impl From<&[f64]> for Point {
    fn from(coordinates: &[f64]) -> Point {
        Point { coordinates: coordinates.to_vec() }
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coordinates: [f64; N]) -> Point {
        Point { coordinates: coordinates.to_vec() }
    }
}

impl From<Point> for Vec<f64> {
    fn from(p: Point) -> Vec<f64> {
        p.coordinates
    }
}

impl From<&Point> for Point {
    fn from(p: &Point) -> Point {
        p.clone()
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Point {
        Point::new(vec![p.x, p.y])
    }
}

impl From<Vector2> for Point {
    fn from(v: Vector2) -> Point {
        Point::new(vec![v.x, v.y])
    }
}

impl From<Point3> for Point {
    fn from(p: Point3) -> Point {
        Point::new(vec![p.x, p.y, p.z])
    }
}

impl From<Vector3> for Point {
    fn from(v: Vector3) -> Point {
        Point::new(vec![v.x, v.y, v.z])
    }
}

fn expect_size(p: &Point, n: usize) -> Result<()> {
    if p.size() == n {
        Ok(())
    } else {
        Err(GeometryError::DimensionMismatch { left: p.size(), right: n })
    }
}

impl std::convert::TryFrom<&Point> for Point2 {
    type Error = GeometryError;

    fn try_from(p: &Point) -> Result<Point2> {
        expect_size(p, 2)?;
        Ok(Point2::new(p[0], p[1]))
    }
}

impl std::convert::TryFrom<&Point> for Point3 {
    type Error = GeometryError;

    fn try_from(p: &Point) -> Result<Point3> {
        expect_size(p, 3)?;
        Ok(Point3::new(p[0], p[1], p[2]))
    }
}

/// Renders as `Point[c0, c1, ...]` in both `Debug` and `Display`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Point[")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;
    use crate::plane::{p2, v2};
    use crate::space::p3;
    use super::*;

    #[test]
    fn test_construction() {
        let p = Point::from([2.0, 1.0]);
        assert_eq!(p.size(), 2);
        assert_eq!(p.x(), Some(2.0));
        assert_eq!(p.y(), Some(1.0));
        assert_eq!(p.z(), None);

        assert_eq!(Point::from(p.clone()), p);
        assert_eq!(Point::from(&p), p);
        assert_eq!(Point::from(v2(2.0, 1.0)), p);
        assert_eq!(Point::from(p2(2.0, 1.0)), p);
        assert_eq!(Point::new(vec![2.0, 1.0]), p);
    }

    #[test]
    fn test_element_access() {
        let p = Point::from(p3(5.0, 6.0, 7.0));
        assert_eq!(p.size(), 3);
        assert_eq!(p[0], 5.0);
        assert_eq!(p.coordinate(1), Some(6.0));
        assert_eq!(p.z(), Some(7.0));
        assert_eq!(p.coordinate(3), None);
    }

    #[test]
    fn test_equality() {
        let p = Point::from([1.0, 2.0]);
        assert_eq!(p, Point::from([1.0, 2.0]));
        assert_ne!(p, Point::from([3.0, 4.0]));
        assert_eq!(p, [1.0, 2.0]);
        assert_eq!(p, vec![1.0, 2.0]);
        assert_eq!(vec![1.0, 2.0], p);
        assert!(p != [1.0, 3.0]);
        assert!(p != [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rendering() {
        assert_eq!(Point::from([8.0, 9.0]).to_string(), "Point[8, 9]");
        assert_eq!(format!("{:?}", Point::from([10.0, 11.5])), "Point[10, 11.5]");
    }

    #[test]
    fn test_arithmetic() {
        let left = Point::from([1.0, 2.0]);
        let right = Point::from([3.0, 4.0]);

        let sum: Point = &left + &right;
        assert_eq!(sum, [4.0, 6.0]);
        assert_eq!(&left - &right, [-2.0, -2.0]);
        assert_eq!((left.clone() + right.clone()) - right.clone(), left);
        assert_eq!(-left.clone(), [-1.0, -2.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Point::from([1.0, 2.0]);
        let b = Point::from([1.0, 2.0, 3.0]);
        assert_eq!(
            a.try_add(&b),
            Err(GeometryError::DimensionMismatch { left: 2, right: 3 })
        );
        assert!(a.try_sub(&b).is_err());
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_operator_mismatch_panics() {
        let _ = Point::from([1.0, 2.0]) + Point::from([1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_scalar_operand() {
        assert_eq!(Point::from([1.0]).try_add_scalar(2.0), Ok(Point::from([3.0])));
        assert_eq!(Point::from([1.0]).try_sub_scalar(2.0), Ok(Point::from([-1.0])));
        match Point::from([1.0, 2.0]).try_add_scalar(2.0) {
            Err(GeometryError::InvalidOperand(_)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_distance() {
        let d = Point::from([0.0, 0.0]).distance(&Point::from([3.0, 4.0]));
        assert_eq!(d, Ok(5.0));
    }

    #[test]
    fn test_cgmath_conversion() {
        let p = Point::from([1.0, 2.0]);
        assert_eq!(Point2::try_from(&p), Ok(p2(1.0, 2.0)));
        assert!(Point3::try_from(&p).is_err());
    }

    #[test]
    fn test_serde() {
        let p: Point = serde_json::from_str("[1.0, 2.5, 3]").unwrap();
        assert_eq!(p, [1.0, 2.5, 3.0]);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[1.0,2.5,3.0]");
    }

    #[test]
    fn test_serde_rejects_empty() {
        assert!(serde_json::from_str::<Point>("[]").is_err());
        assert!(serde_json::from_str::<Point>("[4]").is_ok());
    }
}
