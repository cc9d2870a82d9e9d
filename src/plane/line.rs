//! Infinite lines in one of three forms: through two points, through a
//! point with a slope, or by slope and y-intercept.
//!
//! [`Line::new`] picks the form from the shape of its two arguments. Each
//! argument is a coordinate (an array, `Vec`, [`Point`] or cgmath point or
//! vector) or a number:
//!
//! ```
//! # use regula::Line;
//! # use regula::plane::p2;
//! let l = Line::new([0.0, 0.0], [10.0, 10.0]).unwrap();
//! assert!(matches!(l, Line::TwoPoint(_)));
//!
//! let l = Line::new(p2(0.0, 0.0), 0.75).unwrap();
//! assert!(matches!(l, Line::PointSlope(_)));
//!
//! let l = Line::new(0.75, 5.0).unwrap();
//! assert!(matches!(l, Line::SlopeIntercept(_)));
//! ```
use std::fmt;

use crate::error::{GeometryError, Result};
use crate::point::Point;
use crate::plane::{Point2, Vector2};
use crate::space::{Point3, Vector3};

/// A single argument to [`Line::new`].
#[derive(Clone, Debug, PartialEq)]
pub enum LineArg {
    Coordinate(Point),
    Number(f64)
}

impl From<f64> for LineArg {
    fn from(v: f64) -> Self {
        LineArg::Number(v)
    }
}

impl From<Point> for LineArg {
    fn from(p: Point) -> Self {
        LineArg::Coordinate(p)
    }
}

impl<const N: usize> From<[f64; N]> for LineArg {
    fn from(coordinates: [f64; N]) -> Self {
        LineArg::Coordinate(coordinates.into())
    }
}

impl From<Vec<f64>> for LineArg {
    fn from(coordinates: Vec<f64>) -> Self {
        LineArg::Coordinate(coordinates.into())
    }
}

impl From<Point2> for LineArg {
    fn from(p: Point2) -> Self {
        LineArg::Coordinate(p.into())
    }
}

impl From<Vector2> for LineArg {
    fn from(v: Vector2) -> Self {
        LineArg::Coordinate(v.into())
    }
}

impl From<Point3> for LineArg {
    fn from(p: Point3) -> Self {
        LineArg::Coordinate(p.into())
    }
}

impl From<Vector3> for LineArg {
    fn from(v: Vector3) -> Self {
        LineArg::Coordinate(v.into())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    X,
    Y
}

/// Slope-derived properties shared by every line form.
pub trait Slope {
    /// `None` when the slope is not defined for the line's dimension.
    fn slope(&self) -> Option<f64>;

    fn is_horizontal(&self) -> bool {
        self.slope() == Some(0.0)
    }

    fn is_vertical(&self) -> bool {
        self.slope().map_or(false, f64::is_infinite)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TwoPointLine {
    pub first: Point,
    pub last: Point
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointSlopeLine {
    pub point: Point,
    pub slope: f64
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlopeInterceptLine {
    slope: f64,
    intercept: f64
}

impl TwoPointLine {
    pub fn new<A, B>(first: A, last: B) -> Result<TwoPointLine>
    where A: Into<Point>, B: Into<Point> {
        let first = first.into();
        let last = last.into();
        if first.size() != last.size() {
            return Err(GeometryError::DimensionMismatch {
                left: first.size(),
                right: last.size(),
            })
        }
        if first == last {
            return Err(GeometryError::InvalidOperand(format!(
                "a line needs two distinct points, got {} twice", first
            )))
        }
        Ok(TwoPointLine { first, last })
    }
}

impl Slope for TwoPointLine {
    /// Only defined in the plane; vertical lines report `+inf`.
    fn slope(&self) -> Option<f64> {
        if self.first.size() != 2 {
            return None
        }
        let dx = self.last[0] - self.first[0];
        let dy = self.last[1] - self.first[1];
        if dx == 0.0 {
            Some(f64::INFINITY)
        } else {
            Some(dy / dx)
        }
    }
}

impl PointSlopeLine {
    pub fn new<P: Into<Point>>(point: P, slope: f64) -> PointSlopeLine {
        PointSlopeLine { point: point.into(), slope }
    }
}

impl Slope for PointSlopeLine {
    fn slope(&self) -> Option<f64> {
        Some(self.slope)
    }
}

impl SlopeInterceptLine {
    /// Either infinite slope is stored as `+inf`, so both build the same
    /// vertical line with `intercept` on the x axis.
    pub fn new(slope: f64, intercept: f64) -> SlopeInterceptLine {
        let slope = if slope.is_infinite() { f64::INFINITY } else { slope };
        SlopeInterceptLine { slope, intercept }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Where the line crosses the given axis.
    ///
    /// A vertical line stores its x-intercept, so it has no y-intercept; a
    /// horizontal line never crosses the x axis.
    pub fn intercept(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => {
                if self.is_vertical() {
                    Some(self.intercept)
                } else if self.is_horizontal() {
                    None
                } else {
                    Some(-self.intercept / self.slope)
                }
            },
            Axis::Y => {
                if self.is_vertical() { None } else { Some(self.intercept) }
            }
        }
    }
}

impl Slope for SlopeInterceptLine {
    fn slope(&self) -> Option<f64> {
        Some(self.slope)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Line {
    TwoPoint(TwoPointLine),
    PointSlope(PointSlopeLine),
    SlopeIntercept(SlopeInterceptLine)
}

impl Line {
    /// Builds the line form that matches the argument shapes:
    ///
    /// - two coordinates: a [`TwoPointLine`]
    /// - a coordinate and a number: a [`PointSlopeLine`]
    /// - two numbers: a [`SlopeInterceptLine`] (slope first)
    ///
    /// A number followed by a coordinate matches none of these.
    pub fn new<A, B>(a: A, b: B) -> Result<Line>
    where A: Into<LineArg>, B: Into<LineArg> {
        match (a.into(), b.into()) {
            (LineArg::Coordinate(first), LineArg::Coordinate(last)) => {
                tracing::debug!(%first, %last, "two-point line");
                Ok(Line::TwoPoint(TwoPointLine::new(first, last)?))
            },
            (LineArg::Coordinate(point), LineArg::Number(slope)) => {
                tracing::debug!(%point, slope, "point-slope line");
                Ok(Line::PointSlope(PointSlopeLine::new(point, slope)))
            },
            (LineArg::Number(slope), LineArg::Number(intercept)) => {
                tracing::debug!(slope, intercept, "slope-intercept line");
                Ok(Line::SlopeIntercept(SlopeInterceptLine::new(slope, intercept)))
            },
            (LineArg::Number(_), LineArg::Coordinate(point)) => Err(GeometryError::InvalidOperand(
                format!("expected a y-intercept, got {}", point)
            )),
        }
    }

    /// Like [`Line::new`], for a caller holding an argument list of unknown
    /// length.
    pub fn from_args(args: &[LineArg]) -> Result<Line> {
        match args {
            [a, b] => Line::new(a.clone(), b.clone()),
            _ => Err(GeometryError::WrongArity {
                shape: "Line",
                expected: 2,
                found: args.len(),
            })
        }
    }

    pub fn two_point<A, B>(first: A, last: B) -> Result<Line>
    where A: Into<Point>, B: Into<Point> {
        Ok(Line::TwoPoint(TwoPointLine::new(first, last)?))
    }

    pub fn point_slope<P: Into<Point>>(point: P, slope: f64) -> Line {
        Line::PointSlope(PointSlopeLine::new(point, slope))
    }

    pub fn slope_intercept(slope: f64, intercept: f64) -> Line {
        Line::SlopeIntercept(SlopeInterceptLine::new(slope, intercept))
    }

    pub fn horizontal(y_intercept: f64) -> Line {
        Line::slope_intercept(0.0, y_intercept)
    }

    /// A vertical line has an infinite slope, so it keeps its x-intercept in
    /// place of the y-intercept.
    pub fn vertical(x_intercept: f64) -> Line {
        Line::slope_intercept(f64::INFINITY, x_intercept)
    }

    /// Axis intercept, for slope-intercept lines only.
    pub fn intercept(&self, axis: Axis) -> Option<f64> {
        match self {
            Line::SlopeIntercept(l) => l.intercept(axis),
            _ => None
        }
    }

    fn form(&self) -> &dyn Slope {
        match self {
            Line::TwoPoint(l) => l,
            Line::PointSlope(l) => l,
            Line::SlopeIntercept(l) => l,
        }
    }
}

impl Slope for Line {
    fn slope(&self) -> Option<f64> {
        self.form().slope()
    }

    fn is_horizontal(&self) -> bool {
        self.form().is_horizontal()
    }

    fn is_vertical(&self) -> bool {
        self.form().is_vertical()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Line::TwoPoint(l) => write!(f, "Line({}, {})", l.first, l.last),
            Line::PointSlope(l) => write!(f, "Line({},{})", l.slope, l.point),
            Line::SlopeIntercept(l) => write!(f, "Line({},{})", l.slope, l.intercept),
        }
    }
}
