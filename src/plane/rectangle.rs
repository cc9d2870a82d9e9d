use std::fmt;

use crate::error::{GeometryError, Result};
use crate::point::Point;
use crate::util::segment::{ring_edges, Edge};

/// An axis-aligned rectangle in the plane, stored as its lower-left and
/// upper-right corners.
///
/// ```
/// # use regula::Rectangle;
/// let r = Rectangle::from_corners([1.0, 2.0], [3.0, 4.0]).unwrap();
/// assert_eq!(r.center(), [2.0, 3.0]);
/// assert_eq!(r.width(), 2.0);
/// assert_eq!(r.edges().len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    min: Point,
    max: Point
}

fn planar(p: Point) -> Result<Point> {
    if p.size() == 2 {
        Ok(p)
    } else {
        Err(GeometryError::DimensionMismatch { left: p.size(), right: 2 })
    }
}

impl Rectangle {
    /// Any two opposite corners, in any order.
    pub fn from_corners<A, B>(a: A, b: B) -> Result<Rectangle>
    where A: Into<Point>, B: Into<Point> {
        let a = planar(a.into())?;
        let b = planar(b.into())?;
        Ok(Rectangle::from_sides(a[0], a[1], b[0], b[1]))
    }

    /// A `width` by `height` rectangle centered on the origin.
    pub fn from_size(width: f64, height: f64) -> Rectangle {
        let (w, h) = (width / 2.0, height / 2.0);
        Rectangle::from_sides(-w, -h, w, h)
    }

    /// A rectangle whose lower-left corner is `origin`.
    pub fn from_origin_size<P>(origin: P, width: f64, height: f64) -> Result<Rectangle>
    where P: Into<Point> {
        let o = planar(origin.into())?;
        Ok(Rectangle::from_sides(o[0], o[1], o[0] + width, o[1] + height))
    }

    pub fn from_sides(left: f64, bottom: f64, right: f64, top: f64) -> Rectangle {
        Rectangle {
            min: Point::new(vec![left.min(right), bottom.min(top)]),
            max: Point::new(vec![left.max(right), bottom.max(top)]),
        }
    }

    pub fn origin(&self) -> Point { self.min.clone() }
    pub fn min(&self) -> Point { self.min.clone() }
    pub fn max(&self) -> Point { self.max.clone() }

    pub fn minmax(&self) -> (Point, Point) {
        (self.min(), self.max())
    }

    pub fn width(&self) -> f64 { self.max[0] - self.min[0] }
    pub fn height(&self) -> f64 { self.max[1] - self.min[1] }

    pub fn center(&self) -> Point {
        (&self.min + &self.max).scale(0.5)
    }

    /// The four corners, counter-clockwise from the origin.
    pub fn points(&self) -> Vec<Point> {
        let (l, b) = (self.min[0], self.min[1]);
        let (r, t) = (self.max[0], self.max[1]);
        vec![
            Point::from([l, b]),
            Point::from([r, b]),
            Point::from([r, t]),
            Point::from([l, t]),
        ]
    }

    pub fn edges(&self) -> Vec<Edge> {
        ring_edges(&self.points())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rectangle({}, {})", self.min, self.max)
    }
}
