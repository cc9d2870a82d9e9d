use std::fmt;
use std::iter;

use crate::error::Result;
use crate::point::Point;

/// A finite piece of a line between two endpoints.
pub trait Segment {
    type Point;

    fn from_endpoints(start: Self::Point, end: Self::Point) -> Self;
    fn start(&self) -> Self::Point;
    fn end(&self) -> Self::Point;
}

/// One side of a polygon, running from `first` to `last`.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub first: Point,
    pub last: Point
}

impl Edge {
    pub fn new<A, B>(first: A, last: B) -> Edge
    where A: Into<Point>, B: Into<Point> {
        Edge { first: first.into(), last: last.into() }
    }

    pub fn points(&self) -> impl Iterator<Item=Point> {
        iter::once(self.first.clone()).chain(iter::once(self.last.clone()))
    }

    pub fn vector(&self) -> Result<Point> {
        self.last.try_sub(&self.first)
    }

    pub fn length(&self) -> Result<f64> {
        self.first.distance(&self.last)
    }
}

impl Segment for Edge {
    type Point = Point;

    fn from_endpoints(first: Point, last: Point) -> Self {
        Edge { first, last }
    }

    fn start(&self) -> Point { self.first.clone() }
    fn end(&self) -> Point { self.last.clone() }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Edge({}, {})", self.first, self.last)
    }
}

/// Connects consecutive points, closing the loop from the last point back to
/// the first.
pub fn ring_edges<S>(points: &[S::Point]) -> Vec<S>
where S: Segment, S::Point: Clone {
    let n = points.len();
    (0..n).map(|i| {
        S::from_endpoints(points[i].clone(), points[(i + 1) % n].clone())
    }).collect()
}
