use crate::point::Point;

/// Shapes sized by a single radius about a center.
///
/// Each implementor stores exactly one of its measurements and derives the
/// rest, so `diameter() == 2.0 * radius()` holds whichever one was given.
pub trait Round {
    fn center(&self) -> &Point;
    fn radius(&self) -> f64;

    fn diameter(&self) -> f64 {
        2.0 * self.radius()
    }

    /// Lower-left corner of the axis-aligned box `center ± radius`.
    fn min(&self) -> Point {
        let r = self.radius();
        Point::new(self.center().coordinates().iter().map(|c| c - r))
    }

    /// Upper-right corner of the axis-aligned box `center ± radius`.
    fn max(&self) -> Point {
        let r = self.radius();
        Point::new(self.center().coordinates().iter().map(|c| c + r))
    }

    fn minmax(&self) -> (Point, Point) {
        (self.min(), self.max())
    }
}
