//! Shapes in the plane, plus cgmath aliases for 2-D points and vectors that
//! convert into [`Point`](crate::Point).
use cgmath;
pub mod circle;
pub mod line;
pub mod rectangle;
pub mod regular_polygon;

pub type Point2 = cgmath::Point2<f64>;
pub type Vector2 = cgmath::Vector2<f64>;

pub fn p2<T>(x: T, y: T) -> cgmath::Point2<T> {
    cgmath::Point2::new(x, y)
}
pub use cgmath::vec2 as v2;
