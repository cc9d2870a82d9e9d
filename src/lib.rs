//! A library of geometric values: points, lines, circles and regular
//! polygons, each of which can be built from several equivalent sets of
//! measurements:
//!
//! ```
//! use regula::{Circle, Line, Point, RegularPolygon};
//! use regula::plane::circle::CircleOptions;
//! use regula::plane::line::Slope;
//! use regula::plane::regular_polygon::RegularPolygonOptions;
//!
//! let c = Circle::from_options(CircleOptions::new().center([1.0, 2.0]).diameter(6.0)).unwrap();
//! assert_eq!(c.radius(), 3.0);
//!
//! let l = Line::new(Point::from([0.0, 0.0]), Point::from([10.0, 10.0])).unwrap();
//! assert_eq!(l.slope(), Some(1.0));
//!
//! let p = RegularPolygon::new(RegularPolygonOptions::new(6).inradius(2.0)).unwrap();
//! assert_eq!(p.edges().len(), 6);
//! ```
//!
//! Every shape stores only the measurement it was given and derives the rest
//! on access. Shapes are immutable once built.
extern crate cgmath;
pub mod error;
pub mod plane;
pub mod point;
pub mod space;
pub mod util;

pub use error::{GeometryError, Result};
pub use plane::circle::Circle;
pub use plane::line::Line;
pub use plane::rectangle::Rectangle;
pub use plane::regular_polygon::RegularPolygon;
pub use point::Point;
