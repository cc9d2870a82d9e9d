//! cgmath aliases for 3-D points and vectors. Both convert into
//! [`Point`](crate::Point), and a 3-D `Point` converts back:
//!
//! ```
//! # use std::convert::TryFrom;
//! # use regula::Point;
//! # use regula::space::{p3, v3, Point3};
//! let p = Point::from(p3(1.0, 2.0, 3.0));
//! assert_eq!(p.z(), Some(3.0));
//! assert_eq!(p, Point::from(v3(1.0, 2.0, 3.0)));
//! assert_eq!(Point3::try_from(&p).unwrap(), p3(1.0, 2.0, 3.0));
//! ```
use cgmath;

pub type Point3 = cgmath::Point3<f64>;
pub type Vector3 = cgmath::Vector3<f64>;

pub fn p3<T>(x: T, y: T, z: T) -> cgmath::Point3<T> {
    cgmath::Point3::new(x, y, z)
}
pub use cgmath::vec3 as v3;
