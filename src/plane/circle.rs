//! Circles, sized either by radius or by diameter.
use std::fmt;
use serde::Deserialize;

use crate::error::{GeometryError, Result};
use crate::point::Point;
use crate::plane::rectangle::Rectangle;
use crate::util::round::Round;

/// Named options for [`Circle::from_options`].
///
/// Can be filled in with the builder methods or loaded from a configuration
/// mapping with the keys `center`, `radius` and `diameter`:
///
/// ```
/// # use regula::plane::circle::{Circle, CircleOptions};
/// let options = CircleOptions::new().center([1.0, 2.0]).diameter(6.0);
/// let circle = Circle::from_options(options).unwrap();
/// assert_eq!(circle.radius(), 3.0);
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CircleOptions {
    pub center: Option<Point>,
    pub radius: Option<f64>,
    pub diameter: Option<f64>,
}

impl CircleOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn center<P: Into<Point>>(mut self, center: P) -> Self {
        self.center = Some(center.into());
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn diameter(mut self, diameter: f64) -> Self {
        self.diameter = Some(diameter);
        self
    }
}

/// A circle that keeps whichever of radius or diameter it was built with and
/// derives the other.
///
/// ```
/// # use regula::Circle;
/// let c = Circle::new([1.0, 2.0], 3.0);
/// assert_eq!(c.diameter(), 6.0);
///
/// let c = Circle::with_diameter([1.0, 2.0], 6.0);
/// assert_eq!(c.radius(), 3.0);
/// ```
#[derive(Clone, Debug)]
pub enum Circle {
    Radius { center: Point, radius: f64 },
    Diameter { center: Point, diameter: f64 },
}

impl Circle {
    pub fn new<P: Into<Point>>(center: P, radius: f64) -> Circle {
        Circle::Radius { center: center.into(), radius }
    }

    pub fn with_diameter<P: Into<Point>>(center: P, diameter: f64) -> Circle {
        Circle::Diameter { center: center.into(), diameter }
    }

    /// Picks the variant from whichever size option is present.
    ///
    /// A center is required, as is exactly one of `radius` or `diameter`.
    pub fn from_options(options: CircleOptions) -> Result<Circle> {
        let center = options.center.ok_or(GeometryError::MissingParameter {
            shape: "Circle",
            parameter: "a center",
        })?;

        match (options.radius, options.diameter) {
            (Some(radius), None) => {
                tracing::debug!(%center, radius, "circle from radius");
                Ok(Circle::Radius { center, radius })
            },
            (None, Some(diameter)) => {
                tracing::debug!(%center, diameter, "circle from diameter");
                Ok(Circle::Diameter { center, diameter })
            },
            (Some(_), Some(_)) => Err(GeometryError::ConflictingParameters {
                shape: "Circle",
                parameters: vec!["radius", "diameter"],
            }),
            (None, None) => Err(GeometryError::MissingParameter {
                shape: "Circle",
                parameter: "a radius or a diameter",
            }),
        }
    }

    pub fn center(&self) -> &Point {
        Round::center(self)
    }

    pub fn radius(&self) -> f64 {
        Round::radius(self)
    }

    pub fn diameter(&self) -> f64 {
        Round::diameter(self)
    }

    /// The smallest axis-aligned [`Rectangle`] around a 2-D circle.
    pub fn bounds(&self) -> Result<Rectangle> {
        Rectangle::from_corners(self.min(), self.max())
    }
}

impl Round for Circle {
    fn center(&self) -> &Point {
        match self {
            Circle::Radius { center, .. } => center,
            Circle::Diameter { center, .. } => center,
        }
    }

    fn radius(&self) -> f64 {
        match *self {
            Circle::Radius { radius, .. } => radius,
            Circle::Diameter { diameter, .. } => diameter / 2.0,
        }
    }

    fn diameter(&self) -> f64 {
        match *self {
            Circle::Radius { radius, .. } => 2.0 * radius,
            Circle::Diameter { diameter, .. } => diameter,
        }
    }
}

/// Circles compare by center and radius, regardless of which measurement
/// they were built with.
impl PartialEq for Circle {
    fn eq(&self, other: &Circle) -> bool {
        self.center() == other.center() && self.radius() == other.radius()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Circle({}, {})", self.center(), self.radius())
    }
}
