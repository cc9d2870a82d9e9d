//! Regular polygons, sized by any one of circumradius, inradius,
//! circumdiameter or indiameter.
//!
//! Whichever measurement a polygon is built with is the only one it stores;
//! the other three follow from `inradius = circumradius * cos(π/n)` and
//! `diameter = 2 * radius`.
//!
//! ```
//! # use regula::RegularPolygon;
//! # use regula::plane::regular_polygon::RegularPolygonOptions;
//! let square = RegularPolygon::new(
//!     RegularPolygonOptions::new(4).center([1.0, 2.0]).radius(3.0)
//! ).unwrap();
//! assert_eq!(square.vertices().len(), 4);
//! assert_eq!(square.diameter(), 6.0);
//! ```
use std::f64::consts::PI;
use std::fmt;
use approx::relative_eq;
use serde::Deserialize;

use crate::error::{GeometryError, Result};
use crate::point::Point;
use crate::plane::rectangle::Rectangle;
use crate::util::round::Round;
use crate::util::segment::{ring_edges, Edge};

/// Named options for [`RegularPolygon::new`].
///
/// Recognized keys are `sides` (required), `center` (defaults to the
/// origin) and exactly one of `radius`, `inradius`, `diameter` or
/// `indiameter`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RegularPolygonOptions {
    pub sides: Option<usize>,
    pub center: Option<Point>,
    pub radius: Option<f64>,
    pub inradius: Option<f64>,
    pub diameter: Option<f64>,
    pub indiameter: Option<f64>,
}

impl RegularPolygonOptions {
    pub fn new(sides: usize) -> Self {
        RegularPolygonOptions { sides: Some(sides), ..Default::default() }
    }

    pub fn center<P: Into<Point>>(mut self, center: P) -> Self {
        self.center = Some(center.into());
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn inradius(mut self, inradius: f64) -> Self {
        self.inradius = Some(inradius);
        self
    }

    pub fn diameter(mut self, diameter: f64) -> Self {
        self.diameter = Some(diameter);
        self
    }

    pub fn indiameter(mut self, indiameter: f64) -> Self {
        self.indiameter = Some(indiameter);
        self
    }

    fn measure(&self) -> Result<Measure> {
        let given: Vec<(&'static str, Measure)> = vec![
            ("radius", self.radius.map(Measure::Radius)),
            ("inradius", self.inradius.map(Measure::Inradius)),
            ("indiameter", self.indiameter.map(Measure::Indiameter)),
            ("diameter", self.diameter.map(Measure::Diameter)),
        ].into_iter().filter_map(|(name, m)| m.map(|m| (name, m))).collect();

        match given.as_slice() {
            [(_, m)] => Ok(*m),
            [] => Err(GeometryError::MissingParameter {
                shape: "RegularPolygon",
                parameter: "a radius, inradius, diameter or indiameter",
            }),
            _ => Err(GeometryError::ConflictingParameters {
                shape: "RegularPolygon",
                parameters: given.iter().map(|(name, _)| *name).collect(),
            }),
        }
    }
}

/// The one measurement a [`RegularPolygon`] stores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measure {
    /// Circumradius.
    Radius(f64),
    Inradius(f64),
    /// Circumdiameter.
    Diameter(f64),
    Indiameter(f64),
}

impl Measure {
    fn circumradius(self, edge_count: usize) -> f64 {
        match self {
            Measure::Radius(r) => r,
            Measure::Inradius(r) => r / apothem_ratio(edge_count),
            Measure::Diameter(d) => d / 2.0,
            Measure::Indiameter(d) => d / apothem_ratio(edge_count) / 2.0,
        }
    }

    fn inradius(self, edge_count: usize) -> f64 {
        match self {
            Measure::Inradius(r) => r,
            Measure::Indiameter(d) => d / 2.0,
            _ => self.circumradius(edge_count) * apothem_ratio(edge_count),
        }
    }

    fn circumdiameter(self, edge_count: usize) -> f64 {
        match self {
            Measure::Diameter(d) => d,
            Measure::Indiameter(d) => d / apothem_ratio(edge_count),
            _ => 2.0 * self.circumradius(edge_count),
        }
    }

    fn indiameter(self, edge_count: usize) -> f64 {
        match self {
            Measure::Indiameter(d) => d,
            _ => 2.0 * self.inradius(edge_count),
        }
    }
}

/// inradius / circumradius
fn apothem_ratio(edge_count: usize) -> f64 {
    (PI / edge_count as f64).cos()
}

/// A regular polygon centered on a point in the plane.
///
/// Vertices, edges and bounds are derived on every call.
#[derive(Clone, Debug)]
pub struct RegularPolygon {
    center: Point,
    edge_count: usize,
    measure: Measure
}

impl RegularPolygon {
    /// Picks the stored measurement from whichever size option is present.
    ///
    /// Fails if `sides` is missing or under 3, if the center is not 2-D, or
    /// if there isn't exactly one size option.
    pub fn new(options: RegularPolygonOptions) -> Result<RegularPolygon> {
        let edge_count = options.sides.ok_or(GeometryError::MissingParameter {
            shape: "RegularPolygon",
            parameter: "an edge count",
        })?;
        if edge_count < 3 {
            return Err(GeometryError::InvalidOperand(format!(
                "a regular polygon needs at least 3 sides, got {}", edge_count
            )))
        }

        let measure = options.measure()?;

        let center = options.center.unwrap_or_else(|| Point::zero(2));
        if center.size() != 2 {
            return Err(GeometryError::DimensionMismatch { left: center.size(), right: 2 })
        }
        tracing::debug!(edge_count, %center, ?measure, "regular polygon");

        Ok(RegularPolygon { center, edge_count, measure })
    }

    pub fn center(&self) -> &Point {
        &self.center
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The measurement this polygon was built with.
    pub fn measure(&self) -> Measure {
        self.measure
    }

    pub fn circumradius(&self) -> f64 {
        self.measure.circumradius(self.edge_count)
    }

    pub fn radius(&self) -> f64 {
        self.circumradius()
    }

    pub fn circumdiameter(&self) -> f64 {
        self.measure.circumdiameter(self.edge_count)
    }

    pub fn diameter(&self) -> f64 {
        self.circumdiameter()
    }

    pub fn inradius(&self) -> f64 {
        self.measure.inradius(self.edge_count)
    }

    pub fn indiameter(&self) -> f64 {
        self.measure.indiameter(self.edge_count)
    }

    pub fn side_length(&self) -> f64 {
        2.0 * self.circumradius() * (PI / self.edge_count as f64).sin()
    }

    /// Regular polygons are always closed.
    pub fn is_closed(&self) -> bool {
        true
    }

    /// Counter-clockwise, starting from the vertex at angle 0.
    pub fn vertices(&self) -> Vec<Point> {
        let r = self.circumradius();
        let step = 2.0 * PI / self.edge_count as f64;
        (0..self.edge_count).map(|k| {
            let angle = k as f64 * step;
            &self.center + &Point::from([r * angle.cos(), r * angle.sin()])
        }).collect()
    }

    pub fn points(&self) -> Vec<Point> {
        self.vertices()
    }

    pub fn edges(&self) -> Vec<Edge> {
        ring_edges(&self.vertices())
    }

    /// The box `center ± circumradius`. This bounds the circumcircle, so it
    /// is looser than the vertices alone for most edge counts.
    pub fn bounds(&self) -> Rectangle {
        let r = self.circumradius();
        Rectangle::from_sides(
            self.center[0] - r, self.center[1] - r,
            self.center[0] + r, self.center[1] + r,
        )
    }
}

impl Round for RegularPolygon {
    fn center(&self) -> &Point {
        &self.center
    }

    fn radius(&self) -> f64 {
        self.circumradius()
    }

    fn diameter(&self) -> f64 {
        self.circumdiameter()
    }
}

/// Polygons compare by center, edge count and circumradius, whichever
/// measurement they were built with. Circumradii derived through `cos(π/n)`
/// pick up rounding error, so they only need to agree to 1e-12 relative.
impl PartialEq for RegularPolygon {
    fn eq(&self, other: &RegularPolygon) -> bool {
        self.center == other.center
            && self.edge_count == other.edge_count
            && relative_eq!(self.circumradius(), other.circumradius(), max_relative = 1e-12)
    }
}

impl fmt::Display for RegularPolygon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RegularPolygon({}, {}, {})", self.edge_count, self.center, self.circumradius())
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use super::*;

    fn polygon(options: RegularPolygonOptions) -> RegularPolygon {
        RegularPolygon::new(options).unwrap()
    }

    #[test]
    fn test_radius() {
        let p = polygon(RegularPolygonOptions::new(4).center([1.0, 2.0]).radius(3.0));
        assert_eq!(p.measure(), Measure::Radius(3.0));
        assert_eq!(p.edge_count(), 4);
        assert_eq!(*p.center(), [1.0, 2.0]);
        assert_eq!(p.radius(), 3.0);
        assert_eq!(p.diameter(), 6.0);
        assert_relative_eq!(p.inradius(), 3.0 * (PI / 4.0).cos());
        assert_relative_eq!(p.indiameter(), 6.0 * (PI / 4.0).cos());
    }

    #[test]
    fn test_inradius() {
        let p = polygon(RegularPolygonOptions::new(6).inradius(2.0));
        assert_eq!(p.measure(), Measure::Inradius(2.0));
        assert_eq!(*p.center(), [0.0, 0.0]);
        assert_eq!(p.inradius(), 2.0);
        assert_eq!(p.indiameter(), 4.0);
        assert_relative_eq!(p.circumradius(), 2.0 / (PI / 6.0).cos());
    }

    #[test]
    fn test_diameter() {
        let p = polygon(RegularPolygonOptions::new(6).center([1.0, 2.0]).diameter(6.0));
        assert_eq!(p.measure(), Measure::Diameter(6.0));
        assert_eq!(p.diameter(), 6.0);
        assert_eq!(p.radius(), 3.0);
    }

    #[test]
    fn test_indiameter() {
        let p = polygon(RegularPolygonOptions::new(6).indiameter(4.0));
        assert_eq!(p.measure(), Measure::Indiameter(4.0));
        assert_eq!(p.indiameter(), 4.0);
        assert_eq!(p.inradius(), 2.0);
        assert_relative_eq!(p.circumdiameter(), 4.0 / (PI / 6.0).cos());
        assert_relative_eq!(p.circumradius(), 2.0 / (PI / 6.0).cos());
    }

    #[test]
    fn test_inradius_consistency() {
        for n in 3..12 {
            for &r in &[0.5, 1.0, 7.25] {
                let by_radius = polygon(RegularPolygonOptions::new(n).radius(r));
                let by_inradius = polygon(
                    RegularPolygonOptions::new(n).inradius(r * (PI / n as f64).cos())
                );
                assert_relative_eq!(by_radius.inradius(), by_inradius.inradius());
                assert_relative_eq!(by_radius.circumradius(), by_inradius.circumradius());
            }
        }
    }

    #[test]
    fn test_vertices() {
        let p = polygon(RegularPolygonOptions::new(4).center([0.0, 0.0]).radius(1.0));
        let expected = [[1.0, 0.0], [0.0, 1.0], [-1.0, 0.0], [0.0, -1.0]];
        let vertices = p.vertices();
        assert_eq!(vertices.len(), 4);
        for (v, e) in vertices.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(v[0], e[0], epsilon = 1e-12);
            assert_abs_diff_eq!(v[1], e[1], epsilon = 1e-12);
        }
        assert_eq!(p.points(), vertices);
    }

    #[test]
    fn test_vertices_on_circumcircle() {
        for n in 3..10 {
            let center = Point::from([1.5, -2.0]);
            let p = polygon(RegularPolygonOptions::new(n).center(center.clone()).diameter(5.0));
            let vertices = p.vertices();
            assert_eq!(vertices.len(), n);
            for v in &vertices {
                assert_relative_eq!(v.distance(&center).unwrap(), 2.5, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_edges() {
        let p = polygon(RegularPolygonOptions::new(5).radius(2.0));
        let vertices = p.vertices();
        let edges = p.edges();
        assert_eq!(edges.len(), 5);
        assert_eq!(edges[0], Edge::new(vertices[0].clone(), vertices[1].clone()));
        assert_eq!(edges[4], Edge::new(vertices[4].clone(), vertices[0].clone()));
        for e in &edges {
            assert_relative_eq!(e.length().unwrap(), p.side_length(), epsilon = 1e-12);
        }
        assert!(p.is_closed());
    }

    #[test]
    fn test_side_length() {
        let hexagon = polygon(RegularPolygonOptions::new(6).radius(2.0));
        assert_relative_eq!(hexagon.side_length(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounds() {
        let p = polygon(RegularPolygonOptions::new(3).center([1.0, 2.0]).radius(3.0));
        assert_eq!(p.min(), [-2.0, -1.0]);
        assert_eq!(p.max(), [4.0, 5.0]);
        assert_eq!(p.minmax(), (p.min(), p.max()));
        let bounds = p.bounds();
        assert_eq!(bounds.min(), [-2.0, -1.0]);
        assert_eq!(bounds.max(), [4.0, 5.0]);
    }

    #[test]
    fn test_missing_sides() {
        let options = RegularPolygonOptions { radius: Some(1.0), ..Default::default() };
        let err = RegularPolygon::new(options).unwrap_err();
        assert_eq!(err.to_string(), "RegularPolygon requires an edge count");
    }

    #[test]
    fn test_too_few_sides() {
        assert!(RegularPolygon::new(RegularPolygonOptions::new(2).radius(1.0)).is_err());
    }

    #[test]
    fn test_missing_size() {
        match RegularPolygon::new(RegularPolygonOptions::new(4)) {
            Err(GeometryError::MissingParameter { .. }) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_conflicting_size() {
        let options = RegularPolygonOptions::new(4).radius(1.0).diameter(2.0);
        assert_eq!(
            RegularPolygon::new(options).unwrap_err(),
            GeometryError::ConflictingParameters {
                shape: "RegularPolygon",
                parameters: vec!["radius", "diameter"],
            }
        );
    }

    #[test]
    fn test_center_dimension() {
        let options = RegularPolygonOptions::new(4).center([0.0, 0.0, 0.0]).radius(1.0);
        assert_eq!(
            RegularPolygon::new(options).unwrap_err(),
            GeometryError::DimensionMismatch { left: 3, right: 2 }
        );
    }

    #[test]
    fn test_size_checked_before_center() {
        let options = RegularPolygonOptions::new(4).center([0.0, 0.0, 0.0]);
        match RegularPolygon::new(options) {
            Err(GeometryError::MissingParameter { .. }) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_equality_is_canonical() {
        let n = 6;
        let by_radius = polygon(RegularPolygonOptions::new(n).radius(2.0));
        let by_diameter = polygon(RegularPolygonOptions::new(n).diameter(4.0));
        let by_inradius = polygon(
            RegularPolygonOptions::new(n).inradius(2.0 * (PI / n as f64).cos())
        );
        assert_eq!(by_radius, by_diameter);
        assert_eq!(by_radius, by_inradius);

        assert_ne!(by_radius, polygon(RegularPolygonOptions::new(n).radius(2.5)));
        assert_ne!(by_radius, polygon(RegularPolygonOptions::new(5).radius(2.0)));
        assert_ne!(by_radius, polygon(RegularPolygonOptions::new(n).center([1.0, 0.0]).radius(2.0)));
    }

    #[test]
    fn test_config_mapping() {
        let options: RegularPolygonOptions = serde_json::from_str(
            r#"{"sides": 4, "center": [1, 2], "radius": 3}"#
        ).unwrap();
        let p = RegularPolygon::new(options).unwrap();
        assert_eq!(p, polygon(RegularPolygonOptions::new(4).center([1.0, 2.0]).radius(3.0)));
    }
}
