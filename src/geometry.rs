// src/geometry.rs

use crate::error::{KaosError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Componentwise `(self + other) * ratio`. This is the chaos-game
    /// contraction; it is a midpoint only when `ratio == 0.5`.
    pub fn contract_toward(&self, other: &Point2D, ratio: f64) -> Point2D {
        Point2D::new((self.x + other.x) * ratio, (self.y + other.y) * ratio)
    }
}

/// Axis-aligned rectangle given by its four bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle2D {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Rectangle2D {
    /// Builds a rectangle, rejecting empty, inverted or non-finite bounds.
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Result<Self> {
        let rect = Self {
            left,
            bottom,
            right,
            top,
        };
        rect.validate("input")?;
        Ok(rect)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn contains(&self, point: &Point2D) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.bottom
            && point.y <= self.top
    }

    pub(crate) fn validate(&self, name: &'static str) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(KaosError::DegenerateRectangle {
                name,
                width,
                height,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct RegularPolygon {
    edge_count: usize,
    radius: f64,
    start_angle: f64, // degrees, after the even-N adjustment
    angle: f64,       // degrees between consecutive vertices
    vertices: Vec<Point2D>,
}

impl RegularPolygon {
    pub fn new(edge_count: usize, radius: f64, start_angle_deg: f64) -> Result<Self> {
        if edge_count < 3 {
            return Err(KaosError::InvalidEdgeCount(edge_count));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(KaosError::InvalidRadius(radius));
        }

        let angle = 360.0 / edge_count as f64;

        // Even polygons are rotated by half a step so their lowest edge is horizontal.
        let start_angle = if edge_count % 2 == 0 {
            start_angle_deg + angle / 2.0
        } else {
            start_angle_deg
        };

        Ok(Self {
            edge_count,
            radius,
            start_angle,
            angle,
            vertices: Self::generate_vertices(edge_count, radius, start_angle, angle),
        })
    }

    fn generate_vertices(
        edge_count: usize,
        radius: f64,
        start_angle: f64,
        angle: f64,
    ) -> Vec<Point2D> {
        (0..edge_count)
            .map(|i| {
                let theta = (start_angle + i as f64 * angle).to_radians();
                Point2D::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect()
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Option<&Point2D> {
        self.vertices.get(index)
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn angle_of(p: &Point2D) -> f64 {
        p.y.atan2(p.x).to_degrees().rem_euclid(360.0)
    }

    fn same_angle(a: f64, b: f64) -> bool {
        let diff = (a - b).rem_euclid(360.0);
        diff < 1e-6 || (360.0 - diff) < 1e-6
    }

    #[test]
    fn odd_polygons_start_at_the_given_angle() {
        for n in [3, 5, 7, 9, 11] {
            let polygon = RegularPolygon::new(n, 1.0, 90.0).unwrap();
            assert!(same_angle(angle_of(&polygon.vertices()[0]), 90.0), "n = {n}");
            assert_eq!(polygon.start_angle(), 90.0);
        }
    }

    #[test]
    fn even_polygons_are_rotated_by_half_a_step() {
        for n in [4, 6, 8, 10] {
            let polygon = RegularPolygon::new(n, 1.0, 30.0).unwrap();
            let expected = 30.0 + 180.0 / n as f64;
            assert!(same_angle(angle_of(&polygon.vertices()[0]), expected), "n = {n}");
        }
    }

    #[test]
    fn even_polygons_have_a_horizontal_bottom_edge() {
        for n in [4, 6, 8, 10] {
            let polygon = RegularPolygon::new(n, 1.0, 90.0).unwrap();
            let min_y = polygon.vertices().iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
            let on_bottom = polygon.vertices().iter().filter(|p| (p.y - min_y).abs() < EPS).count();
            assert_eq!(on_bottom, 2, "n = {n}");
        }
    }

    #[test]
    fn vertices_lie_on_the_circle() {
        for n in 3..=16 {
            for radius in [0.5, 1.0, 3.25] {
                let polygon = RegularPolygon::new(n, radius, 17.0).unwrap();
                assert_eq!(polygon.vertices().len(), n);
                for v in polygon.vertices() {
                    assert!((v.length() - radius).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn vertices_are_evenly_spaced() {
        let polygon = RegularPolygon::new(5, 1.0, 90.0).unwrap();
        assert!((polygon.angle() - 72.0).abs() < EPS);
        for i in 0..5 {
            let a = angle_of(&polygon.vertices()[i]);
            let b = angle_of(&polygon.vertices()[(i + 1) % 5]);
            assert!(same_angle(b - a, 72.0));
        }
    }

    #[test]
    fn triangle_vertex_zero_is_on_top() {
        let polygon = RegularPolygon::new(3, 1.0, 90.0).unwrap();
        let top = polygon.vertex(0).unwrap();
        assert!(top.x.abs() < EPS);
        assert!((top.y - 1.0).abs() < EPS);
        assert!(polygon.vertex(3).is_none());
    }

    #[test]
    fn rejects_too_few_edges() {
        assert!(matches!(RegularPolygon::new(2, 1.0, 90.0), Err(KaosError::InvalidEdgeCount(2))));
        assert!(matches!(RegularPolygon::new(0, 1.0, 90.0), Err(KaosError::InvalidEdgeCount(0))));
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(matches!(RegularPolygon::new(3, 0.0, 90.0), Err(KaosError::InvalidRadius(_))));
        assert!(matches!(RegularPolygon::new(3, f64::NAN, 90.0), Err(KaosError::InvalidRadius(_))));
    }

    #[test]
    fn rectangle_rejects_degenerate_bounds() {
        assert!(Rectangle2D::new(0.0, 0.0, 1.0, 1.0).is_ok());
        assert!(Rectangle2D::new(1.0, 0.0, 1.0, 1.0).is_err());
        assert!(Rectangle2D::new(0.0, 2.0, 1.0, 1.0).is_err());
        assert!(Rectangle2D::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn contract_toward_uses_the_ratio() {
        let p = Point2D::new(1.0, 0.0).contract_toward(&Point2D::new(0.0, 1.0), 0.375);
        assert_eq!(p, Point2D::new(0.375, 0.375));
    }
}
