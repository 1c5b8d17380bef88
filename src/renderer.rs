// src/renderer.rs

use bytemuck::{Pod, Zeroable};
use log::debug;

use crate::error::{KaosError, Result};
use crate::geometry::Point2D;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BACKGROUND_COLOR: Rgb = Rgb::new(255, 255, 255);
pub const POINT_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Row-major RGB image, row 0 first.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, fill: Rgb) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(KaosError::InvalidImageSize { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes one pixel. Returns false when (x, y) is outside the image.
    pub fn set(&mut self, x: i64, y: i64, color: Rgb) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Tightly packed RGB8 bytes, ready for an encoder.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn count(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

/// Stamps points onto a fresh background buffer.
pub struct Rasterizer {
    buffer: PixelBuffer,
    point_radius: u32,
    color: Rgb,
    clipped: usize,
}

impl Rasterizer {
    pub fn new(width: u32, height: u32, point_radius: u32) -> Result<Self> {
        Ok(Self {
            buffer: PixelBuffer::new(width, height, BACKGROUND_COLOR)?,
            point_radius,
            color: POINT_COLOR,
            clipped: 0,
        })
    }

    /// Points whose pixel fell outside the image so far.
    pub fn clipped(&self) -> usize {
        self.clipped
    }

    pub fn draw_point(&mut self, point: &Point2D) {
        if self.point_radius == 0 {
            // Truncation toward zero, so (-0.5, y) still lands in column 0.
            if !self.buffer.set(point.x as i64, point.y as i64, self.color) {
                self.clipped += 1;
            }
        } else {
            self.draw_disk(point);
        }
    }

    fn draw_disk(&mut self, point: &Point2D) {
        let radius = self.point_radius as f64;
        // Offsets stay within image size plus radius, which can exceed 32 bits.
        let radius2 = self.point_radius as i128 * self.point_radius as i128;
        let max_x = (self.buffer.width - 1) as f64;
        let max_y = (self.buffer.height - 1) as f64;

        let xmin = (point.x - radius).max(0.0) as i64;
        let xmax = (point.x + radius).min(max_x) as i64;
        let ymin = (point.y - radius).max(0.0) as i64;
        let ymax = (point.y + radius).min(max_y) as i64;

        let (cx, cy) = (point.x as i64, point.y as i64);
        let mut stamped = false;

        for j in ymin..=ymax {
            for i in xmin..=xmax {
                let (dx, dy) = (i as i128 - cx as i128, j as i128 - cy as i128);
                let dist = dx * dx + dy * dy;
                if dist <= radius2 {
                    stamped |= self.buffer.set(i, j, self.color);
                }
            }
        }

        if !stamped {
            self.clipped += 1;
        }
    }

    pub fn finish(self) -> PixelBuffer {
        if self.clipped > 0 {
            debug!(
                "{} points fell outside the {}x{} image",
                self.clipped, self.buffer.width, self.buffer.height
            );
        }
        self.buffer
    }
}

pub fn rasterize(
    width: u32,
    height: u32,
    points: &[Point2D],
    point_radius: u32,
) -> Result<PixelBuffer> {
    let mut rasterizer = Rasterizer::new(width, height, point_radius)?;
    for point in points {
        rasterizer.draw_point(point);
    }
    Ok(rasterizer.finish())
}
