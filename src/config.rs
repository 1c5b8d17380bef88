// src/config.rs

use std::path::PathBuf;

use crate::error::{KaosError, Result};
use crate::geometry::Rectangle2D;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 800;

pub const MAX_ITERATIONS: usize = 100_000;
pub const IGNORE_FIRST_ITERATIONS: usize = 10; // accepted transitions per emitted point
pub const DEFAULT_POINT_RADIUS: u32 = 0;

pub const POLYGON_RADIUS: f64 = 1.0;
pub const POLYGON_START_ANGLE: f64 = 90.0;

pub const WORLD_HALF_EXTENT: f64 = 1.08;

pub const DEFAULT_PRESET_KEY: i64 = 0;

/// The mathematical window every preset is drawn in.
pub fn world_window() -> Rectangle2D {
    Rectangle2D {
        left: -WORLD_HALF_EXTENT,
        bottom: -WORLD_HALF_EXTENT,
        right: WORLD_HALF_EXTENT,
        top: WORLD_HALF_EXTENT,
    }
}

/// Pixel window `[0, width-1] x [0, height-1]`.
pub fn screen_window(width: u32, height: u32) -> Rectangle2D {
    Rectangle2D {
        left: 0.0,
        bottom: 0.0,
        right: width.saturating_sub(1) as f64,
        top: height.saturating_sub(1) as f64,
    }
}

/// Parses a preset key leniently: anything that is not an integer selects the default key.
pub fn parse_preset_key(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PRESET_KEY)
}

pub fn output_file_name(key: i64) -> String {
    format!("kaos_{key}.bmp")
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub preset_key: i64,
    pub iterations: usize,
    pub point_radius: u32,
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            preset_key: DEFAULT_PRESET_KEY,
            iterations: MAX_ITERATIONS,
            point_radius: DEFAULT_POINT_RADIUS,
            seed: None,
            output_dir: PathBuf::from("."),
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(KaosError::InvalidImageSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn output_path(&self, key: i64) -> PathBuf {
        self.output_dir.join(output_file_name(key))
    }

    /// Seed for the run of `key`. Parallel runs get distinct but reproducible seeds.
    pub fn seed_for(&self, key: i64) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(key as u64))
    }

    pub fn screen_window(&self) -> Rectangle2D {
        screen_window(self.width, self.height)
    }
}
