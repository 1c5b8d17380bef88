// src/app.rs

use std::path::PathBuf;

use log::info;
use rayon::prelude::*;

use crate::config::{world_window, RenderConfig};
use crate::encoder::{BmpFileEncoder, PixelEncoder};
use crate::error::Result;
use crate::generator::{generate, seeded_rng};
use crate::preset::PresetConfig;
use crate::renderer::{rasterize, PixelBuffer};
use crate::screen_map::WorldToScreen;

/// Runs the whole pipeline: preset, points, screen mapping, raster, file.
pub struct KaosApp<E: PixelEncoder = BmpFileEncoder> {
    config: RenderConfig,
    encoder: E,
}

impl KaosApp<BmpFileEncoder> {
    pub fn new(config: RenderConfig) -> Result<Self> {
        Self::with_encoder(config, BmpFileEncoder)
    }
}

impl<E: PixelEncoder> KaosApp<E> {
    pub fn with_encoder(config: RenderConfig, encoder: E) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, encoder })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Generates and rasterizes the preset `key` without touching the disk.
    pub fn render(&self, key: i64) -> Result<PixelBuffer> {
        let rng = seeded_rng(self.config.seed_for(key));
        let points = generate(self.config.iterations, key, rng)?;

        let map = WorldToScreen::new(&world_window(), &self.config.screen_window())?;
        let screen_points = map.map_points(&points);

        rasterize(self.config.width, self.config.height, &screen_points, self.config.point_radius)
    }

    /// Renders `key` and writes `kaos_<key>.bmp` into the output directory.
    pub fn render_to_file(&self, key: i64) -> Result<PathBuf> {
        info!("Selection is: {key}");
        let buffer = self.render(key)?;
        let path = self.config.output_path(key);
        self.encoder.encode(&buffer, &path)?;
        info!("Saved to: {}", path.display());
        Ok(path)
    }

    /// Renders the configured preset.
    pub fn run(&self) -> Result<PathBuf> {
        self.render_to_file(self.config.preset_key)
    }

    /// Renders every preset of the table, one independent run per thread.
    /// Stops at the first failure.
    pub fn run_all(&self) -> Result<Vec<PathBuf>> {
        PresetConfig::all()
            .par_iter()
            .map(|preset| self.render_to_file(preset.key))
            .collect()
    }
}
