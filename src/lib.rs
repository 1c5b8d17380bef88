// src/lib.rs

pub mod app;
pub mod config;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod preset;
pub mod renderer;
pub mod screen_map;

pub use app::KaosApp;
pub use config::RenderConfig;
pub use encoder::{BmpFileEncoder, PixelEncoder};
pub use error::{KaosError, Result};
pub use generator::{generate, seeded_rng, ChaosGame, ChaosGameState, EngineStats, Transition};
pub use geometry::{Point2D, Rectangle2D, RegularPolygon};
pub use preset::{AcceptRule, PresetConfig, DEFAULT_PRESET};
pub use renderer::{rasterize, PixelBuffer, Rasterizer, Rgb};
pub use screen_map::WorldToScreen;
