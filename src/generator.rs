// src/generator.rs

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{IGNORE_FIRST_ITERATIONS, POLYGON_RADIUS, POLYGON_START_ANGLE};
use crate::error::Result;
use crate::geometry::{Point2D, RegularPolygon};
use crate::preset::{AcceptRule, PresetConfig};

/// Rejected draws tolerated within one advance before the engine scans for an
/// acceptable vertex instead of drawing again.
pub const MAX_DRAW_ATTEMPTS: usize = 1_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChaosGameState {
    pub last_point: Point2D,
    pub last_vertex: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub draws: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub emitted: u64,
    pub fallbacks: u64,
}

/// One accepted move of the chaos game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from_vertex: usize,
    pub vertex: usize,
    pub point: Point2D,
}

pub struct ChaosGame<R: Rng> {
    polygon: RegularPolygon,
    rule: AcceptRule,
    ratio: f64,
    warmup: usize,
    state: ChaosGameState,
    stats: EngineStats,
    rng: R,
}

impl<R: Rng> ChaosGame<R> {
    pub fn new(polygon: RegularPolygon, rule: AcceptRule, ratio: f64, rng: R) -> Self {
        // RegularPolygon guarantees at least 3 vertices.
        let state = ChaosGameState {
            last_point: polygon.vertices()[0],
            last_vertex: 0,
        };
        Self {
            polygon,
            rule,
            ratio,
            warmup: IGNORE_FIRST_ITERATIONS,
            state,
            stats: EngineStats::default(),
            rng,
        }
    }

    pub fn from_preset(preset: &PresetConfig, rng: R) -> Result<Self> {
        let polygon = RegularPolygon::new(preset.edge_count, POLYGON_RADIUS, POLYGON_START_ANGLE)?;
        Ok(Self::new(polygon, preset.rule, preset.ratio, rng))
    }

    /// Number of accepted transitions per emitted point. Zero is treated as one.
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup.max(1);
        self
    }

    pub fn polygon(&self) -> &RegularPolygon {
        &self.polygon
    }

    pub fn state(&self) -> &ChaosGameState {
        &self.state
    }

    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    fn draw_vertex(&mut self) -> usize {
        let edge_count = self.polygon.edge_count();
        let last_vertex = self.state.last_vertex;

        for _ in 0..MAX_DRAW_ATTEMPTS {
            let candidate = self.rng.gen_range(0..edge_count);
            self.stats.draws += 1;
            if self.rule.accepts(candidate, last_vertex) {
                return candidate;
            }
            self.stats.rejected += 1;
        }

        // At most two indices sit at a given distance from the last vertex, so a
        // polygon with 3 or more vertices always has an acceptable one.
        self.stats.fallbacks += 1;
        let offset = self.rng.gen_range(0..edge_count);
        let candidate = (0..edge_count)
            .map(|i| (offset + i) % edge_count)
            .find(|&candidate| self.rule.accepts(candidate, last_vertex))
            .unwrap_or(offset);
        warn!(
            "{} draws rejected in a row (rule {}, last vertex {}), picked vertex {} by scan",
            MAX_DRAW_ATTEMPTS, self.rule, last_vertex, candidate
        );
        candidate
    }

    /// Draws until the rule accepts a vertex, then moves toward it.
    pub fn advance(&mut self) -> Transition {
        let vertex = self.draw_vertex();
        let target = self.polygon.vertices()[vertex];
        let point = self.state.last_point.contract_toward(&target, self.ratio);

        let from_vertex = self.state.last_vertex;
        self.state = ChaosGameState {
            last_point: point,
            last_vertex: vertex,
        };
        self.stats.accepted += 1;

        Transition {
            from_vertex,
            vertex,
            point,
        }
    }

    /// Runs `warmup` accepted transitions and returns the last point reached.
    pub fn next_point(&mut self) -> Point2D {
        for _ in 0..self.warmup {
            self.advance();
        }
        self.stats.emitted += 1;
        self.state.last_point
    }
}

impl<R: Rng> Iterator for ChaosGame<R> {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        Some(self.next_point())
    }
}

/// StdRng seeded from `seed`, or from OS entropy when there is none.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generates `iterations` points for the preset `key`. Unknown keys use the default preset.
pub fn generate<R: Rng>(iterations: usize, key: i64, rng: R) -> Result<Vec<Point2D>> {
    let preset = match PresetConfig::find(key) {
        Some(preset) => preset,
        None => {
            warn!("unknown preset {key}, falling back to the default preset");
            PresetConfig::lookup(key)
        }
    };

    let mut game = ChaosGame::from_preset(preset, rng)?;
    let points: Vec<Point2D> = game.by_ref().take(iterations).collect();

    debug!(
        "preset {key}: {} points from {} edges ({}, ratio {}), stats {:?}",
        points.len(),
        preset.edge_count,
        preset.rule,
        preset.ratio,
        game.stats()
    );
    Ok(points)
}
