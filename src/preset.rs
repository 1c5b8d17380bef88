// src/preset.rs

use std::fmt;

/// Decides whether the engine may jump from the last vertex to a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcceptRule {
    /// Rejects a candidate whose index is exactly `distance` away from the last vertex.
    DistanceRestricted(usize),
    Unrestricted,
}

impl AcceptRule {
    #[inline(always)]
    pub fn accepts(&self, candidate: usize, last_vertex: usize) -> bool {
        match *self {
            AcceptRule::DistanceRestricted(distance) => candidate.abs_diff(last_vertex) != distance,
            AcceptRule::Unrestricted => true,
        }
    }

    pub fn forbidden_distance(&self) -> usize {
        match *self {
            AcceptRule::DistanceRestricted(distance) => distance,
            AcceptRule::Unrestricted => 0,
        }
    }
}

impl fmt::Display for AcceptRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcceptRule::DistanceRestricted(d) => write!(f, "distance != {d}"),
            AcceptRule::Unrestricted => write!(f, "unrestricted"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetConfig {
    pub key: i64,
    pub edge_count: usize,
    pub rule: AcceptRule,
    pub ratio: f64,
}

impl PresetConfig {
    const fn new(key: i64, edge_count: usize, rule: AcceptRule, ratio: f64) -> Self {
        Self {
            key,
            edge_count,
            rule,
            ratio,
        }
    }

    pub fn forbidden_distance(&self) -> usize {
        self.rule.forbidden_distance()
    }

    /// Looks up `key`, falling back to [`DEFAULT_PRESET`] for unknown keys.
    pub fn lookup(key: i64) -> &'static PresetConfig {
        Self::find(key).unwrap_or(&DEFAULT_PRESET)
    }

    pub fn find(key: i64) -> Option<&'static PresetConfig> {
        PRESETS.iter().find(|preset| preset.key == key)
    }

    pub fn all() -> &'static [PresetConfig] {
        PRESETS
    }
}

use AcceptRule::{DistanceRestricted, Unrestricted};

/// Triangle, no restriction, halfway jumps: the Sierpinski triangle.
pub const DEFAULT_PRESET: PresetConfig = PresetConfig::new(0, 3, Unrestricted, 0.5);

static PRESETS: &[PresetConfig] = &[
    DEFAULT_PRESET,
    PresetConfig::new(1, 4, DistanceRestricted(0), 0.5),
    PresetConfig::new(2, 4, DistanceRestricted(2), 0.5),
    PresetConfig::new(3, 5, DistanceRestricted(0), 0.5),
    PresetConfig::new(4, 7, Unrestricted, 0.4),
    PresetConfig::new(5, 7, DistanceRestricted(3), 0.4),
    PresetConfig::new(6, 6, DistanceRestricted(3), 0.4),
    PresetConfig::new(7, 6, DistanceRestricted(0), 0.375),
    PresetConfig::new(8, 6, DistanceRestricted(2), 0.5),
    PresetConfig::new(9, 8, DistanceRestricted(0), 0.4),
    PresetConfig::new(10, 10, DistanceRestricted(1), 0.375),
    PresetConfig::new(11, 10, DistanceRestricted(2), 0.375),
    PresetConfig::new(12, 10, DistanceRestricted(3), 0.375),
    PresetConfig::new(13, 10, DistanceRestricted(4), 0.375),
    PresetConfig::new(14, 10, DistanceRestricted(5), 0.375),
];
