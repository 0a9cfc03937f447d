pub mod engine;
pub mod types;

pub use self::types::{Normalized, PerformanceScore, ScoreDetails, ScoreTier, SubScores};
use crate::build::Build;

// === COMPONENT DEFAULTS (absent or zero attribute) ===
pub const DEFAULT_CORES: f64 = 4.0;
pub const DEFAULT_BOOST_CLOCK: f64 = 3.5;
pub const DEFAULT_VRAM: f64 = 2.0;
pub const DEFAULT_GPU_PRICE: f64 = 5000.0;
pub const DEFAULT_RAM_CAPACITY: f64 = 8.0;
pub const DEFAULT_RAM_SPEED: f64 = 2400.0;

// === NORMALIZATION CEILINGS ===
pub const MAX_CPU_SCORE: f64 = 200.0;
pub const MAX_GPU_SCORE: f64 = 400.0;
pub const MAX_RAM_SCORE: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub cpu: f64,
    pub gpu: f64,
    pub ram: f64,
}

pub const GAMING_WEIGHTS: Weights = Weights {
    cpu: 0.25,
    gpu: 0.65,
    ram: 0.10,
};

pub const WORKSTATION_WEIGHTS: Weights = Weights {
    cpu: 0.50,
    gpu: 0.20,
    ram: 0.30,
};

/// Gaming and workstation percentages for a build. Pure; call it again
/// after every build change.
pub fn score(build: &Build) -> PerformanceScore {
    engine::score(build)
}

/// Same as `score`, with the intermediate values kept.
pub fn score_debug(build: &Build) -> ScoreDetails {
    engine::score_debug(build)
}
