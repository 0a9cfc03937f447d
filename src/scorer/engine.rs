use super::types::{Normalized, PerformanceScore, ScoreDetails, SubScores};
use super::*;
use crate::build::Build;
use crate::catalog::{attr_or, Category, Part};

pub fn cpu_score(cpu: &Part) -> f64 {
    let cores = attr_or(cpu.cores, DEFAULT_CORES);
    let clock = attr_or(cpu.boost_clock, DEFAULT_BOOST_CLOCK);
    cores * 5.0 + clock * 15.0
}

pub fn gpu_score(gpu: &Part) -> f64 {
    let vram = attr_or(gpu.vram, DEFAULT_VRAM);
    let price = attr_or(gpu.price, DEFAULT_GPU_PRICE);
    vram * 15.0 + price / 500.0
}

pub fn ram_score(ram: &Part) -> f64 {
    let capacity = attr_or(ram.capacity, DEFAULT_RAM_CAPACITY);
    let speed = attr_or(ram.speed, DEFAULT_RAM_SPEED);
    capacity * 3.0 + speed / 100.0
}

pub fn sub_scores(build: &Build) -> SubScores {
    SubScores {
        cpu: build.get(Category::Cpu).map(cpu_score).unwrap_or(0.0),
        gpu: build.get(Category::Gpu).map(gpu_score).unwrap_or(0.0),
        ram: build.get(Category::Ram).map(ram_score).unwrap_or(0.0),
    }
}

/// Upper clamp only; negative raw scores pass through.
pub fn normalize(raw: &SubScores) -> Normalized {
    Normalized {
        cpu: (raw.cpu / MAX_CPU_SCORE).min(1.0),
        gpu: (raw.gpu / MAX_GPU_SCORE).min(1.0),
        ram: (raw.ram / MAX_RAM_SCORE).min(1.0),
    }
}

fn weighted(norm: &Normalized, weights: &Weights) -> f64 {
    norm.cpu * weights.cpu + norm.gpu * weights.gpu + norm.ram * weights.ram
}

/// Rounds half-up, so -2.5 goes to -2 and 44.5 to 45.
pub fn round_percent(composite: f64) -> i32 {
    (composite * 100.0 + 0.5).floor() as i32
}

pub fn score_debug(build: &Build) -> ScoreDetails {
    let raw = sub_scores(build);
    let normalized = normalize(&raw);
    let gaming_composite = weighted(&normalized, &GAMING_WEIGHTS);
    let workstation_composite = weighted(&normalized, &WORKSTATION_WEIGHTS);

    ScoreDetails {
        raw,
        normalized,
        gaming_composite,
        workstation_composite,
        performance: PerformanceScore {
            gaming: round_percent(gaming_composite),
            workstation: round_percent(workstation_composite),
        },
    }
}

pub fn score(build: &Build) -> PerformanceScore {
    score_debug(build).performance
}
