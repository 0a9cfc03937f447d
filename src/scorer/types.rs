use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Raw, un-normalized per-component estimates. A missing component scores 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub cpu: f64,
    pub gpu: f64,
    pub ram: f64,
}

/// Sub-scores divided by their ceilings and capped at 1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalized {
    pub cpu: f64,
    pub gpu: f64,
    pub ram: f64,
}

/// Everything the scorer derives from one build.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub raw: SubScores,
    pub normalized: Normalized,

    // Composites in [0, 1] before rounding
    pub gaming_composite: f64,
    pub workstation_composite: f64,

    pub performance: PerformanceScore,
}

/// Rounded percentages shown on the score bars.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceScore {
    pub gaming: i32,
    pub workstation: i32,
}

/// Colour band for a percentage bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ScoreTier {
    Low,
    Medium,
    High,
}

impl ScoreTier {
    pub fn from_percent(percent: i32) -> Self {
        if percent > 75 {
            Self::High
        } else if percent > 40 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
