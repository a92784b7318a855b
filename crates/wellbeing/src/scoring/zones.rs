use serde::{Deserialize, Serialize};

use super::config::CutoffTable;

/// Risk band a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Healthy,
    AtRisk,
    HighRisk,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Healthy, Zone::AtRisk, Zone::HighRisk];

    pub const fn label(self) -> &'static str {
        match self {
            Zone::Healthy => "Healthy",
            Zone::AtRisk => "At Risk",
            Zone::HighRisk => "High Risk",
        }
    }

    pub const fn color_key(self) -> &'static str {
        match self {
            Zone::Healthy => "green",
            Zone::AtRisk => "orange",
            Zone::HighRisk => "red",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Zone::Healthy => "healthy",
            Zone::AtRisk => "at_risk",
            Zone::HighRisk => "high_risk",
        }
    }
}

/// Maps a score onto a zone. Anything below the at-risk bound is `Healthy`, including the
/// `0.0` reported for a dimension without answers.
pub fn classify(score: f64, cutoffs: &CutoffTable) -> Zone {
    if score >= cutoffs.high_risk_from() {
        Zone::HighRisk
    } else if score >= cutoffs.at_risk_from() {
        Zone::AtRisk
    } else {
        Zone::Healthy
    }
}
