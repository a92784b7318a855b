use serde::{Deserialize, Serialize};

use super::ScoringError;

/// Score thresholds separating the three risk zones. Each bound is inclusive.
///
/// Bounds are always finite and ascending, whether built in code or deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCutoffs")]
pub struct CutoffTable {
    at_risk_from: f64,
    high_risk_from: f64,
}

#[derive(Deserialize)]
struct RawCutoffs {
    at_risk_from: f64,
    high_risk_from: f64,
}

impl TryFrom<RawCutoffs> for CutoffTable {
    type Error = ScoringError;

    fn try_from(raw: RawCutoffs) -> Result<Self, Self::Error> {
        Self::new(raw.at_risk_from, raw.high_risk_from)
    }
}

impl CutoffTable {
    pub fn new(at_risk_from: f64, high_risk_from: f64) -> Result<Self, ScoringError> {
        let valid = at_risk_from.is_finite()
            && high_risk_from.is_finite()
            && at_risk_from <= high_risk_from;
        if !valid {
            return Err(ScoringError::InvalidCutoffs {
                at_risk_from,
                high_risk_from,
            });
        }

        Ok(Self {
            at_risk_from,
            high_risk_from,
        })
    }

    pub const fn at_risk_from(&self) -> f64 {
        self.at_risk_from
    }

    pub const fn high_risk_from(&self) -> f64 {
        self.high_risk_from
    }

    /// Bands used on the assessment results page: Healthy below 2.80, High Risk from 3.50.
    pub const fn unified() -> Self {
        Self {
            at_risk_from: 2.8,
            high_risk_from: 3.5,
        }
    }

    /// Bands used by the dashboard scorecards: Healthy below 2.50, High Risk from 3.50.
    pub const fn dashboard() -> Self {
        Self {
            at_risk_from: 2.5,
            high_risk_from: 3.5,
        }
    }
}

impl Default for CutoffTable {
    fn default() -> Self {
        Self::unified()
    }
}

/// Named cutoff tables that can be selected from configuration or requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutoffPreset {
    #[default]
    Unified,
    Dashboard,
}

impl CutoffPreset {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unified" | "results" => Some(Self::Unified),
            "dashboard" | "scorecard" => Some(Self::Dashboard),
            _ => None,
        }
    }

    pub const fn table(self) -> CutoffTable {
        match self {
            CutoffPreset::Unified => CutoffTable::unified(),
            CutoffPreset::Dashboard => CutoffTable::dashboard(),
        }
    }
}

/// Whether a ledger with unanswered questions may be scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessPolicy {
    #[default]
    RequireAll,
    AllowPartial,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub cutoffs: CutoffTable,
    pub completeness: CompletenessPolicy,
}

impl ScoringConfig {
    pub fn new(cutoffs: CutoffTable, completeness: CompletenessPolicy) -> Self {
        Self {
            cutoffs,
            completeness,
        }
    }
}
