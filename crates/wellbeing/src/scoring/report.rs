use std::collections::BTreeMap;

use serde::Serialize;

use super::advice::Advice;
use super::config::CutoffTable;
use super::rules::Tally;
use super::zones::Zone;
use crate::survey::{Dimension, QuestionId};

/// Mean score per dimension, one entry per dimension of the catalogue.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DimensionScores(BTreeMap<Dimension, f64>);

impl DimensionScores {
    pub(crate) fn from_tallies(tallies: &BTreeMap<Dimension, Tally>) -> Self {
        Self(
            tallies
                .iter()
                .map(|(dimension, tally)| (*dimension, tally.mean()))
                .collect(),
        )
    }

    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.0.get(&dimension).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.0.iter().map(|(dimension, score)| (*dimension, *score))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Wire form of the scores: `{ "total": 3.1, "exhaustion": 4.0, ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSheet {
    pub total: f64,
    #[serde(flatten)]
    pub dimensions: DimensionScores,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionAssessment {
    pub dimension: Dimension,
    pub label: &'static str,
    pub score: f64,
    pub answered: u32,
    pub zone: Zone,
    pub zone_label: &'static str,
    pub color_key: &'static str,
    pub advice: Advice,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallAssessment {
    pub score: f64,
    pub answered: u32,
    pub zone: Zone,
    pub zone_label: &'static str,
    pub color_key: &'static str,
    pub advice: Advice,
}

/// Full scoring output for one ledger snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub survey_id: String,
    pub scores: ScoreSheet,
    pub overall: OverallAssessment,
    pub dimensions: Vec<DimensionAssessment>,
    pub cutoffs: CutoffTable,
    /// Scored questions whose answer was not a likert value and was left out of the means.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<QuestionId>,
}

impl ScoreReport {
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionAssessment> {
        self.dimensions
            .iter()
            .find(|assessment| assessment.dimension == dimension)
    }
}
