//! Burnout assessment scoring: dimension and total means, risk zones, and advice.

mod advice;
mod config;
mod report;
mod rules;
mod zones;

#[cfg(test)]
mod tests;

pub use advice::{advice_for, overall_advice, Advice, AdviceKey};
pub use config::{CompletenessPolicy, CutoffPreset, CutoffTable, ScoringConfig};
pub use report::{
    DimensionAssessment, DimensionScores, OverallAssessment, ScoreReport, ScoreSheet,
};
pub use rules::{compute_dimension_scores, compute_total_score};
pub use zones::{classify, Zone};

use tracing::debug;

use crate::survey::{QuestionCatalogue, QuestionId, ResponseLedger};

/// Stateless scorer applying one cutoff table and completeness policy.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn classify(&self, score: f64) -> Zone {
        classify(score, &self.config.cutoffs)
    }

    pub fn score(
        &self,
        ledger: &ResponseLedger,
        catalogue: &QuestionCatalogue,
    ) -> Result<ScoreReport, ScoringError> {
        if let Some(unknown) = ledger.question_ids().find(|id| !catalogue.contains(*id)) {
            return Err(ScoringError::UnknownQuestionId(unknown));
        }

        if self.config.completeness == CompletenessPolicy::RequireAll {
            // A scored question whose answer is not a likert value counts as unanswered.
            let missing: Vec<QuestionId> = catalogue
                .questions()
                .iter()
                .filter(|question| match ledger.get(question.id) {
                    None => true,
                    Some(answer) => {
                        question.scored_dimension().is_some() && answer.likert_value().is_none()
                    }
                })
                .map(|question| question.id)
                .collect();
            if !missing.is_empty() {
                return Err(ScoringError::IncompleteLedger { missing });
            }
        }

        let tallies = rules::tally(ledger, catalogue);
        let dimension_scores = DimensionScores::from_tallies(&tallies.per_dimension);

        let dimensions = tallies
            .per_dimension
            .iter()
            .map(|(dimension, tally)| {
                let score = tally.mean();
                let zone = self.classify(score);
                DimensionAssessment {
                    dimension: *dimension,
                    label: dimension.label(),
                    score,
                    answered: tally.count,
                    zone,
                    zone_label: zone.label(),
                    color_key: zone.color_key(),
                    advice: advice_for(*dimension, zone),
                }
            })
            .collect();

        let total = tallies.overall.mean();
        let overall_zone = self.classify(total);
        let overall = OverallAssessment {
            score: total,
            answered: tallies.overall.count,
            zone: overall_zone,
            zone_label: overall_zone.label(),
            color_key: overall_zone.color_key(),
            advice: overall_advice(overall_zone),
        };

        debug!(
            survey = catalogue.survey_id(),
            answers = ledger.len(),
            skipped = tallies.skipped.len(),
            total,
            zone = overall_zone.label(),
            "scored burnout assessment"
        );

        Ok(ScoreReport {
            survey_id: catalogue.survey_id().to_string(),
            scores: ScoreSheet {
                total,
                dimensions: dimension_scores,
            },
            overall,
            dimensions,
            cutoffs: self.config.cutoffs,
            skipped: tallies.skipped,
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("answer references question {0}, which is not in the catalogue")]
    UnknownQuestionId(QuestionId),
    #[error("{} required question(s) are unanswered", .missing.len())]
    IncompleteLedger { missing: Vec<QuestionId> },
    #[error("cutoffs must be finite and ascending (at risk {at_risk_from}, high risk {high_risk_from})")]
    InvalidCutoffs {
        at_risk_from: f64,
        high_risk_from: f64,
    },
}
