use std::collections::BTreeMap;

use super::report::DimensionScores;
use crate::survey::{Dimension, QuestionCatalogue, QuestionId, ResponseLedger};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    pub sum: u32,
    pub count: u32,
}

impl Tally {
    fn add(&mut self, value: u8) {
        self.sum += u32::from(value);
        self.count += 1;
    }

    /// Zero when nothing has been counted.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            f64::from(self.sum) / f64::from(self.count)
        }
    }
}

pub(crate) struct ScoreTallies {
    pub per_dimension: BTreeMap<Dimension, Tally>,
    pub overall: Tally,
    pub skipped: Vec<QuestionId>,
}

/// Sums the likert answers of every scored question, per dimension and overall.
///
/// Answers to unscored questions are ignored. Answers to scored questions that are not a
/// likert value in `1..=5` count as unanswered and are listed in `skipped`.
pub(crate) fn tally(ledger: &ResponseLedger, catalogue: &QuestionCatalogue) -> ScoreTallies {
    let mut per_dimension: BTreeMap<Dimension, Tally> = catalogue
        .dimensions()
        .into_iter()
        .map(|dimension| (dimension, Tally::default()))
        .collect();
    let mut overall = Tally::default();
    let mut skipped = Vec::new();

    for entry in ledger.entries() {
        let Some(dimension) = catalogue
            .get(entry.question_id)
            .and_then(|question| question.scored_dimension())
        else {
            continue;
        };

        match entry.value.likert_value() {
            Some(value) => {
                per_dimension.entry(dimension).or_default().add(value);
                overall.add(value);
            }
            None => skipped.push(entry.question_id),
        }
    }

    ScoreTallies {
        per_dimension,
        overall,
        skipped,
    }
}

/// Mean likert value per dimension of the catalogue; `0.0` for a dimension without answers.
pub fn compute_dimension_scores(
    ledger: &ResponseLedger,
    catalogue: &QuestionCatalogue,
) -> DimensionScores {
    let tallies = tally(ledger, catalogue);
    DimensionScores::from_tallies(&tallies.per_dimension)
}

/// Flat mean of every scorable answer across all dimensions.
///
/// This is not the mean of the dimension scores: the two differ whenever dimensions have
/// different numbers of answers.
pub fn compute_total_score(ledger: &ResponseLedger, catalogue: &QuestionCatalogue) -> f64 {
    tally(ledger, catalogue).overall.mean()
}
