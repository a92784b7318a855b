use crate::scoring::{CompletenessPolicy, CutoffTable, ScoringConfig, ScoringEngine};
use crate::survey::{Dimension, Question, QuestionCatalogue, QuestionId, ResponseLedger};

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn bat12() -> QuestionCatalogue {
    QuestionCatalogue::bat12()
}

/// Ledger built from `(question id, raw value)` pairs.
pub(super) fn ledger(answers: &[(u32, &str)]) -> ResponseLedger {
    answers
        .iter()
        .map(|(id, value)| (QuestionId(*id), *value))
        .collect()
}

/// All twelve BAT-12 questions answered with the same value.
pub(super) fn uniform_ledger(value: &str) -> ResponseLedger {
    (1..=12).map(|id| (QuestionId(id), value)).collect()
}

pub(super) fn partial_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::new(
        CutoffTable::unified(),
        CompletenessPolicy::AllowPartial,
    ))
}

pub(super) fn strict_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::new(
        CutoffTable::unified(),
        CompletenessPolicy::RequireAll,
    ))
}

/// Catalogue mixing scored likert questions with an unscored free text question.
pub(super) fn pulse_catalogue() -> QuestionCatalogue {
    QuestionCatalogue::new(
        "pulse",
        vec![
            Question::likert(1, Dimension::Exhaustion, "tired?"),
            Question::likert(2, Dimension::Cognitive, "focused?"),
            Question::free_text(3, "anything else?"),
        ],
    )
    .expect("valid catalogue")
}
