use super::common::*;
use crate::scoring::{ScoringError, Zone};
use crate::survey::{Dimension, QuestionId};

#[test]
fn scenario_exhaustion_only_is_high_risk() {
    let report = partial_engine()
        .score(&ledger(&[(1, "5"), (3, "4"), (4, "5")]), &bat12())
        .expect("partial scoring allowed");

    let exhaustion = report
        .dimension(Dimension::Exhaustion)
        .expect("exhaustion assessed");
    assert_eq!(format!("{:.2}", exhaustion.score), "4.67");
    assert_eq!(exhaustion.zone, Zone::HighRisk);
    assert_eq!(exhaustion.zone_label, "High Risk");
    assert_eq!(exhaustion.answered, 3);
    assert_eq!(format!("{:.2}", report.overall.score), "4.67");

    for dimension in [Dimension::MentalDistance, Dimension::Cognitive, Dimension::Emotional] {
        let assessment = report.dimension(dimension).expect("assessed");
        assert_eq!(assessment.score, 0.0);
        assert_eq!(assessment.zone, Zone::Healthy);
    }
}

#[test]
fn scenario_all_threes_is_at_risk_everywhere() {
    let report = partial_engine()
        .score(&ledger(&[(1, "3"), (2, "3"), (7, "3"), (10, "3")]), &bat12())
        .expect("scores");

    assert_eq!(report.overall.score, 3.0);
    assert_eq!(report.overall.zone, Zone::AtRisk);
    assert!(report
        .dimensions
        .iter()
        .all(|assessment| assessment.score == 3.0 && assessment.zone == Zone::AtRisk));
}

#[test]
fn scenario_empty_ledger_is_healthy_with_zero_scores() {
    let report = partial_engine()
        .score(&ledger(&[]), &bat12())
        .expect("scores");

    assert_eq!(report.overall.score, 0.0);
    assert_eq!(report.overall.zone, Zone::Healthy);
    assert_eq!(report.dimensions.len(), 4);
    assert!(report
        .dimensions
        .iter()
        .all(|assessment| assessment.score == 0.0 && assessment.zone == Zone::Healthy));
}

#[test]
fn require_all_policy_lists_missing_questions() {
    let error = strict_engine()
        .score(&ledger(&[(1, "5"), (2, "4")]), &bat12())
        .expect_err("incomplete ledger rejected");

    match error {
        ScoringError::IncompleteLedger { missing } => {
            assert_eq!(missing.len(), 10);
            assert_eq!(missing[0], QuestionId(3));
        }
        other => panic!("expected incomplete ledger, got {other:?}"),
    }
}

#[test]
fn require_all_policy_accepts_complete_ledger() {
    let report = strict_engine()
        .score(&uniform_ledger("2"), &bat12())
        .expect("complete ledger scores");

    assert_eq!(report.overall.answered, 12);
    assert_eq!(report.overall.zone, Zone::Healthy);
    assert_eq!(report.overall.advice.key.0, "overall.healthy");
}

#[test]
fn require_all_policy_treats_unparsable_scored_answers_as_missing() {
    let answers = uniform_ledger("3").with_answer(QuestionId(5), "n/a");

    let error = strict_engine()
        .score(&answers, &bat12())
        .expect_err("unparsable answer leaves the ledger incomplete");

    assert_eq!(
        error,
        ScoringError::IncompleteLedger {
            missing: vec![QuestionId(5)]
        }
    );
}

#[test]
fn require_all_policy_ignores_free_text_wording() {
    let catalogue = pulse_catalogue();
    let answers = ledger(&[(1, "4"), (2, "2"), (3, "more breaks please")]);

    let report = strict_engine()
        .score(&answers, &catalogue)
        .expect("free text answers are complete as given");

    assert_eq!(report.overall.answered, 2);
    assert!(report.skipped.is_empty());
}

#[test]
fn unknown_question_ids_are_rejected() {
    let error = partial_engine()
        .score(&ledger(&[(1, "5"), (99, "3")]), &bat12())
        .expect_err("unknown id rejected");

    assert_eq!(error, ScoringError::UnknownQuestionId(QuestionId(99)));
}

#[test]
fn report_lists_skipped_answers_and_advice() {
    let report = partial_engine()
        .score(&ledger(&[(1, "5"), (3, "n/a")]), &bat12())
        .expect("scores");

    assert_eq!(report.skipped, vec![QuestionId(3)]);
    let exhaustion = report.dimension(Dimension::Exhaustion).expect("assessed");
    assert_eq!(exhaustion.answered, 1);
    assert_eq!(exhaustion.advice.key.0, "exhaustion.high_risk");
    assert_eq!(exhaustion.color_key, "red");
}

#[test]
fn score_sheet_serializes_flat() {
    let report = partial_engine()
        .score(&ledger(&[(1, "3"), (2, "3"), (7, "3"), (10, "3")]), &bat12())
        .expect("scores");

    let value = serde_json::to_value(&report.scores).expect("serializes");
    assert_eq!(value["total"], 3.0);
    assert_eq!(value["exhaustion"], 3.0);
    assert_eq!(value["mental_distance"], 3.0);
    assert_eq!(value["cognitive"], 3.0);
    assert_eq!(value["emotional"], 3.0);
}
