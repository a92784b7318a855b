use super::common::*;
use crate::scoring::{compute_dimension_scores, compute_total_score};
use crate::survey::{Dimension, QuestionId};

#[test]
fn exhaustion_only_ledger_scores_other_dimensions_zero() {
    let catalogue = bat12();
    let ledger = ledger(&[(1, "5"), (3, "4"), (4, "5")]);

    let scores = compute_dimension_scores(&ledger, &catalogue);

    assert_close(scores.get(Dimension::Exhaustion).expect("exhaustion"), 14.0 / 3.0);
    assert_eq!(scores.get(Dimension::MentalDistance), Some(0.0));
    assert_eq!(scores.get(Dimension::Cognitive), Some(0.0));
    assert_eq!(scores.get(Dimension::Emotional), Some(0.0));
    assert_close(compute_total_score(&ledger, &catalogue), 14.0 / 3.0);
}

#[test]
fn one_answer_per_dimension_averages_to_that_answer() {
    let catalogue = bat12();
    let ledger = ledger(&[(1, "3"), (2, "3"), (7, "3"), (10, "3")]);

    let scores = compute_dimension_scores(&ledger, &catalogue);

    for dimension in Dimension::ALL {
        assert_eq!(scores.get(dimension), Some(3.0), "{dimension:?}");
    }
    assert_eq!(compute_total_score(&ledger, &catalogue), 3.0);
}

#[test]
fn one_entry_per_catalogue_dimension_within_range() {
    let catalogue = bat12();
    for value in ["1", "2", "3", "4", "5"] {
        let scores = compute_dimension_scores(&uniform_ledger(value), &catalogue);
        assert_eq!(scores.len(), catalogue.dimensions().len());
        assert!(scores.values().all(|score| (0.0..=5.0).contains(&score)));
    }

    let empty = compute_dimension_scores(&ledger(&[]), &catalogue);
    assert_eq!(empty.len(), 4);
    assert!(empty.values().all(|score| score == 0.0));
}

#[test]
fn total_is_flat_mean_not_mean_of_dimension_means() {
    let catalogue = bat12();
    // Three exhaustion answers at 5, one cognitive answer at 1.
    let ledger = ledger(&[(1, "5"), (3, "5"), (4, "5"), (7, "1")]);

    let scores = compute_dimension_scores(&ledger, &catalogue);
    let total = compute_total_score(&ledger, &catalogue);

    assert_close(total, 16.0 / 4.0);
    let answered: Vec<f64> = scores.values().filter(|score| *score > 0.0).collect();
    let mean_of_means = answered.iter().sum::<f64>() / answered.len() as f64;
    assert_close(mean_of_means, 3.0);
    assert!((total - mean_of_means).abs() > 0.5);
}

#[test]
fn unparsable_answers_are_skipped() {
    let catalogue = bat12();
    let ledger = ledger(&[(1, "5"), (3, "sometimes"), (4, "9"), (2, " 2 ")]);

    let scores = compute_dimension_scores(&ledger, &catalogue);

    assert_eq!(scores.get(Dimension::Exhaustion), Some(5.0));
    assert_eq!(scores.get(Dimension::MentalDistance), Some(2.0));
    assert_eq!(compute_total_score(&ledger, &catalogue), 3.5);
}

#[test]
fn unscored_questions_do_not_contribute() {
    let catalogue = pulse_catalogue();
    let ledger = ledger(&[(1, "4"), (3, "5")]);

    let scores = compute_dimension_scores(&ledger, &catalogue);

    assert_eq!(scores.len(), 2);
    assert_eq!(scores.get(Dimension::Exhaustion), Some(4.0));
    assert_eq!(scores.get(Dimension::Cognitive), Some(0.0));
    assert_eq!(scores.get(Dimension::Emotional), None);
    assert_eq!(compute_total_score(&ledger, &catalogue), 4.0);
}

#[test]
fn scoring_is_idempotent() {
    let catalogue = bat12();
    let ledger = ledger(&[(1, "5"), (2, "1"), (9, "3"), (12, "4")]);
    let snapshot = ledger.clone();

    let first = compute_dimension_scores(&ledger, &catalogue);
    let second = compute_dimension_scores(&ledger, &catalogue);

    assert_eq!(first, second);
    assert_eq!(ledger, snapshot);
    assert_eq!(
        compute_total_score(&ledger, &catalogue),
        compute_total_score(&ledger, &catalogue)
    );
    assert!(ledger.contains(QuestionId(12)));
}
