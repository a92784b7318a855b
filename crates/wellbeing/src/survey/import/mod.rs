//! Rebuilds a [`ResponseLedger`] from a CSV export of the `response` table.
//!
//! Expected headers are `survey_id,question_id,answer,created_at`; only `question_id` is
//! mandatory. `created_at` may be empty, RFC 3339, Postgres `timestamptz` text, or a bare date;
//! any other value is rejected rather than reordered. Rows are applied in `created_at` order so that the newest answer for a question
//! wins, matching how the live form overwrites earlier answers.

mod parser;

use std::io::Read;
use std::path::Path;

use super::catalogue::QuestionCatalogue;
use super::domain::{QuestionId, RawAnswer};
use super::ledger::ResponseLedger;

#[derive(Debug, thiserror::Error)]
pub enum ResponseImportError {
    #[error("failed to read response export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid response CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("response export references question {0}, which is not in the catalogue")]
    UnknownQuestionId(QuestionId),
    #[error("row {row} has an unreadable created_at value '{value}'")]
    InvalidTimestamp { row: usize, value: String },
}

pub struct ResponseExportImporter<'a> {
    catalogue: &'a QuestionCatalogue,
    survey_id: Option<String>,
}

impl<'a> ResponseExportImporter<'a> {
    pub fn new(catalogue: &'a QuestionCatalogue) -> Self {
        Self {
            catalogue,
            survey_id: None,
        }
    }

    /// Restrict the import to rows of one survey. Rows without a survey id are kept.
    pub fn for_survey(mut self, survey_id: impl Into<String>) -> Self {
        self.survey_id = Some(survey_id.into());
        self
    }

    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<ResponseLedger, ResponseImportError> {
        let file = std::fs::File::open(path)?;
        self.from_reader(file)
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<ResponseLedger, ResponseImportError> {
        let mut records = parser::parse_records(reader)?;
        records.retain(|record| match (&self.survey_id, &record.survey_id) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => true,
        });

        // Stable: rows sharing a timestamp, and rows without one, keep file order.
        records.sort_by_key(|record| (record.answered_at.is_none(), record.answered_at));

        let mut ledger = ResponseLedger::new();
        for record in records {
            let question_id = QuestionId(record.question_id);
            if !self.catalogue.contains(question_id) {
                return Err(ResponseImportError::UnknownQuestionId(question_id));
            }
            ledger.insert(question_id, RawAnswer(record.answer));
        }

        Ok(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    #[test]
    fn parse_datetime_supports_rfc3339_and_date_strings() {
        let rfc = parser::parse_datetime_for_tests("2024-03-11T08:30:00+01:00").expect("rfc");
        assert_eq!(
            rfc,
            NaiveDate::from_ymd_opt(2024, 3, 11)
                .unwrap()
                .and_hms_opt(7, 30, 0)
                .unwrap()
        );
        assert!(parser::parse_datetime_for_tests("2024-03-11").is_some());
        assert_eq!(
            parser::parse_datetime_for_tests("2024-03-11 08:30:00+01"),
            Some(rfc)
        );
        assert!(parser::parse_datetime_for_tests("yesterday").is_none());
    }

    #[test]
    fn newest_answer_wins_regardless_of_row_order() {
        let csv = "survey_id,question_id,answer,created_at\n\
bat-12,1,2,2024-03-11T09:05:00Z\n\
bat-12,1,5,2024-03-11T09:00:00Z\n\
bat-12,3,4,2024-03-11T09:01:00Z\n";
        let catalogue = QuestionCatalogue::bat12();
        let ledger = ResponseExportImporter::new(&catalogue)
            .from_reader(Cursor::new(csv))
            .expect("imports");

        assert_eq!(ledger.get(QuestionId(1)), Some(&RawAnswer::from("2")));
        let order: Vec<_> = ledger.question_ids().collect();
        assert_eq!(order, vec![QuestionId(1), QuestionId(3)]);
    }

    #[test]
    fn postgres_timestamps_order_rows_like_rfc3339() {
        let csv = "survey_id,question_id,answer,created_at\n\
bat-12,1,2,2024-05-06 09:00:00+00\n\
bat-12,1,5,2024-05-07T09:00:00Z\n\
bat-12,4,3,2024-05-06 08:59:59.250+00\n";
        let catalogue = QuestionCatalogue::bat12();
        let ledger = ResponseExportImporter::new(&catalogue)
            .from_reader(Cursor::new(csv))
            .expect("imports");

        assert_eq!(ledger.get(QuestionId(1)), Some(&RawAnswer::from("5")));
        let order: Vec<_> = ledger.question_ids().collect();
        assert_eq!(order, vec![QuestionId(4), QuestionId(1)]);
    }

    #[test]
    fn unreadable_timestamps_are_rejected() {
        let csv = "survey_id,question_id,answer,created_at\n\
bat-12,1,2,06/05/2024 09:00\n\
bat-12,1,5,2024-05-07T09:00:00Z\n";
        let catalogue = QuestionCatalogue::bat12();
        let error = ResponseExportImporter::new(&catalogue)
            .from_reader(Cursor::new(csv))
            .expect_err("unreadable timestamp");

        match error {
            ResponseImportError::InvalidTimestamp { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "06/05/2024 09:00");
            }
            other => panic!("expected invalid timestamp, got {other:?}"),
        }
    }

    #[test]
    fn rows_for_other_surveys_are_skipped() {
        let csv = "survey_id,question_id,answer,created_at\n\
bat-12,1,4,\n\
pulse,2,5,\n";
        let catalogue = QuestionCatalogue::bat12();
        let ledger = ResponseExportImporter::new(&catalogue)
            .for_survey("bat-12")
            .from_reader(Cursor::new(csv))
            .expect("imports");

        assert_eq!(ledger.len(), 1);
        assert!(ledger.contains(QuestionId(1)));
    }

    #[test]
    fn unknown_question_ids_are_rejected() {
        let csv = "question_id,answer\n40,3\n";
        let catalogue = QuestionCatalogue::bat12();
        let error = ResponseExportImporter::new(&catalogue)
            .from_reader(Cursor::new(csv))
            .expect_err("unknown id");

        match error {
            ResponseImportError::UnknownQuestionId(QuestionId(40)) => {}
            other => panic!("expected unknown question id, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let catalogue = QuestionCatalogue::bat12();
        let error = ResponseExportImporter::new(&catalogue)
            .from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            ResponseImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
