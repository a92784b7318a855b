use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::ResponseImportError;

#[derive(Debug)]
pub(crate) struct ResponseRecord {
    pub(crate) survey_id: Option<String>,
    pub(crate) question_id: u32,
    pub(crate) answer: String,
    pub(crate) answered_at: Option<NaiveDateTime>,
}

pub(crate) fn parse_records<R: Read>(
    reader: R,
) -> Result<Vec<ResponseRecord>, ResponseImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<ResponseRow>().enumerate() {
        let row = record?;
        // Empty cells were already mapped to `None`; anything left must parse.
        let answered_at = match row.created_at {
            Some(value) => Some(parse_datetime(&value).ok_or(
                ResponseImportError::InvalidTimestamp {
                    row: index + 1,
                    value,
                },
            )?),
            None => None,
        };

        records.push(ResponseRecord {
            survey_id: row.survey_id,
            question_id: row.question_id,
            answer: row.answer.unwrap_or_default(),
            answered_at,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    survey_id: Option<String>,
    question_id: u32,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    created_at: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    // Postgres `timestamptz` text output, e.g. `2024-05-06 09:00:00.123+00`.
    for format in ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Some(dt.naive_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
