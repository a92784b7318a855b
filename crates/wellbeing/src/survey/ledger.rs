use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::domain::{QuestionId, RawAnswer};

/// Single answer held by the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub question_id: QuestionId,
    pub value: RawAnswer,
}

/// Ordered record of answers collected during one survey attempt.
///
/// Holds at most one entry per question. Writing an answer for a question that already has
/// one replaces the value and keeps the entry's original position, so iteration order is the
/// order in which questions were first answered.
///
/// Serializes as a JSON object keyed by question id, e.g. `{"1":"5","3":"4"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseLedger {
    entries: Vec<LedgerEntry>,
}

impl ResponseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a ledger with `value` recorded for `question_id`.
    #[must_use]
    pub fn with_answer(mut self, question_id: QuestionId, value: impl Into<RawAnswer>) -> Self {
        self.insert(question_id, value.into());
        self
    }

    pub(crate) fn insert(&mut self, question_id: QuestionId, value: RawAnswer) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.question_id == question_id)
        {
            Some(entry) => entry.value = value,
            None => self.entries.push(LedgerEntry { question_id, value }),
        }
    }

    pub fn get(&self, question_id: QuestionId) -> Option<&RawAnswer> {
        self.entries
            .iter()
            .find(|entry| entry.question_id == question_id)
            .map(|entry| &entry.value)
    }

    pub fn contains(&self, question_id: QuestionId) -> bool {
        self.get(question_id).is_some()
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.entries.iter().map(|entry| entry.question_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<Q, V> FromIterator<(Q, V)> for ResponseLedger
where
    Q: Into<QuestionId>,
    V: Into<RawAnswer>,
{
    fn from_iter<T: IntoIterator<Item = (Q, V)>>(iter: T) -> Self {
        let mut ledger = Self::new();
        for (question_id, value) in iter {
            ledger.insert(question_id.into(), value.into());
        }
        ledger
    }
}

impl Serialize for ResponseLedger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(
            self.entries
                .iter()
                .map(|entry| (&entry.question_id, &entry.value)),
        )
    }
}

impl<'de> Deserialize<'de> for ResponseLedger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LedgerVisitor;

        impl<'de> Visitor<'de> for LedgerVisitor {
            type Value = ResponseLedger;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of question ids to answer strings")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut ledger = ResponseLedger::new();
                while let Some((question_id, value)) =
                    access.next_entry::<QuestionId, RawAnswer>()?
                {
                    ledger.insert(question_id, value);
                }
                Ok(ledger)
            }
        }

        deserializer.deserialize_map(LedgerVisitor)
    }
}
