use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a question within a survey catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Burnout sub-scale a scored question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Exhaustion,
    MentalDistance,
    Cognitive,
    Emotional,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Exhaustion,
        Dimension::MentalDistance,
        Dimension::Cognitive,
        Dimension::Emotional,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Dimension::Exhaustion => "exhaustion",
            Dimension::MentalDistance => "mental_distance",
            Dimension::Cognitive => "cognitive",
            Dimension::Emotional => "emotional",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Exhaustion => "Exhaustion",
            Dimension::MentalDistance => "Mental Distance",
            Dimension::Cognitive => "Cognitive Impairment",
            Dimension::Emotional => "Emotional Impairment",
        }
    }
}

/// Answer format expected by a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Five point frequency scale, `"1"` (never) to `"5"` (always).
    Likert,
    FreeText,
    SingleChoice { options: Vec<ChoiceOption> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: String,
    pub label: String,
}

/// Immutable question definition supplied by the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Dimension>,
    pub kind: QuestionKind,
    pub text: String,
}

impl Question {
    pub fn likert(id: u32, dimension: Dimension, text: impl Into<String>) -> Self {
        Self {
            id: QuestionId(id),
            dimension: Some(dimension),
            kind: QuestionKind::Likert,
            text: text.into(),
        }
    }

    pub fn free_text(id: u32, text: impl Into<String>) -> Self {
        Self {
            id: QuestionId(id),
            dimension: None,
            kind: QuestionKind::FreeText,
            text: text.into(),
        }
    }

    /// Dimension this question is scored under, if any.
    pub fn scored_dimension(&self) -> Option<Dimension> {
        match self.kind {
            QuestionKind::Likert => self.dimension,
            _ => None,
        }
    }
}

/// Raw answer value as captured by the form: a likert digit, free text, or an option id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAnswer(pub String);

impl RawAnswer {
    pub const LIKERT_MIN: u8 = 1;
    pub const LIKERT_MAX: u8 = 5;

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Likert value in `1..=5`, or `None` when the answer cannot be scored.
    pub fn likert_value(&self) -> Option<u8> {
        self.0
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|value| (Self::LIKERT_MIN..=Self::LIKERT_MAX).contains(value))
    }
}

impl From<&str> for RawAnswer {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RawAnswer {
    fn from(value: String) -> Self {
        Self(value)
    }
}
