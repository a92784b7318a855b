use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::domain::{Dimension, Question, QuestionId};

/// Ordered, immutable question set for one survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalogue {
    survey_id: String,
    questions: Vec<Question>,
}

impl QuestionCatalogue {
    pub const BAT12_SURVEY_ID: &'static str = "bat-12";

    pub fn new(
        survey_id: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(CatalogueError::DuplicateQuestionId(question.id));
            }
        }

        Ok(Self {
            survey_id: survey_id.into(),
            questions,
        })
    }

    /// The twelve item Burnout Assessment Tool, three questions per dimension.
    pub fn bat12() -> Self {
        Self {
            survey_id: Self::BAT12_SURVEY_ID.to_string(),
            questions: bat12_questions(),
        }
    }

    pub fn survey_id(&self) -> &str {
        &self.survey_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn first(&self) -> Option<&Question> {
        self.questions.first()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|question| question.id == id)
    }

    /// Question following `id` in catalogue order.
    pub fn after(&self, id: QuestionId) -> Option<&Question> {
        self.position(id)
            .and_then(|index| self.questions.get(index + 1))
    }

    /// Dimensions that have at least one scored question, in declaration order.
    pub fn dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|dimension| {
                self.questions
                    .iter()
                    .any(|question| question.scored_dimension() == Some(*dimension))
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for QuestionCatalogue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawCatalogue {
            survey_id: String,
            questions: Vec<Question>,
        }

        let raw = RawCatalogue::deserialize(deserializer)?;
        Self::new(raw.survey_id, raw.questions).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    #[error("question {0} appears more than once in the catalogue")]
    DuplicateQuestionId(QuestionId),
}

fn bat12_questions() -> Vec<Question> {
    vec![
        Question::likert(1, Dimension::Exhaustion, "At work, I feel mentally exhausted."),
        Question::likert(
            2,
            Dimension::MentalDistance,
            "I struggle to find any enthusiasm for my work.",
        ),
        Question::likert(
            3,
            Dimension::Exhaustion,
            "After a day at work, I find it hard to recover my energy.",
        ),
        Question::likert(
            4,
            Dimension::Exhaustion,
            "At work, I feel physically exhausted.",
        ),
        Question::likert(
            5,
            Dimension::MentalDistance,
            "At work, I do not think much about what I am doing and I function on autopilot.",
        ),
        Question::likert(
            6,
            Dimension::MentalDistance,
            "I feel a strong aversion towards my job.",
        ),
        Question::likert(
            7,
            Dimension::Cognitive,
            "When I'm working, I have trouble concentrating.",
        ),
        Question::likert(
            8,
            Dimension::Cognitive,
            "At work I struggle to think clearly.",
        ),
        Question::likert(
            9,
            Dimension::Cognitive,
            "At work, I make mistakes because I have my mind on other things.",
        ),
        Question::likert(
            10,
            Dimension::Emotional,
            "At work, I feel unable to control my emotions.",
        ),
        Question::likert(
            11,
            Dimension::Emotional,
            "I do not recognize myself in the way I react emotionally at work.",
        ),
        Question::likert(
            12,
            Dimension::Emotional,
            "At work, I may overreact unintentionally.",
        ),
    ]
}
