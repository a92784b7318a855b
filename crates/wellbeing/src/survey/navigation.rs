use serde::{Deserialize, Serialize};

use super::catalogue::QuestionCatalogue;
use super::domain::{QuestionId, RawAnswer};

/// Decides which question follows `current` once it has been answered.
///
/// Implementations are pure lookups over the catalogue; returning `None` ends the survey.
pub trait NextQuestion: Send + Sync {
    fn next(
        &self,
        current: QuestionId,
        answer: &RawAnswer,
        catalogue: &QuestionCatalogue,
    ) -> Option<QuestionId>;
}

/// Walks the catalogue in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearNavigation;

impl NextQuestion for LinearNavigation {
    fn next(
        &self,
        current: QuestionId,
        _answer: &RawAnswer,
        catalogue: &QuestionCatalogue,
    ) -> Option<QuestionId> {
        catalogue.after(current).map(|question| question.id)
    }
}

/// Jump taken when `from` is answered with `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRule {
    pub from: QuestionId,
    pub answer: String,
    /// `None` finishes the survey.
    pub to: Option<QuestionId>,
}

/// Rule table for surveys whose path depends on earlier answers.
///
/// The first rule matching the question and trimmed answer wins; questions without a
/// matching rule fall through to catalogue order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchingNavigation {
    rules: Vec<BranchRule>,
}

impl BranchingNavigation {
    pub fn new(rules: Vec<BranchRule>) -> Self {
        Self { rules }
    }

    pub fn with_rule(
        mut self,
        from: QuestionId,
        answer: impl Into<String>,
        to: Option<QuestionId>,
    ) -> Self {
        self.rules.push(BranchRule {
            from,
            answer: answer.into(),
            to,
        });
        self
    }

    pub fn rules(&self) -> &[BranchRule] {
        &self.rules
    }
}

impl NextQuestion for BranchingNavigation {
    fn next(
        &self,
        current: QuestionId,
        answer: &RawAnswer,
        catalogue: &QuestionCatalogue,
    ) -> Option<QuestionId> {
        let given = answer.as_str().trim();
        match self
            .rules
            .iter()
            .find(|rule| rule.from == current && rule.answer.trim() == given)
        {
            Some(rule) => rule.to,
            None => LinearNavigation.next(current, answer, catalogue),
        }
    }
}
