use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::catalogue::QuestionCatalogue;
use super::domain::{QuestionId, RawAnswer};
use super::ledger::ResponseLedger;
use super::navigation::{LinearNavigation, NextQuestion};

/// Lifecycle of a single survey attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AttemptState {
    InProgress { current: QuestionId },
    Complete,
    Submitted,
}

impl AttemptState {
    pub const fn label(self) -> &'static str {
        match self {
            AttemptState::InProgress { .. } => "in_progress",
            AttemptState::Complete => "complete",
            AttemptState::Submitted => "submitted",
        }
    }
}

/// One user's pass through a survey: answers, navigation trail, and progress.
pub struct SurveyAttempt {
    catalogue: Arc<QuestionCatalogue>,
    navigation: Arc<dyn NextQuestion>,
    ledger: ResponseLedger,
    visited: Vec<QuestionId>,
    trail: Vec<QuestionId>,
    state: AttemptState,
}

impl SurveyAttempt {
    pub fn new(catalogue: Arc<QuestionCatalogue>, navigation: Arc<dyn NextQuestion>) -> Self {
        let (state, visited) = match catalogue.first() {
            Some(question) => (
                AttemptState::InProgress {
                    current: question.id,
                },
                vec![question.id],
            ),
            None => (AttemptState::Complete, Vec::new()),
        };

        Self {
            catalogue,
            navigation,
            ledger: ResponseLedger::new(),
            trail: visited.clone(),
            visited,
            state,
        }
    }

    /// Attempt over `catalogue` in declaration order.
    pub fn linear(catalogue: Arc<QuestionCatalogue>) -> Self {
        Self::new(catalogue, Arc::new(LinearNavigation))
    }

    /// Rebuilds an attempt from a previously saved ledger by replaying navigation until the
    /// first unanswered question.
    pub fn resume(
        catalogue: Arc<QuestionCatalogue>,
        navigation: Arc<dyn NextQuestion>,
        ledger: ResponseLedger,
    ) -> Result<Self, AttemptError> {
        if let Some(unknown) = ledger.question_ids().find(|id| !catalogue.contains(*id)) {
            return Err(AttemptError::UnknownQuestionId(unknown));
        }

        let mut attempt = Self::new(catalogue, navigation);
        attempt.ledger = ledger;

        // A branching rule table may cycle; a path never needs more steps than questions.
        let mut steps = 0;
        while let AttemptState::InProgress { current } = attempt.state {
            if steps >= attempt.catalogue.len() {
                break;
            }
            let Some(answer) = attempt.ledger.get(current).cloned() else {
                break;
            };
            attempt.advance(current, &answer)?;
            steps += 1;
        }

        Ok(attempt)
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn current_question(&self) -> Option<QuestionId> {
        match self.state {
            AttemptState::InProgress { current } => Some(current),
            _ => None,
        }
    }

    pub fn ledger(&self) -> &ResponseLedger {
        &self.ledger
    }

    pub fn visited(&self) -> &[QuestionId] {
        &self.visited
    }

    pub fn catalogue(&self) -> &QuestionCatalogue {
        &self.catalogue
    }

    /// Stores an answer and returns the question to show next, or `None` once the survey has
    /// run out of questions.
    ///
    /// Answering the current question advances along the navigation strategy. Answering an
    /// earlier visited question edits it in place without moving.
    pub fn record_answer(
        &mut self,
        question_id: QuestionId,
        value: impl Into<RawAnswer>,
    ) -> Result<Option<QuestionId>, AttemptError> {
        if self.state == AttemptState::Submitted {
            return Err(AttemptError::AlreadySubmitted);
        }
        if !self.catalogue.contains(question_id) {
            return Err(AttemptError::UnknownQuestionId(question_id));
        }
        if !self.visited.contains(&question_id) {
            return Err(AttemptError::NotVisited(question_id));
        }

        let value = value.into();
        self.ledger.insert(question_id, value.clone());
        self.mark_visited(question_id);

        match self.state {
            AttemptState::InProgress { current } if current == question_id => {
                self.advance(current, &value)
            }
            _ => Ok(self.current_question()),
        }
    }

    /// Steps back along the navigation trail. Answers are kept.
    pub fn go_to_previous(&mut self) -> Result<QuestionId, AttemptError> {
        match self.state {
            AttemptState::Submitted => Err(AttemptError::AlreadySubmitted),
            AttemptState::Complete => {
                let last = *self.trail.last().ok_or(AttemptError::AtStart)?;
                self.state = AttemptState::InProgress { current: last };
                Ok(last)
            }
            AttemptState::InProgress { .. } => {
                if self.trail.len() <= 1 {
                    return Err(AttemptError::AtStart);
                }
                self.trail.pop();
                let previous = *self.trail.last().ok_or(AttemptError::AtStart)?;
                self.state = AttemptState::InProgress { current: previous };
                Ok(previous)
            }
        }
    }

    /// Share of catalogue questions shown so far, in percent. Revisits do not count twice.
    pub fn progress(&self) -> f64 {
        if self.catalogue.is_empty() {
            return 100.0;
        }
        let distinct: HashSet<_> = self.visited.iter().collect();
        let pct = 100.0 * distinct.len() as f64 / self.catalogue.len() as f64;
        pct.clamp(0.0, 100.0)
    }

    /// True when every catalogue question has an answer.
    pub fn is_complete(&self) -> bool {
        self.catalogue
            .questions()
            .iter()
            .all(|question| self.ledger.contains(question.id))
    }

    /// Closes the attempt and hands back the final ledger snapshot.
    pub fn submit(&mut self) -> Result<ResponseLedger, AttemptError> {
        match self.state {
            AttemptState::Complete => {
                self.state = AttemptState::Submitted;
                debug!(
                    survey = self.catalogue.survey_id(),
                    answers = self.ledger.len(),
                    "survey attempt submitted"
                );
                Ok(self.ledger.clone())
            }
            AttemptState::InProgress { current } => Err(AttemptError::NotFinished(current)),
            AttemptState::Submitted => Err(AttemptError::AlreadySubmitted),
        }
    }

    fn advance(
        &mut self,
        current: QuestionId,
        answer: &RawAnswer,
    ) -> Result<Option<QuestionId>, AttemptError> {
        match self.navigation.next(current, answer, &self.catalogue) {
            Some(next) => {
                if !self.catalogue.contains(next) {
                    return Err(AttemptError::UnknownQuestionId(next));
                }
                self.trail.push(next);
                self.mark_visited(next);
                self.state = AttemptState::InProgress { current: next };
                Ok(Some(next))
            }
            None => {
                self.state = AttemptState::Complete;
                Ok(None)
            }
        }
    }

    fn mark_visited(&mut self, question_id: QuestionId) {
        if self.visited.last() != Some(&question_id) {
            self.visited.push(question_id);
        }
    }
}

impl fmt::Debug for SurveyAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurveyAttempt")
            .field("survey_id", &self.catalogue.survey_id())
            .field("state", &self.state)
            .field("ledger", &self.ledger)
            .field("visited", &self.visited)
            .field("trail", &self.trail)
            .finish()
    }
}

/// Navigation errors raised by [`SurveyAttempt`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttemptError {
    #[error("question {0} is not part of this survey")]
    UnknownQuestionId(QuestionId),
    #[error("question {0} has not been reached yet")]
    NotVisited(QuestionId),
    #[error("already at the first question")]
    AtStart,
    #[error("survey has already been submitted")]
    AlreadySubmitted,
    #[error("survey is not finished, question {0} is still open")]
    NotFinished(QuestionId),
}
