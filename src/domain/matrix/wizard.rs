//! Wizard - the linear seven-question flow.
//!
//! States are `Question(0)..=Question(6)` and `Results`. Answering the last
//! question freezes the answers, runs the engine once, and moves to
//! `Results`, which is left only by restarting.

use serde::{Deserialize, Serialize};

use super::answers::{Answer, AnswerSet};
use super::engine::DecisionEngine;
use super::errors::WizardError;
use super::question::{Question, QUESTIONS, QUESTION_COUNT};
use super::recommendation::Recommendation;
use crate::domain::foundation::{Percentage, StateMachine, Timestamp, WizardId};

const LAST_QUESTION: usize = QUESTION_COUNT - 1;

/// Position of a wizard in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum WizardState {
    /// Showing the question at this 0-based index.
    Question(usize),
    /// All questions answered; recommendation available.
    Results,
}

impl WizardState {
    pub const INITIAL: WizardState = WizardState::Question(0);

    pub fn is_results(&self) -> bool {
        matches!(self, WizardState::Results)
    }
}

impl StateMachine for WizardState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardState::*;
        match (self, target) {
            // restart
            (_, Question(0)) => true,
            (Question(i), Question(j)) => (*j == i + 1 && *j <= LAST_QUESTION) || *i == j + 1,
            (Question(i), Results) => *i == LAST_QUESTION,
            (Results, _) => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardState::*;
        match *self {
            Question(i) => {
                let mut targets = Vec::with_capacity(3);
                if i < LAST_QUESTION {
                    targets.push(Question(i + 1));
                } else {
                    targets.push(Results);
                }
                if i > 0 {
                    targets.push(Question(i - 1));
                }
                if i != 1 && i != 0 {
                    targets.push(Question(0));
                }
                targets
            }
            Results => vec![Question(0)],
        }
    }
}

/// A single run through the questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    id: WizardId,
    state: WizardState,
    answers: Vec<Answer>,
    recommendation: Option<Recommendation>,
    /// Bumped by every change; stores use it to detect lost updates.
    version: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Wizard {
    /// Starts a wizard at the first question.
    pub fn new(id: WizardId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            state: WizardState::INITIAL,
            answers: Vec::with_capacity(QUESTION_COUNT),
            recommendation: None,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &WizardId {
        &self.id
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Answers given so far, in presentation order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// The recommendation, once the wizard has reached `Results`.
    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_results()
    }

    /// The question currently shown, or `None` in `Results`.
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            WizardState::Question(i) => QUESTIONS.get(i),
            WizardState::Results => None,
        }
    }

    /// 1-based number of the current question; the total once complete.
    pub fn step_number(&self) -> usize {
        match self.state {
            WizardState::Question(i) => i + 1,
            WizardState::Results => QUESTION_COUNT,
        }
    }

    pub fn total_questions(&self) -> usize {
        QUESTION_COUNT
    }

    /// Progress through the flow; 100% once complete.
    pub fn progress(&self) -> Percentage {
        Percentage::from_ratio(self.step_number(), QUESTION_COUNT)
    }

    /// True when `back` would move to an earlier question.
    pub fn can_go_back(&self) -> bool {
        matches!(self.state, WizardState::Question(i) if i > 0)
    }

    /// Records an answer to the current question and advances.
    ///
    /// Answering the last question evaluates the full set and moves to
    /// `Results`.
    ///
    /// # Errors
    ///
    /// `WizardError::InvalidTransition` if the wizard is already complete.
    pub fn answer(&mut self, value: bool) -> Result<WizardState, WizardError> {
        let index = match self.state {
            WizardState::Question(i) => i,
            WizardState::Results => {
                return Err(WizardError::invalid_transition(
                    "cannot answer after results are shown",
                ))
            }
        };

        let target = if index < LAST_QUESTION {
            WizardState::Question(index + 1)
        } else {
            WizardState::Results
        };
        let next = self.state.transition_to(target)?;

        self.answers.push(Answer::new(QUESTIONS[index].id, value));
        if next.is_results() {
            let frozen: AnswerSet = self.answers.iter().collect();
            self.recommendation = Some(DecisionEngine::evaluate(&frozen));
        }
        self.state = next;
        self.touch();
        Ok(next)
    }

    /// Returns to the previous question, discarding its answer.
    ///
    /// At the first question this is a no-op.
    ///
    /// # Errors
    ///
    /// `WizardError::InvalidTransition` from `Results`; only restart leaves it.
    pub fn back(&mut self) -> Result<WizardState, WizardError> {
        match self.state {
            WizardState::Question(0) => Ok(self.state),
            WizardState::Question(i) => {
                let next = self.state.transition_to(WizardState::Question(i - 1))?;
                self.answers.pop();
                self.state = next;
                self.touch();
                Ok(next)
            }
            WizardState::Results => Err(WizardError::invalid_transition(
                "results can only be left by restarting",
            )),
        }
    }

    /// Clears all answers and returns to the first question.
    pub fn restart(&mut self) -> WizardState {
        self.answers.clear();
        self.recommendation = None;
        self.state = WizardState::INITIAL;
        self.touch();
        self.state
    }

    /// Answers every remaining question in order.
    ///
    /// # Errors
    ///
    /// Fails like [`Wizard::answer`] if the wizard completes early.
    pub fn answer_all(
        &mut self,
        values: impl IntoIterator<Item = bool>,
    ) -> Result<WizardState, WizardError> {
        let mut state = self.state;
        for value in values {
            state = self.answer(value)?;
        }
        Ok(state)
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Timestamp::now();
    }
}
