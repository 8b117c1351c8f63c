//! EvaluateAnswersHandler - Stateless one-shot evaluation.
//!
//! Runs the decision table over a full answer set without creating a wizard.

use tracing::debug;

use crate::domain::matrix::{AnswerSet, DecisionEngine, Recommendation};

/// Command carrying the answers to evaluate. Missing answers count as "no".
#[derive(Debug, Clone, Default)]
pub struct EvaluateAnswersCommand {
    pub answers: AnswerSet,
}

/// Handler for one-shot evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateAnswersHandler;

impl EvaluateAnswersHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: EvaluateAnswersCommand) -> Recommendation {
        debug!(answered = cmd.answers.len(), "evaluating answer set");
        DecisionEngine::evaluate(&cmd.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matrix::{QuestionId, RecommendationType, Rule};

    #[test]
    fn empty_answers_ask_for_more_documentation() {
        let rec = EvaluateAnswersHandler::new().handle(EvaluateAnswersCommand::default());
        assert_eq!(rec.kind, RecommendationType::DocumentMore);
        assert_eq!(rec.rule, Rule::InsufficientData);
    }

    #[test]
    fn safety_with_history_recommends_fba() {
        let answers = AnswerSet::new()
            .with(QuestionId::Documented, true)
            .with(QuestionId::SafetyConcern, true);
        let rec = EvaluateAnswersHandler::new().handle(EvaluateAnswersCommand { answers });
        assert_eq!(rec.kind, RecommendationType::FbaRecommended);
        assert_eq!(rec.rule, Rule::SafetyWithHistory);
    }
}
