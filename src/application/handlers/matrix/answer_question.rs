//! AnswerQuestionHandler - Command handler for answering the current question.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::WizardId;
use crate::domain::matrix::{QuestionId, Wizard, WizardError};
use crate::ports::WizardRepository;

use super::{load_wizard, store_wizard};

/// Command to answer the wizard's current question.
#[derive(Debug, Clone)]
pub struct AnswerQuestionCommand {
    pub wizard_id: WizardId,
    pub value: bool,
    /// When set, the answer is only accepted if this is the current question.
    pub expected_question: Option<QuestionId>,
}

/// Handler for answering questions.
pub struct AnswerQuestionHandler {
    repository: Arc<dyn WizardRepository>,
}

impl AnswerQuestionHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AnswerQuestionCommand) -> Result<Wizard, WizardError> {
        let mut wizard = load_wizard(self.repository.as_ref(), cmd.wizard_id).await?;
        let loaded_version = wizard.version();

        if let Some(expected) = cmd.expected_question {
            let current = wizard.current_question().map(|q| q.id);
            if current != Some(expected) {
                return Err(WizardError::invalid_transition(format!(
                    "question '{}' is not the current question",
                    expected
                )));
            }
        }

        let state = wizard.answer(cmd.value)?;
        store_wizard(self.repository.as_ref(), &wizard, loaded_version).await?;

        debug!(wizard_id = %cmd.wizard_id, ?state, "question answered");
        if let Some(rec) = wizard.recommendation() {
            info!(
                wizard_id = %cmd.wizard_id,
                recommendation = %rec.kind,
                rule = rec.rule.number(),
                "wizard completed"
            );
        }
        Ok(wizard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWizardRepository;
    use crate::domain::foundation::{DomainError, Timestamp};
    use crate::domain::matrix::{RecommendationType, WizardState};

    async fn setup() -> (AnswerQuestionHandler, Arc<InMemoryWizardRepository>, WizardId) {
        let repo = Arc::new(InMemoryWizardRepository::with_defaults());
        let wizard = Wizard::new(WizardId::new());
        repo.save(&wizard).await.unwrap();
        (AnswerQuestionHandler::new(repo.clone()), repo, *wizard.id())
    }

    fn cmd(wizard_id: WizardId, value: bool) -> AnswerQuestionCommand {
        AnswerQuestionCommand {
            wizard_id,
            value,
            expected_question: None,
        }
    }

    #[tokio::test]
    async fn answer_advances_and_persists() {
        let (handler, repo, id) = setup().await;

        let wizard = handler.handle(cmd(id, true)).await.unwrap();
        assert_eq!(wizard.state(), WizardState::Question(1));

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.answers().len(), 1);
    }

    #[tokio::test]
    async fn seventh_answer_completes_wizard() {
        let (handler, _repo, id) = setup().await;
        let mut wizard = None;
        for _ in 0..7 {
            wizard = Some(handler.handle(cmd(id, false)).await.unwrap());
        }
        let wizard = wizard.unwrap();
        assert!(wizard.is_complete());
        assert_eq!(
            wizard.recommendation().unwrap().kind,
            RecommendationType::DocumentMore
        );
    }

    #[tokio::test]
    async fn answering_after_results_is_rejected() {
        let (handler, _repo, id) = setup().await;
        for _ in 0..7 {
            handler.handle(cmd(id, true)).await.unwrap();
        }
        let err = handler.handle(cmd(id, true)).await.unwrap_err();
        assert!(matches!(err, WizardError::InvalidTransition(_)));
    }

    #[tokio::test]
    async fn stale_question_guard_rejects_answer() {
        let (handler, repo, id) = setup().await;
        handler.handle(cmd(id, true)).await.unwrap();

        let err = handler
            .handle(AnswerQuestionCommand {
                wizard_id: id,
                value: true,
                expected_question: Some(QuestionId::Documented),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, WizardError::InvalidTransition(_)));

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.answers().len(), 1);
    }

    #[tokio::test]
    async fn matching_question_guard_accepts_answer() {
        let (handler, _repo, id) = setup().await;
        let wizard = handler
            .handle(AnswerQuestionCommand {
                wizard_id: id,
                value: true,
                expected_question: Some(QuestionId::Documented),
            })
            .await
            .unwrap();
        assert_eq!(wizard.answers().len(), 1);
    }

    /// Lets another answer land between this request's load and store.
    struct InterleavingRepository {
        inner: InMemoryWizardRepository,
    }

    #[async_trait::async_trait]
    impl WizardRepository for InterleavingRepository {
        async fn save(&self, wizard: &Wizard) -> Result<(), DomainError> {
            self.inner.save(wizard).await
        }

        async fn update(&self, wizard: &Wizard, expected: u64) -> Result<(), DomainError> {
            self.inner.update(wizard, expected).await
        }

        async fn find_by_id(&self, id: &WizardId) -> Result<Option<Wizard>, DomainError> {
            let found = self.inner.find_by_id(id).await?;
            if let Some(wizard) = &found {
                let mut other = wizard.clone();
                other.answer(false).unwrap();
                self.inner.update(&other, wizard.version()).await?;
            }
            Ok(found)
        }

        async fn delete(&self, id: &WizardId) -> Result<bool, DomainError> {
            self.inner.delete(id).await
        }

        async fn purge_idle(&self, cutoff: Timestamp) -> Result<usize, DomainError> {
            self.inner.purge_idle(cutoff).await
        }

        async fn count(&self) -> Result<usize, DomainError> {
            self.inner.count().await
        }
    }

    #[tokio::test]
    async fn concurrent_answer_is_not_silently_lost() {
        let repo = Arc::new(InterleavingRepository {
            inner: InMemoryWizardRepository::with_defaults(),
        });
        let wizard = Wizard::new(WizardId::new());
        repo.save(&wizard).await.unwrap();
        let handler = AnswerQuestionHandler::new(repo.clone());

        let err = handler.handle(cmd(*wizard.id(), true)).await.unwrap_err();
        assert!(matches!(err, WizardError::Conflict(_)));

        let stored = repo.inner.find_by_id(wizard.id()).await.unwrap().unwrap();
        assert_eq!(stored.answers().len(), 1);
        assert!(!stored.answers()[0].value);
    }

    #[tokio::test]
    async fn unknown_wizard_is_not_found() {
        let (handler, _repo, _id) = setup().await;
        let missing = WizardId::new();
        let err = handler.handle(cmd(missing, true)).await.unwrap_err();
        assert_eq!(err, WizardError::NotFound(missing));
    }
}
