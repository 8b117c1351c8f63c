//! Decision matrix command and query handlers.

mod answer_question;
mod discard_wizard;
mod evaluate_answers;
mod get_wizard;
mod navigate_wizard;
mod print_report;
mod purge_idle_wizards;
mod start_wizard;

pub use answer_question::{AnswerQuestionCommand, AnswerQuestionHandler};
pub use discard_wizard::{DiscardWizardCommand, DiscardWizardHandler};
pub use evaluate_answers::{EvaluateAnswersCommand, EvaluateAnswersHandler};
pub use get_wizard::{GetWizardHandler, GetWizardQuery};
pub use navigate_wizard::{GoBackCommand, GoBackHandler, RestartWizardCommand, RestartWizardHandler};
pub use print_report::{PrintReportHandler, PrintReportQuery, PrintedReport};
pub use purge_idle_wizards::PurgeIdleWizardsHandler;
pub use start_wizard::StartWizardHandler;

use crate::domain::foundation::{ErrorCode, WizardId};
use crate::domain::matrix::{Wizard, WizardError};
use crate::ports::WizardRepository;

/// Loads a wizard or reports it missing.
async fn load_wizard(
    repository: &dyn WizardRepository,
    wizard_id: WizardId,
) -> Result<Wizard, WizardError> {
    repository
        .find_by_id(&wizard_id)
        .await?
        .ok_or_else(|| WizardError::not_found(wizard_id))
}

/// Writes back a wizard that was loaded at `loaded_version` earlier in the
/// same request.
///
/// A wizard purged between load and store is reported as not found; one
/// changed by another request in between is a conflict.
async fn store_wizard(
    repository: &dyn WizardRepository,
    wizard: &Wizard,
    loaded_version: u64,
) -> Result<(), WizardError> {
    repository
        .update(wizard, loaded_version)
        .await
        .map_err(|err| match err.code {
            ErrorCode::WizardNotFound => WizardError::not_found(*wizard.id()),
            _ => err.into(),
        })
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;

    use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, WizardId};
    use crate::domain::matrix::Wizard;
    use crate::ports::WizardRepository;

    /// Repository whose every call fails, for error-path tests.
    pub struct FailingWizardRepository;

    fn failure() -> DomainError {
        DomainError::new(ErrorCode::StorageError, "Simulated storage failure")
    }

    #[async_trait]
    impl WizardRepository for FailingWizardRepository {
        async fn save(&self, _wizard: &Wizard) -> Result<(), DomainError> {
            Err(failure())
        }

        async fn update(&self, _wizard: &Wizard, _expected: u64) -> Result<(), DomainError> {
            Err(failure())
        }

        async fn find_by_id(&self, _id: &WizardId) -> Result<Option<Wizard>, DomainError> {
            Err(failure())
        }

        async fn delete(&self, _id: &WizardId) -> Result<bool, DomainError> {
            Err(failure())
        }

        async fn purge_idle(&self, _cutoff: Timestamp) -> Result<usize, DomainError> {
            Err(failure())
        }

        async fn count(&self) -> Result<usize, DomainError> {
            Err(failure())
        }
    }
}
