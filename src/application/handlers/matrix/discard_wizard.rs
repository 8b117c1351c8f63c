//! DiscardWizardHandler - Command handler for dropping a wizard early.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::WizardId;
use crate::domain::matrix::WizardError;
use crate::ports::WizardRepository;

/// Command to discard a wizard.
#[derive(Debug, Clone)]
pub struct DiscardWizardCommand {
    pub wizard_id: WizardId,
}

/// Handler for discarding wizards.
pub struct DiscardWizardHandler {
    repository: Arc<dyn WizardRepository>,
}

impl DiscardWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DiscardWizardCommand) -> Result<(), WizardError> {
        if !self.repository.delete(&cmd.wizard_id).await? {
            return Err(WizardError::not_found(cmd.wizard_id));
        }

        info!(wizard_id = %cmd.wizard_id, "wizard discarded");
        Ok(())
    }
}
