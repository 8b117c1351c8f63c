//! Back and restart commands.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::WizardId;
use crate::domain::matrix::{Wizard, WizardError};
use crate::ports::WizardRepository;

use super::{load_wizard, store_wizard};

/// Command to return to the previous question.
#[derive(Debug, Clone)]
pub struct GoBackCommand {
    pub wizard_id: WizardId,
}

/// Handler for the back transition.
pub struct GoBackHandler {
    repository: Arc<dyn WizardRepository>,
}

impl GoBackHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: GoBackCommand) -> Result<Wizard, WizardError> {
        let mut wizard = load_wizard(self.repository.as_ref(), cmd.wizard_id).await?;
        let loaded_version = wizard.version();
        let state = wizard.back()?;
        store_wizard(self.repository.as_ref(), &wizard, loaded_version).await?;

        debug!(wizard_id = %cmd.wizard_id, ?state, "wizard moved back");
        Ok(wizard)
    }
}

/// Command to clear all answers and start over.
#[derive(Debug, Clone)]
pub struct RestartWizardCommand {
    pub wizard_id: WizardId,
}

/// Handler for the restart transition.
pub struct RestartWizardHandler {
    repository: Arc<dyn WizardRepository>,
}

impl RestartWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RestartWizardCommand) -> Result<Wizard, WizardError> {
        let mut wizard = load_wizard(self.repository.as_ref(), cmd.wizard_id).await?;
        let loaded_version = wizard.version();
        wizard.restart();
        store_wizard(self.repository.as_ref(), &wizard, loaded_version).await?;

        debug!(wizard_id = %cmd.wizard_id, "wizard restarted");
        Ok(wizard)
    }
}
