//! StartWizardHandler - Command handler for beginning a new wizard.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::WizardId;
use crate::domain::matrix::{Wizard, WizardError};
use crate::ports::WizardRepository;

/// Handler for starting wizards.
pub struct StartWizardHandler {
    repository: Arc<dyn WizardRepository>,
}

impl StartWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Wizard, WizardError> {
        let wizard = Wizard::new(WizardId::new());
        self.repository.save(&wizard).await?;

        info!(wizard_id = %wizard.id(), "wizard started");
        Ok(wizard)
    }
}
