//! GetWizardHandler - Query handler for reading a wizard's current state.

use std::sync::Arc;

use crate::domain::foundation::WizardId;
use crate::domain::matrix::{Wizard, WizardError};
use crate::ports::WizardRepository;

use super::load_wizard;

/// Query to get a wizard by ID.
#[derive(Debug, Clone)]
pub struct GetWizardQuery {
    pub wizard_id: WizardId,
}

/// Handler for retrieving wizards.
pub struct GetWizardHandler {
    repository: Arc<dyn WizardRepository>,
}

impl GetWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetWizardQuery) -> Result<Wizard, WizardError> {
        load_wizard(self.repository.as_ref(), query.wizard_id).await
    }
}
