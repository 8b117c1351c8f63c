//! In-memory wizard store.
//!
//! Wizards live only as long as the process. Idle wizards are dropped by
//! `purge_idle`, which the server calls on a fixed interval.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, WizardId};
use crate::domain::matrix::Wizard;
use crate::ports::WizardRepository;

/// Default upper bound on concurrently held wizards.
pub const DEFAULT_MAX_WIZARDS: usize = 10_000;

/// In-memory wizard repository for single-process deployments.
#[derive(Debug, Clone)]
pub struct InMemoryWizardRepository {
    wizards: Arc<RwLock<HashMap<WizardId, Wizard>>>,
    max_wizards: usize,
}

impl InMemoryWizardRepository {
    pub fn new(max_wizards: usize) -> Self {
        Self {
            wizards: Arc::new(RwLock::new(HashMap::new())),
            max_wizards,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_MAX_WIZARDS)
    }

    pub fn max_wizards(&self) -> usize {
        self.max_wizards
    }
}

impl Default for InMemoryWizardRepository {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[async_trait]
impl WizardRepository for InMemoryWizardRepository {
    async fn save(&self, wizard: &Wizard) -> Result<(), DomainError> {
        let mut wizards = self.wizards.write().await;
        if !wizards.contains_key(wizard.id()) && wizards.len() >= self.max_wizards {
            return Err(DomainError::new(
                ErrorCode::CapacityExceeded,
                format!("at most {} wizards can be held", self.max_wizards),
            )
            .with_detail("limit", self.max_wizards.to_string()));
        }
        wizards.insert(*wizard.id(), wizard.clone());
        Ok(())
    }

    async fn update(&self, wizard: &Wizard, expected_version: u64) -> Result<(), DomainError> {
        let mut wizards = self.wizards.write().await;
        match wizards.get_mut(wizard.id()) {
            Some(slot) if slot.version() != expected_version => Err(DomainError::new(
                ErrorCode::ConcurrentModification,
                format!("Wizard {} was changed by another request", wizard.id()),
            )
            .with_detail("expected_version", expected_version.to_string())
            .with_detail("actual_version", slot.version().to_string())),
            Some(slot) => {
                *slot = wizard.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::WizardNotFound,
                format!("Wizard not found: {}", wizard.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &WizardId) -> Result<Option<Wizard>, DomainError> {
        let wizards = self.wizards.read().await;
        Ok(wizards.get(id).cloned())
    }

    async fn delete(&self, id: &WizardId) -> Result<bool, DomainError> {
        let mut wizards = self.wizards.write().await;
        Ok(wizards.remove(id).is_some())
    }

    async fn purge_idle(&self, cutoff: Timestamp) -> Result<usize, DomainError> {
        let mut wizards = self.wizards.write().await;
        let before = wizards.len();
        wizards.retain(|_, wizard| !wizard.updated_at().is_before(&cutoff));
        Ok(before - wizards.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.wizards.read().await.len())
    }
}
