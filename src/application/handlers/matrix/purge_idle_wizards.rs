//! PurgeIdleWizardsHandler - Drops wizards untouched for longer than the TTL.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::Timestamp;
use crate::domain::matrix::WizardError;
use crate::ports::WizardRepository;

/// Handler for the periodic idle sweep.
pub struct PurgeIdleWizardsHandler {
    repository: Arc<dyn WizardRepository>,
    ttl_secs: u64,
}

impl PurgeIdleWizardsHandler {
    pub fn new(repository: Arc<dyn WizardRepository>, ttl_secs: u64) -> Self {
        Self {
            repository,
            ttl_secs,
        }
    }

    /// Removes wizards last updated more than `ttl_secs` before `now`.
    pub async fn handle(&self, now: Timestamp) -> Result<usize, WizardError> {
        let cutoff = now.minus_secs(self.ttl_secs);
        let purged = self.repository.purge_idle(cutoff).await?;

        if purged > 0 {
            info!(purged, ttl_secs = self.ttl_secs, "purged idle wizards");
        } else {
            debug!("no idle wizards to purge");
        }
        Ok(purged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWizardRepository;
    use crate::application::handlers::matrix::test_support::FailingWizardRepository;
    use crate::domain::foundation::WizardId;
    use crate::domain::matrix::Wizard;

    #[tokio::test]
    async fn fresh_wizards_survive() {
        let repo = Arc::new(InMemoryWizardRepository::with_defaults());
        repo.save(&Wizard::new(WizardId::new())).await.unwrap();

        let handler = PurgeIdleWizardsHandler::new(repo.clone(), 3600);
        assert_eq!(handler.handle(Timestamp::now()).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn wizards_older_than_ttl_are_removed() {
        let repo = Arc::new(InMemoryWizardRepository::with_defaults());
        repo.save(&Wizard::new(WizardId::new())).await.unwrap();
        repo.save(&Wizard::new(WizardId::new())).await.unwrap();

        let handler = PurgeIdleWizardsHandler::new(repo.clone(), 60);
        let two_hours_later = Timestamp::now().plus_secs(7200);
        assert_eq!(handler.handle(two_hours_later).await.unwrap(), 2);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let handler = PurgeIdleWizardsHandler::new(Arc::new(FailingWizardRepository), 60);
        assert!(handler.handle(Timestamp::now()).await.is_err());
    }
}
