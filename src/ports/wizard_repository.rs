//! Wizard repository port.
//!
//! Defines the contract for holding in-progress wizards between requests.
//! Wizards are session-scoped scratch state; implementations must not
//! persist them beyond the life of the process.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, WizardId};
use crate::domain::matrix::Wizard;

/// Repository port for wizard sessions.
#[async_trait]
pub trait WizardRepository: Send + Sync {
    /// Store a new wizard.
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` when the store is full
    async fn save(&self, wizard: &Wizard) -> Result<(), DomainError>;

    /// Replace an existing wizard that was loaded at `expected_version`.
    ///
    /// # Errors
    ///
    /// - `WizardNotFound` if the wizard doesn't exist
    /// - `ConcurrentModification` if the stored version is no longer
    ///   `expected_version` (optimistic locking)
    async fn update(&self, wizard: &Wizard, expected_version: u64) -> Result<(), DomainError>;

    /// Find a wizard by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &WizardId) -> Result<Option<Wizard>, DomainError>;

    /// Remove a wizard. Returns true if it existed.
    async fn delete(&self, id: &WizardId) -> Result<bool, DomainError>;

    /// Remove wizards idle since before `cutoff`. Returns how many were removed.
    async fn purge_idle(&self, cutoff: Timestamp) -> Result<usize, DomainError>;

    /// Number of wizards currently held.
    async fn count(&self) -> Result<usize, DomainError>;
}
