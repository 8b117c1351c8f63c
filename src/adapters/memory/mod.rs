//! In-memory adapters.

mod wizard_repository;

pub use wizard_repository::{InMemoryWizardRepository, DEFAULT_MAX_WIZARDS};
