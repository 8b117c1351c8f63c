//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum routes, DTOs and the middleware stack
//! - `memory` - in-process wizard storage

pub mod http;
pub mod memory;

pub use memory::InMemoryWizardRepository;
