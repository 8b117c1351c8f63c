//! HTTP adapter for the decision matrix.
//!
//! Exposes the question catalog, one-shot evaluation and server-held wizards
//! as JSON endpoints under `/api/fba-decision-matrix`.

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::{MatrixApiError, MatrixAppState};
pub use routes::{matrix_router, API_BASE};
