//! HTTP adapters - REST API implementations.

pub mod app;
pub mod matrix;

// Re-export key types for convenience
pub use app::build_app;
pub use matrix::{matrix_router, MatrixAppState};
