//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `matrix` - Questions, the decision table and the wizard flow
pub mod foundation;
pub mod matrix;
