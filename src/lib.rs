//! FBA Decision Matrix
//!
//! Screening tool that walks an educator through seven yes/no questions and
//! recommends whether a Functional Behavior Assessment is warranted.

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
pub mod telemetry;
