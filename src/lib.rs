//! BRT billing service
//!
//! Wires the API routes, middleware and logging into a runnable server.
//! The binary in `main.rs` and the contract suites both start the service
//! through [`startup::run`].

pub mod startup;
pub mod telemetry;
