//! BRT Billing Storage Layer
//!
//! This crate provides the in-memory storage backing the reference BRT
//! service. It includes:
//!
//! - Repository implementations for call records, CDRs and subscribers
//! - A store handle bundling the repositories for sharing across workers
//! - Fixture seeding (built-in test data and JSON seed files)

pub mod fixtures;
pub mod repositories;
pub mod store;

pub use repositories::*;
pub use store::{InMemoryStore, SeedSummary};

// Re-export commonly used types
pub use brt_core::{AppError, AppResult};
