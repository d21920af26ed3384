//! BRT billing API client
//!
//! HTTP harness used by the contract suites:
//!
//! - [`ApiClient`] wrapping each endpoint
//! - [`ClientConfig`] read from `BRT_API_BASE_URL` / `BRT_API_TIMEOUT_SECS`
//! - Lenient payload types that can carry invalid data
//! - Builders for valid and invalid records

pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;

pub use client::{ApiClient, ClientResponse};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use models::{CallRecordPayload, CdrRecordPayload};
