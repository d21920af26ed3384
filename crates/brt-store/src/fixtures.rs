//! Fixture data
//!
//! The contract suites expect one subscriber and one CDR to exist before
//! they run. Additional records can be loaded from a JSON seed file:
//!
//! ```json
//! {
//!   "subscribers": [
//!     { "msisdn": "89995556677", "name": "Second", "balance": 10.5, "tariffId": "12" }
//!   ],
//!   "cdrs": [
//!     { "id": "777", "caller": "89995556677", "callee": "89991112233",
//!       "duration": 42, "timestamp": "2024-01-20T10:00:00Z" }
//!   ]
//! }
//! ```

use brt_core::models::{CdrRecord, Subscriber};
use brt_core::{AppError, AppResult};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// MSISDN of the seeded test subscriber
pub const TEST_MSISDN: &str = "89991112233";

/// Counterparty used by the seeded CDR
pub const TEST_CALLEE_MSISDN: &str = "89992223344";

/// Id of the seeded CDR
pub const TEST_CDR_ID: &str = "12345";

/// Built-in subscribers
pub fn default_subscribers() -> Vec<Subscriber> {
    vec![Subscriber {
        msisdn: TEST_MSISDN.to_string(),
        name: "Test Subscriber".to_string(),
        balance: Decimal::new(10000, 2),
        tariff_id: "11".to_string(),
    }]
}

/// Built-in CDRs
pub fn default_cdrs() -> Vec<CdrRecord> {
    let now = Utc::now();
    vec![CdrRecord {
        id: TEST_CDR_ID.to_string(),
        caller: TEST_MSISDN.to_string(),
        callee: TEST_CALLEE_MSISDN.to_string(),
        duration: 60,
        timestamp: now - Duration::hours(1),
        created_at: now,
    }]
}

/// Contents of a JSON seed file
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub subscribers: Vec<Subscriber>,
    #[serde(default)]
    pub cdrs: Vec<CdrRecord>,
}

impl SeedFile {
    /// Read and parse a seed file
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read seed file {}: {}", path.display(), e))
        })?;
        Self::parse(&raw)
    }

    /// Parse seed file contents
    pub fn parse(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
