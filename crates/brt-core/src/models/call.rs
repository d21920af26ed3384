//! Call record model
//!
//! Raw call events ingested by the real-time billing subsystem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Call record
///
/// One call between two subscribers as reported by the switch. `id` and
/// `created_at` are assigned by the service on ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    /// Unique identifier
    pub id: String,

    /// Service type code (e.g. "01" for outgoing, "02" for incoming)
    pub service_type: String,

    /// Calling party
    pub caller_msisdn: String,

    /// Called party
    pub callee_msisdn: String,

    /// Call start timestamp
    pub start_time: DateTime<Utc>,

    /// Call end timestamp
    pub end_time: DateTime<Utc>,

    /// Ingestion timestamp
    pub created_at: DateTime<Utc>,
}

impl CallRecord {
    /// Generate a fresh record identifier
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Check if the given MSISDN took part in the call
    pub fn involves(&self, msisdn: &str) -> bool {
        self.caller_msisdn == msisdn || self.callee_msisdn == msisdn
    }
}

impl Default for CallRecord {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: Self::generate_id(),
            service_type: "01".to_string(),
            caller_msisdn: String::new(),
            callee_msisdn: String::new(),
            start_time: now,
            end_time: now,
            created_at: now,
        }
    }
}
