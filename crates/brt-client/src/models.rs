//! Client side payloads
//!
//! Every field is optional so that tests can send nulls and partial
//! records the server is expected to reject.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Call record as sent and received by the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecordPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub service_type: Option<String>,
    pub caller_msisdn: Option<String>,
    pub callee_msisdn: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CallRecordPayload {
    /// Copy with the server assigned fields cleared, for equality checks
    pub fn without_server_fields(&self) -> Self {
        Self {
            id: None,
            created_at: None,
            ..self.clone()
        }
    }
}

/// CDR as sent and received by the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdrRecordPayload {
    pub id: Option<String>,
    pub caller: Option<String>,
    pub callee: Option<String>,
    pub duration: Option<i32>,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CdrRecordPayload {
    /// Copy with the server assigned fields cleared, for equality checks
    pub fn without_server_fields(&self) -> Self {
        Self {
            id: None,
            created_at: None,
            ..self.clone()
        }
    }
}
