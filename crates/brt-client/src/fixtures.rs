//! Test-data builders
//!
//! Identifiers match the records the service seeds at startup.

use crate::models::{CallRecordPayload, CdrRecordPayload};
use chrono::{Duration, Utc};

/// Seeded subscriber
pub const TEST_MSISDN: &str = "89991112233";

/// Counterparty used by the valid builders
pub const TEST_CALLEE_MSISDN: &str = "89992223344";

/// Seeded CDR
pub const TEST_CDR_ID: &str = "12345";

pub const NON_EXISTENT_MSISDN: &str = "00000000000";
pub const NON_EXISTENT_CDR_ID: &str = "99999";

/// A five minute outgoing call ending now
pub fn valid_call_record() -> CallRecordPayload {
    let end = Utc::now();
    CallRecordPayload {
        service_type: Some("01".to_string()),
        caller_msisdn: Some(TEST_MSISDN.to_string()),
        callee_msisdn: Some(TEST_CALLEE_MSISDN.to_string()),
        start_time: Some(end - Duration::minutes(5)),
        end_time: Some(end),
        ..Default::default()
    }
}

/// A call record the service must reject
pub fn invalid_call_record() -> CallRecordPayload {
    CallRecordPayload {
        service_type: None,
        caller_msisdn: Some("invalid".to_string()),
        callee_msisdn: Some(String::new()),
        start_time: None,
        end_time: Some(Utc::now()),
        ..Default::default()
    }
}

/// A two minute CDR carrying the seeded id
pub fn valid_cdr_record() -> CdrRecordPayload {
    CdrRecordPayload {
        id: Some(TEST_CDR_ID.to_string()),
        caller: Some(TEST_MSISDN.to_string()),
        callee: Some(TEST_CALLEE_MSISDN.to_string()),
        duration: Some(120),
        timestamp: Some(Utc::now()),
        created_at: None,
    }
}

/// A CDR the service must reject
pub fn invalid_cdr_record() -> CdrRecordPayload {
    CdrRecordPayload {
        id: None,
        caller: Some("invalid".to_string()),
        callee: Some(String::new()),
        duration: Some(-1),
        timestamp: None,
        created_at: None,
    }
}
