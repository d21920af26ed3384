//! CDR-related DTOs

use super::call::{required, required_msisdn};
use super::common::PaginationParams;
use brt_core::{error::AppError, models::CdrRecord, AppResult};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// CDR create or replace body
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CdrRecordRequest {
    /// Client supplied id, ignored on create and checked against the path on replace
    pub id: Option<String>,

    /// Caller number
    pub caller: Option<String>,

    /// Called number
    pub callee: Option<String>,

    /// Duration in seconds
    #[validate(range(min = 0))]
    pub duration: Option<i32>,

    /// Call timestamp
    pub timestamp: Option<DateTime<Utc>>,
}

impl CdrRecordRequest {
    /// Check required fields and build a record under the given id
    pub fn into_cdr_record(self, id: String) -> AppResult<CdrRecord> {
        let caller = required_msisdn(self.caller, "caller")?;
        let callee = required(self.callee, "callee")?;
        if !brt_core::models::msisdn::is_valid(&callee) {
            return Err(AppError::InvalidInput(format!(
                "callee is not a valid MSISDN: '{}'",
                callee
            )));
        }

        let duration = self
            .duration
            .ok_or_else(|| AppError::MissingField("duration".to_string()))?;
        if duration < 0 {
            return Err(AppError::InvalidInput(format!(
                "duration must not be negative, got {}",
                duration
            )));
        }

        let timestamp = self
            .timestamp
            .ok_or_else(|| AppError::MissingField("timestamp".to_string()))?;

        Ok(CdrRecord {
            id,
            caller,
            callee,
            duration,
            timestamp,
            created_at: Utc::now(),
        })
    }
}

/// CDR filter parameters for list queries
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CdrFilterParams {
    /// Pagination parameters
    #[serde(flatten)]
    #[validate(nested)]
    pub pagination: PaginationParams,

    /// Filter by caller number
    pub caller: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CdrRecordRequest {
        CdrRecordRequest {
            id: Some("12345".to_string()),
            caller: Some("89991112233".to_string()),
            callee: Some("89992223344".to_string()),
            duration: Some(60),
            timestamp: Some(Utc::now()),
        }
    }

    #[test]
    fn test_into_cdr_record_uses_given_id() {
        let record = valid_request().into_cdr_record("abc".to_string()).unwrap();
        assert_eq!(record.id, "abc");
        assert_eq!(record.duration, 60);
    }

    #[test]
    fn test_negative_duration() {
        let request = CdrRecordRequest {
            duration: Some(-5),
            ..valid_request()
        };
        assert!(request.validate().is_err());
        assert!(matches!(
            request.into_cdr_record("1".to_string()).unwrap_err(),
            AppError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_missing_fields() {
        let no_timestamp = CdrRecordRequest {
            timestamp: None,
            ..valid_request()
        };
        assert!(matches!(
            no_timestamp.into_cdr_record("1".to_string()).unwrap_err(),
            AppError::MissingField(ref f) if f == "timestamp"
        ));

        let no_duration = CdrRecordRequest {
            duration: None,
            ..valid_request()
        };
        assert!(no_duration.into_cdr_record("1".to_string()).is_err());

        let empty_callee = CdrRecordRequest {
            callee: Some(String::new()),
            ..valid_request()
        };
        assert!(empty_callee.into_cdr_record("1".to_string()).is_err());
    }

    #[test]
    fn test_invalid_caller() {
        let request = CdrRecordRequest {
            caller: Some("invalid".to_string()),
            ..valid_request()
        };
        assert!(matches!(
            request.into_cdr_record("1".to_string()).unwrap_err(),
            AppError::InvalidInput(_)
        ));
    }
}
