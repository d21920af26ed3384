//! Call record DTOs

use super::common::PaginationParams;
use brt_core::{
    error::AppError,
    models::{msisdn, CallRecord},
    AppResult,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Call record submission
///
/// Every field is optional on the wire so that missing values surface as
/// a 400 with a field name instead of a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CallRecordRequest {
    /// Service type code, 1 to 4 digits
    #[validate(length(min = 1, max = 4))]
    pub service_type: Option<String>,

    /// Calling party
    #[validate(length(max = 16))]
    pub caller_msisdn: Option<String>,

    /// Called party
    #[validate(length(max = 16))]
    pub callee_msisdn: Option<String>,

    /// Call start
    pub start_time: Option<DateTime<Utc>>,

    /// Call end
    pub end_time: Option<DateTime<Utc>>,
}

impl CallRecordRequest {
    /// Check required fields and build a record with a fresh id
    pub fn into_call_record(self) -> AppResult<CallRecord> {
        let service_type = required(self.service_type, "serviceType")?;
        if !service_type.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidInput(format!(
                "serviceType must be numeric, got '{}'",
                service_type
            )));
        }

        let caller_msisdn = required_msisdn(self.caller_msisdn, "callerMsisdn")?;
        let callee_msisdn = required_msisdn(self.callee_msisdn, "calleeMsisdn")?;

        let start_time = self
            .start_time
            .ok_or_else(|| AppError::MissingField("startTime".to_string()))?;
        let end_time = self
            .end_time
            .ok_or_else(|| AppError::MissingField("endTime".to_string()))?;

        if end_time < start_time {
            return Err(AppError::InvalidInput(
                "endTime must not precede startTime".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(CallRecord {
            id: CallRecord::generate_id(),
            service_type,
            caller_msisdn,
            callee_msisdn,
            start_time,
            end_time,
            created_at: now,
        })
    }
}

/// Treat absent and blank strings the same way
pub(crate) fn required(value: Option<String>, field: &str) -> AppResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::MissingField(field.to_string()))
}

pub(crate) fn required_msisdn(value: Option<String>, field: &str) -> AppResult<String> {
    let value = required(value, field)?;
    if !msisdn::is_valid(&value) {
        return Err(AppError::InvalidInput(format!(
            "{} is not a valid MSISDN: '{}'",
            field, value
        )));
    }
    Ok(value)
}

/// Call listing query
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CallFilterParams {
    /// Pagination parameters
    #[serde(flatten)]
    #[validate(nested)]
    pub pagination: PaginationParams,

    /// Only calls where this number is caller or callee
    pub msisdn: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_request() -> CallRecordRequest {
        let end = Utc::now();
        CallRecordRequest {
            service_type: Some("01".to_string()),
            caller_msisdn: Some("89991112233".to_string()),
            callee_msisdn: Some("89992223344".to_string()),
            start_time: Some(end - Duration::minutes(5)),
            end_time: Some(end),
        }
    }

    #[test]
    fn test_valid_request_builds_record() {
        let request = valid_request();
        assert!(request.validate().is_ok());

        let record = request.clone().into_call_record().unwrap();
        assert_eq!(record.service_type, "01");
        assert_eq!(record.caller_msisdn, "89991112233");
        assert_eq!(Some(record.start_time), request.start_time);
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_invalid_caller_rejected() {
        let request = CallRecordRequest {
            caller_msisdn: Some("invalid".to_string()),
            ..valid_request()
        };
        let err = request.into_call_record().unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_callee_rejected() {
        let request = CallRecordRequest {
            callee_msisdn: Some(String::new()),
            ..valid_request()
        };
        let err = request.into_call_record().unwrap_err();
        assert!(matches!(err, AppError::MissingField(ref f) if f == "calleeMsisdn"));
    }

    #[test]
    fn test_service_type_rules() {
        let missing = CallRecordRequest {
            service_type: None,
            ..valid_request()
        };
        assert!(matches!(
            missing.into_call_record().unwrap_err(),
            AppError::MissingField(_)
        ));

        let too_long = CallRecordRequest {
            service_type: Some("12345".to_string()),
            ..valid_request()
        };
        assert!(too_long.validate().is_err());

        let letters = CallRecordRequest {
            service_type: Some("ab".to_string()),
            ..valid_request()
        };
        assert!(letters.into_call_record().is_err());
    }

    #[test]
    fn test_time_ordering() {
        let base = valid_request();
        let reversed = CallRecordRequest {
            start_time: base.end_time,
            end_time: base.start_time,
            ..base.clone()
        };
        assert!(matches!(
            reversed.into_call_record().unwrap_err(),
            AppError::InvalidInput(_)
        ));

        let no_start = CallRecordRequest {
            start_time: None,
            ..base
        };
        assert!(matches!(
            no_start.into_call_record().unwrap_err(),
            AppError::MissingField(_)
        ));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let request: CallRecordRequest = serde_json::from_str(
            r#"{"serviceType":"02","callerMsisdn":"89991112233","calleeMsisdn":"89992223344",
                "startTime":"2024-01-20T10:00:00Z","endTime":"2024-01-20T10:05:00Z"}"#,
        )
        .unwrap();
        let record = request.into_call_record().unwrap();
        assert_eq!((record.end_time - record.start_time).num_seconds(), 300);
        assert_eq!(record.service_type, "02");
    }
}
