//! CDR (Call Detail Record) model
//!
//! Represents completed call records for billing and reporting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// CDR (Call Detail Record)
///
/// Summary of a finished call. Identifiers of seeded records are short
/// numeric strings, records created through the API get a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdrRecord {
    /// Unique identifier
    pub id: String,

    /// Caller number (ANI)
    pub caller: String,

    /// Called number
    pub callee: String,

    /// Call duration in seconds
    pub duration: i32,

    /// Call timestamp
    pub timestamp: DateTime<Utc>,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl CdrRecord {
    /// Generate a fresh record identifier
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Replace the caller supplied fields, keeping identity and creation time
    pub fn replace_with(&mut self, other: CdrRecord) {
        self.caller = other.caller;
        self.callee = other.callee;
        self.duration = other.duration;
        self.timestamp = other.timestamp;
    }
}

impl Default for CdrRecord {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: Self::generate_id(),
            caller: String::new(),
            callee: String::new(),
            duration: 0,
            timestamp: now,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_with_keeps_identity() {
        let mut cdr = CdrRecord {
            id: "12345".to_string(),
            caller: "89991112233".to_string(),
            duration: 60,
            ..Default::default()
        };
        let created_at = cdr.created_at;

        cdr.replace_with(CdrRecord {
            id: "other".to_string(),
            caller: "89995556677".to_string(),
            duration: 300,
            ..Default::default()
        });

        assert_eq!(cdr.id, "12345");
        assert_eq!(cdr.created_at, created_at);
        assert_eq!(cdr.caller, "89995556677");
        assert_eq!(cdr.duration, 300);
    }
}
