//! MSISDN helpers
//!
//! Subscriber numbers are accepted as an optional leading `+` followed by
//! 10 to 15 digits. No separators are allowed on the wire.

/// Minimum number of digits in an MSISDN
pub const MIN_DIGITS: usize = 10;

/// Maximum number of digits in an MSISDN (E.164 limit)
pub const MAX_DIGITS: usize = 15;

/// Check whether a string looks like a valid MSISDN
pub fn is_valid(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}
