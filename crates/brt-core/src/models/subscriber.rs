//! Subscriber model
//!
//! Subscribers are pre-provisioned; the API only reads them and tops up
//! their balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subscriber entity
///
/// Keyed by MSISDN. The balance may go negative through debit
/// adjustments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    /// Subscriber number
    pub msisdn: String,

    /// Display name
    pub name: String,

    /// Current balance
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,

    /// Tariff plan identifier
    pub tariff_id: String,
}

impl Subscriber {
    /// Balance after adding `amount`
    ///
    /// Returns `None` on decimal overflow.
    pub fn topped_up(&self, amount: Decimal) -> Option<Decimal> {
        self.balance.checked_add(amount)
    }

}
