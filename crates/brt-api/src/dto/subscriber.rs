//! Subscriber DTOs

use brt_core::models::Subscriber;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance adjustment request
///
/// The amount is added to the current balance; negative values debit.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceUpdateRequest {
    /// Amount to add
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

/// Subscriber after a balance adjustment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceUpdateResponse {
    pub msisdn: String,
    pub name: String,
    pub tariff_id: String,

    /// Balance after the adjustment
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub previous_balance: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl BalanceUpdateResponse {
    pub fn new(subscriber: Subscriber, previous_balance: Decimal, amount: Decimal) -> Self {
        Self {
            msisdn: subscriber.msisdn,
            name: subscriber.name,
            tariff_id: subscriber.tariff_id,
            balance: subscriber.balance,
            previous_balance,
            amount,
        }
    }
}
