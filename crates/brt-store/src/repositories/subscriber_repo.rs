//! Subscriber repository implementation
//!
//! Subscribers are keyed by MSISDN. Balance updates happen under the write
//! lock so concurrent top-ups are never lost.

use brt_core::{
    models::Subscriber,
    traits::{Repository, SubscriberRepository},
    AppError, AppResult,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{debug, error, instrument};

use super::paginate;

/// In-memory implementation of SubscriberRepository
#[derive(Debug, Default)]
pub struct MemorySubscriberRepository {
    subscribers: RwLock<BTreeMap<String, Subscriber>>,
}

impl MemorySubscriberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Subscriber> for MemorySubscriberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, msisdn: &str) -> AppResult<Option<Subscriber>> {
        debug!("Finding subscriber by msisdn: {}", msisdn);
        Ok(self.subscribers.read().get(msisdn).cloned())
    }

    async fn find_all(&self, limit: i64, offset: i64) -> AppResult<Vec<Subscriber>> {
        let all: Vec<Subscriber> = self.subscribers.read().values().cloned().collect();
        Ok(paginate(all, limit, offset))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.subscribers.read().len() as i64)
    }

    #[instrument(skip(self, entity), fields(msisdn = %entity.msisdn))]
    async fn create(&self, entity: &Subscriber) -> AppResult<Subscriber> {
        let mut subscribers = self.subscribers.write();

        if subscribers.contains_key(&entity.msisdn) {
            return Err(AppError::Conflict(format!(
                "Subscriber {} already exists",
                entity.msisdn
            )));
        }

        subscribers.insert(entity.msisdn.clone(), entity.clone());
        Ok(entity.clone())
    }

    #[instrument(skip(self, entity), fields(msisdn = %entity.msisdn))]
    async fn update(&self, entity: &Subscriber) -> AppResult<Subscriber> {
        let mut subscribers = self.subscribers.write();

        let existing = subscribers
            .get_mut(&entity.msisdn)
            .ok_or_else(|| AppError::SubscriberNotFound(entity.msisdn.clone()))?;
        *existing = entity.clone();

        Ok(existing.clone())
    }

    async fn delete(&self, msisdn: &str) -> AppResult<bool> {
        Ok(self.subscribers.write().remove(msisdn).is_some())
    }
}

#[async_trait]
impl SubscriberRepository for MemorySubscriberRepository {
    #[instrument(skip(self))]
    async fn update_balance(
        &self,
        msisdn: &str,
        amount: Decimal,
    ) -> AppResult<(Decimal, Subscriber)> {
        let mut subscribers = self.subscribers.write();

        let subscriber = subscribers
            .get_mut(msisdn)
            .ok_or_else(|| AppError::SubscriberNotFound(msisdn.to_string()))?;

        let new_balance = subscriber.topped_up(amount).ok_or_else(|| {
            error!(balance = %subscriber.balance, amount = %amount, "Balance overflow");
            AppError::InvalidInput(format!("Amount {} overflows the balance", amount))
        })?;

        let previous_balance = std::mem::replace(&mut subscriber.balance, new_balance);
        debug!(new_balance = %new_balance, "Balance updated");

        Ok((previous_balance, subscriber.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn subscriber(msisdn: &str, balance: Decimal) -> Subscriber {
        Subscriber {
            msisdn: msisdn.to_string(),
            name: "Test Subscriber".to_string(),
            balance,
            tariff_id: "11".to_string(),
        }
    }

    #[tokio::test]
    async fn test_update_balance_is_additive() {
        let repo = MemorySubscriberRepository::new();
        repo.create(&subscriber("89991112233", dec!(100.00)))
            .await
            .unwrap();

        let (previous, updated) = repo
            .update_balance("89991112233", dec!(50.00))
            .await
            .unwrap();
        assert_eq!(previous, dec!(100.00));
        assert_eq!(updated.balance, dec!(150.00));
        assert_eq!(updated.name, "Test Subscriber");

        let (previous, updated) = repo
            .update_balance("89991112233", dec!(-0.01))
            .await
            .unwrap();
        assert_eq!(previous, dec!(150.00));
        assert_eq!(updated.balance, dec!(149.99));

        let stored = repo.find_by_id("89991112233").await.unwrap().unwrap();
        assert_eq!(stored.balance, dec!(149.99));
    }

    #[tokio::test]
    async fn test_update_balance_unknown_subscriber() {
        let repo = MemorySubscriberRepository::new();
        let err = repo
            .update_balance("00000000000", dec!(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SubscriberNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_balance_overflow() {
        let repo = MemorySubscriberRepository::new();
        repo.create(&subscriber("89991112233", Decimal::MAX))
            .await
            .unwrap();

        let err = repo
            .update_balance("89991112233", dec!(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let stored = repo.find_by_id("89991112233").await.unwrap().unwrap();
        assert_eq!(stored.balance, Decimal::MAX);
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_not_lost() {
        let repo = std::sync::Arc::new(MemorySubscriberRepository::new());
        repo.create(&subscriber("89991112233", dec!(0))).await.unwrap();

        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.update_balance("89991112233", dec!(0.01)).await.unwrap()
                })
            })
            .collect();

        let mut previous: Vec<Decimal> = Vec::new();
        for task in tasks {
            let (before, after) = task.await.unwrap();
            assert_eq!(after.balance - before, dec!(0.01));
            previous.push(before);
        }
        previous.sort();
        previous.dedup();
        assert_eq!(previous.len(), 50);

        let stored = repo.find_by_id("89991112233").await.unwrap().unwrap();
        assert_eq!(stored.balance, dec!(0.50));
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let repo = MemorySubscriberRepository::new();
        repo.create(&subscriber("89991112233", dec!(0))).await.unwrap();
        let err = repo
            .create(&subscriber("89991112233", dec!(0)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
