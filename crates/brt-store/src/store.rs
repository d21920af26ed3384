//! Store handle
//!
//! Bundles the repositories behind `Arc`s so every actix worker shares the
//! same state.

use brt_core::config::SeedConfig;
use brt_core::models::{CdrRecord, Subscriber};
use brt_core::traits::Repository;
use brt_core::AppResult;
use std::sync::Arc;
use tracing::info;

use crate::fixtures::{self, SeedFile};
use crate::repositories::{MemoryCallRepository, MemoryCdrRepository, MemorySubscriberRepository};

/// Shared in-memory store
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub calls: Arc<MemoryCallRepository>,
    pub cdrs: Arc<MemoryCdrRepository>,
    pub subscribers: Arc<MemorySubscriberRepository>,
}

/// Number of records loaded by a seeding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub subscribers: usize,
    pub cdrs: usize,
}

impl std::ops::AddAssign for SeedSummary {
    fn add_assign(&mut self, other: Self) {
        self.subscribers += other.subscribers;
        self.cdrs += other.cdrs;
    }
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded according to configuration
    pub async fn seeded(config: &SeedConfig) -> AppResult<Self> {
        let store = Self::new();
        let mut summary = SeedSummary::default();

        if config.fixtures {
            summary += store.load(fixtures::default_subscribers(), fixtures::default_cdrs()).await?;
        }

        if let Some(path) = &config.file {
            let seed = SeedFile::load(path)?;
            summary += store.load(seed.subscribers, seed.cdrs).await?;
            info!(path = %path, "Seed file applied");
        }

        info!(
            subscribers = summary.subscribers,
            cdrs = summary.cdrs,
            "Store seeded"
        );

        Ok(store)
    }

    /// Insert subscribers and CDRs, failing on duplicates
    pub async fn load(
        &self,
        subscribers: Vec<Subscriber>,
        cdrs: Vec<CdrRecord>,
    ) -> AppResult<SeedSummary> {
        let mut summary = SeedSummary::default();

        for subscriber in &subscribers {
            self.subscribers.create(subscriber).await?;
            summary.subscribers += 1;
        }

        for cdr in &cdrs {
            self.cdrs.create(cdr).await?;
            summary.cdrs += 1;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{TEST_CDR_ID, TEST_MSISDN};
    use brt_core::AppError;

    #[tokio::test]
    async fn test_seeded_with_fixtures() {
        let store = InMemoryStore::seeded(&SeedConfig::default()).await.unwrap();

        assert!(store.subscribers.find_by_id(TEST_MSISDN).await.unwrap().is_some());
        assert!(store.cdrs.find_by_id(TEST_CDR_ID).await.unwrap().is_some());
        assert_eq!(store.calls.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seeded_without_fixtures() {
        let config = SeedConfig {
            fixtures: false,
            file: None,
        };
        let store = InMemoryStore::seeded(&config).await.unwrap();

        assert_eq!(store.subscribers.count().await.unwrap(), 0);
        assert_eq!(store.cdrs.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_load_rejects_duplicates() {
        let store = InMemoryStore::new();
        let summary = store
            .load(fixtures::default_subscribers(), fixtures::default_cdrs())
            .await
            .unwrap();
        assert_eq!(summary, SeedSummary { subscribers: 1, cdrs: 1 });

        let err = store
            .load(fixtures::default_subscribers(), Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryStore::new();
        let clone = store.clone();
        store
            .load(fixtures::default_subscribers(), Vec::new())
            .await
            .unwrap();

        assert_eq!(clone.subscribers.count().await.unwrap(), 1);
    }
}
