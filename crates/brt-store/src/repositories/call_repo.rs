//! Call record repository implementation

use brt_core::{
    models::CallRecord,
    traits::{CallRecordRepository, Repository},
    AppError, AppResult,
};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use super::paginate;

/// In-memory implementation of CallRecordRepository
#[derive(Debug, Default)]
pub struct MemoryCallRepository {
    records: RwLock<HashMap<String, CallRecord>>,
}

impl MemoryCallRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn ordered(&self, msisdn: Option<&str>) -> Vec<CallRecord> {
        let mut records: Vec<CallRecord> = self
            .records
            .read()
            .values()
            .filter(|r| msisdn.map_or(true, |m| r.involves(m)))
            .cloned()
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        records
    }
}

#[async_trait]
impl Repository<CallRecord> for MemoryCallRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> AppResult<Option<CallRecord>> {
        debug!("Finding call record by id: {}", id);
        Ok(self.records.read().get(id).cloned())
    }

    async fn find_all(&self, limit: i64, offset: i64) -> AppResult<Vec<CallRecord>> {
        Ok(paginate(self.ordered(None), limit, offset))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.records.read().len() as i64)
    }

    #[instrument(skip(self, entity), fields(id = %entity.id))]
    async fn create(&self, entity: &CallRecord) -> AppResult<CallRecord> {
        let mut records = self.records.write();

        if records.contains_key(&entity.id) {
            warn!("Call record creation failed: duplicate id");
            return Err(AppError::Conflict(format!(
                "Call record {} already exists",
                entity.id
            )));
        }

        let mut stored = entity.clone();
        stored.created_at = Utc::now();
        records.insert(stored.id.clone(), stored.clone());

        Ok(stored)
    }

    #[instrument(skip(self, entity), fields(id = %entity.id))]
    async fn update(&self, entity: &CallRecord) -> AppResult<CallRecord> {
        let mut records = self.records.write();

        let existing = records
            .get_mut(&entity.id)
            .ok_or_else(|| AppError::CallNotFound(entity.id.clone()))?;

        let created_at = existing.created_at;
        *existing = entity.clone();
        existing.created_at = created_at;

        Ok(existing.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.records.write().remove(id).is_some())
    }
}

#[async_trait]
impl CallRecordRepository for MemoryCallRepository {
    #[instrument(skip(self))]
    async fn list_by_msisdn(
        &self,
        msisdn: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> AppResult<(Vec<CallRecord>, i64)> {
        let records = self.ordered(msisdn);
        let total = records.len() as i64;
        Ok((paginate(records, limit, offset), total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(caller: &str, callee: &str) -> CallRecord {
        CallRecord {
            caller_msisdn: caller.to_string(),
            callee_msisdn: callee.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_stamps_created_at() {
        let repo = MemoryCallRepository::new();
        let record = call("89991112233", "89992223344");
        let before = Utc::now();

        let created = repo.create(&record).await.unwrap();
        assert_eq!(created.id, record.id);
        assert!(created.created_at >= before);

        let found = repo.find_by_id(&record.id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_list_by_msisdn_matches_both_sides() {
        let repo = MemoryCallRepository::new();
        repo.create(&call("89991112233", "89992223344")).await.unwrap();
        repo.create(&call("89992223344", "89991112233")).await.unwrap();
        repo.create(&call("89993334455", "89992223344")).await.unwrap();

        let (records, total) = repo
            .list_by_msisdn(Some("89991112233"), 50, 0)
            .await
            .unwrap();
        assert_eq!(total, 2);
        assert!(records.iter().all(|r| r.involves("89991112233")));

        assert_eq!(repo.count().await.unwrap(), 3);
        assert_eq!(repo.find_all(2, 0).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = MemoryCallRepository::new();
        let created = repo.create(&call("89991112233", "89992223344")).await.unwrap();

        let mut changed = created.clone();
        changed.service_type = "02".to_string();
        let updated = repo.update(&changed).await.unwrap();
        assert_eq!(updated.service_type, "02");
        assert_eq!(updated.created_at, created.created_at);

        assert!(repo.delete(&created.id).await.unwrap());
        let err = repo.update(&changed).await.unwrap_err();
        assert!(matches!(err, AppError::CallNotFound(_)));
    }
}
