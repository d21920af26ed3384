//! CDR repository implementation
//!
//! Keeps CDR records in a lock-guarded map keyed by record id.

use brt_core::{
    models::CdrRecord,
    traits::{CdrRepository, Repository},
    AppError, AppResult,
};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use super::paginate;

/// In-memory implementation of CdrRepository
#[derive(Debug, Default)]
pub struct MemoryCdrRepository {
    records: RwLock<HashMap<String, CdrRecord>>,
}

impl MemoryCdrRepository {
    /// Create an empty CDR repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Records ordered by creation time, then id
    fn ordered(&self, caller: Option<&str>) -> Vec<CdrRecord> {
        let mut records: Vec<CdrRecord> = self
            .records
            .read()
            .values()
            .filter(|r| caller.map_or(true, |c| r.caller == c))
            .cloned()
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        records
    }
}

#[async_trait]
impl Repository<CdrRecord> for MemoryCdrRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> AppResult<Option<CdrRecord>> {
        debug!("Finding CDR by id: {}", id);
        Ok(self.records.read().get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_all(&self, limit: i64, offset: i64) -> AppResult<Vec<CdrRecord>> {
        debug!("Finding all CDRs with limit {} offset {}", limit, offset);
        Ok(paginate(self.ordered(None), limit, offset))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.records.read().len() as i64)
    }

    #[instrument(skip(self, entity), fields(id = %entity.id))]
    async fn create(&self, entity: &CdrRecord) -> AppResult<CdrRecord> {
        let mut records = self.records.write();

        if records.contains_key(&entity.id) {
            warn!("CDR creation failed: duplicate id");
            return Err(AppError::Conflict(format!(
                "CDR record {} already exists",
                entity.id
            )));
        }

        let mut stored = entity.clone();
        stored.created_at = Utc::now();
        records.insert(stored.id.clone(), stored.clone());

        debug!("CDR stored");
        Ok(stored)
    }

    #[instrument(skip(self, entity), fields(id = %entity.id))]
    async fn update(&self, entity: &CdrRecord) -> AppResult<CdrRecord> {
        let mut records = self.records.write();

        let existing = records
            .get_mut(&entity.id)
            .ok_or_else(|| AppError::CdrNotFound(entity.id.clone()))?;

        existing.replace_with(entity.clone());

        debug!("CDR replaced");
        Ok(existing.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> AppResult<bool> {
        let removed = self.records.write().remove(id).is_some();
        debug!(removed, "Deleting CDR {}", id);
        Ok(removed)
    }
}

#[async_trait]
impl CdrRepository for MemoryCdrRepository {
    #[instrument(skip(self))]
    async fn list_filtered(
        &self,
        caller: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> AppResult<(Vec<CdrRecord>, i64)> {
        let records = self.ordered(caller);
        let total = records.len() as i64;
        Ok((paginate(records, limit, offset), total))
    }
}
