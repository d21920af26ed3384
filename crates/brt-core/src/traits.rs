//! Common traits for repositories
//!
//! Defines the storage abstractions the API layer is written against.

use crate::error::AppError;
use crate::models::{CallRecord, CdrRecord, Subscriber};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

/// Generic repository trait for CRUD operations
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Find entity by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, AppError>;

    /// Find all entities with pagination
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<T>, AppError>;

    /// Count total entities
    async fn count(&self) -> Result<i64, AppError>;

    /// Create a new entity
    async fn create(&self, entity: &T) -> Result<T, AppError>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> Result<T, AppError>;

    /// Delete entity by ID
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

/// Call record repository trait with specialized methods
#[async_trait]
pub trait CallRecordRepository: Repository<CallRecord> {
    /// List calls where the MSISDN is caller or callee
    async fn list_by_msisdn(
        &self,
        msisdn: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CallRecord>, i64), AppError>;
}

/// CDR repository trait with specialized methods
#[async_trait]
pub trait CdrRepository: Repository<CdrRecord> {
    /// List CDRs with an optional caller filter
    async fn list_filtered(
        &self,
        caller: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CdrRecord>, i64), AppError>;
}

/// Subscriber repository trait with specialized methods
#[async_trait]
pub trait SubscriberRepository: Repository<Subscriber> {
    /// Add `amount` to the balance atomically
    ///
    /// Returns the balance before the change together with the updated
    /// subscriber, both taken under the same lock.
    async fn update_balance(
        &self,
        msisdn: &str,
        amount: Decimal,
    ) -> Result<(Decimal, Subscriber), AppError>;
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PaginationMeta {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(total: i64, page: i64, per_page: i64) -> Self {
        let total_pages = if per_page > 0 {
            (total + per_page - 1) / per_page
        } else {
            0
        };

        Self {
            total,
            page,
            per_page,
            total_pages,
        }
    }
}
