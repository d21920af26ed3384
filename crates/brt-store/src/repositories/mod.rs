//! Repository implementations
//!
//! This module contains in-memory implementations of all repository traits
//! defined in brt-core, guarded by `parking_lot` locks.

pub mod call_repo;
pub mod cdr_repo;
pub mod subscriber_repo;

pub use call_repo::MemoryCallRepository;
pub use cdr_repo::MemoryCdrRepository;
pub use subscriber_repo::MemorySubscriberRepository;

/// Apply limit/offset to an already ordered list
pub(crate) fn paginate<T>(items: Vec<T>, limit: i64, offset: i64) -> Vec<T> {
    let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}
