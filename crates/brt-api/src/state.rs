//! Shared handler state

use brt_core::traits::{CallRecordRepository, CdrRepository, SubscriberRepository};
use brt_store::InMemoryStore;
use std::sync::Arc;

/// Repositories injected into every handler through `web::Data`
#[derive(Clone)]
pub struct AppState {
    pub calls: Arc<dyn CallRecordRepository>,
    pub cdrs: Arc<dyn CdrRepository>,
    pub subscribers: Arc<dyn SubscriberRepository>,
}

impl AppState {
    /// Build handler state backed by the in-memory store
    pub fn from_store(store: &InMemoryStore) -> Self {
        Self {
            calls: store.calls.clone(),
            cdrs: store.cdrs.clone(),
            subscribers: store.subscribers.clone(),
        }
    }
}
