use std::sync::Arc;

use crate::config::Config;
use crate::store::{InsuranceStore, PostingStore, PreferenceStore, UserStore};

/// Shared application state injected into all route handlers via Axum extractors.
/// Handlers see only the storage-port traits, so tests run against the
/// in-memory fakes with no database.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub insurance: Arc<dyn InsuranceStore>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub postings: Arc<dyn PostingStore>,
    pub config: Config,
}

#[cfg(test)]
pub fn test_state() -> AppState {
    use crate::store::memory::{
        MemoryInsuranceStore, MemoryPostingStore, MemoryPreferenceStore, MemoryUserStore,
    };

    AppState {
        users: Arc::new(MemoryUserStore::default()),
        insurance: Arc::new(MemoryInsuranceStore::default()),
        preferences: Arc::new(MemoryPreferenceStore::default()),
        postings: Arc::new(MemoryPostingStore::default()),
        config: Config {
            database_url: String::new(),
            jwt_secret: "test-secret".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        },
    }
}
