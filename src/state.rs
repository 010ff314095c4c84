//! Shared application state.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{config::Config, store::ProductStore};

/// State shared by all route handlers and middleware.
///
/// Cloning is cheap: the store is behind an `Arc`, so every clone sees the
/// same product collection. Handlers take the read or write lock for the
/// duration of a single store operation.
///
/// Constructing a fresh `AppState` per test gives each test an isolated
/// store.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory product store
    pub store: Arc<RwLock<ProductStore>>,

    /// Runtime configuration (port, API key)
    pub config: Config,
}

impl AppState {
    /// Build state with a seeded store.
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(ProductStore::seeded())),
            config,
        }
    }
}
