//! Store selection and the shared handle passed to services.

pub mod traits;

use std::sync::Arc;

use tracing::info;

use venuehub_core::config::AppConfig;
use venuehub_core::error::AppError;
use venuehub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{
    AccountRepository, CatalogRepository, ItemRepository, OwnershipRepository, PgHealth,
    VenueRepository,
};

pub use traits::{
    AccountStore, CatalogStore, ItemStore, OwnershipStore, StoreHealth, VenueStore,
};

/// Handle to the configured store backend.
///
/// The backend is selected at construction time based on configuration.
/// Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Store {
    /// Account persistence.
    pub accounts: Arc<dyn AccountStore>,
    /// Venue persistence.
    pub venues: Arc<dyn VenueStore>,
    /// Catalog persistence.
    pub catalogs: Arc<dyn CatalogStore>,
    /// Item persistence.
    pub items: Arc<dyn ItemStore>,
    /// Root-owner resolution.
    pub ownership: Arc<dyn OwnershipStore>,
    health: Arc<dyn StoreHealth>,
}

impl Store {
    /// Connect the backend named by `store.provider`.
    pub async fn connect(config: &AppConfig) -> AppResult<Self> {
        match config.store.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL store");
                let db = DatabasePool::connect(&config.database).await?;
                if config.database.run_migrations {
                    run_migrations(db.pool()).await?;
                }
                Ok(Self::postgres(db))
            }
            "memory" => {
                info!("Initializing in-memory store");
                Ok(Self::memory(MemoryStore::new()))
            }
            other => Err(AppError::configuration(format!(
                "Unknown store provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Build a store over an open PostgreSQL pool.
    pub fn postgres(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            accounts: Arc::new(AccountRepository::new(pool.clone())),
            venues: Arc::new(VenueRepository::new(pool.clone())),
            catalogs: Arc::new(CatalogRepository::new(pool.clone())),
            items: Arc::new(ItemRepository::new(pool.clone())),
            ownership: Arc::new(OwnershipRepository::new(pool)),
            health: Arc::new(PgHealth::new(db)),
        }
    }

    /// Build a store over an in-memory backend.
    pub fn memory(store: MemoryStore) -> Self {
        let shared = Arc::new(store);
        Self {
            accounts: shared.clone(),
            venues: shared.clone(),
            catalogs: shared.clone(),
            items: shared.clone(),
            ownership: shared.clone(),
            health: shared,
        }
    }

    /// Check backend connectivity.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.health.health_check().await
    }

    /// Release backend resources.
    pub async fn close(&self) {
        self.health.close().await;
    }
}
