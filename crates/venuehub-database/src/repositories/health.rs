//! Liveness check for the PostgreSQL backend.

use async_trait::async_trait;

use venuehub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::store::StoreHealth;

/// Health adapter over the shared pool.
#[derive(Debug, Clone)]
pub struct PgHealth {
    db: DatabasePool,
}

impl PgHealth {
    /// Wrap an open pool.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreHealth for PgHealth {
    async fn health_check(&self) -> AppResult<bool> {
        self.db.health_check().await
    }

    async fn close(&self) {
        self.db.close().await;
    }
}
