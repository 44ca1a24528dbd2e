//! Catalog repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use venuehub_core::error::{AppError, ErrorKind};
use venuehub_core::result::AppResult;
use venuehub_core::types::{CatalogId, VenueId};
use venuehub_entity::catalog::{Catalog, CatalogFields};

use crate::store::CatalogStore;

/// Repository for catalog CRUD operations.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    /// Create a new catalog repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for CatalogRepository {
    async fn list_by_venue(&self, venue_id: VenueId) -> AppResult<Vec<Catalog>> {
        sqlx::query_as::<_, Catalog>("SELECT * FROM catalogs WHERE venue_id = $1 ORDER BY id ASC")
            .bind(venue_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list catalogs", e))
    }

    async fn find(&self, venue_id: VenueId, id: CatalogId) -> AppResult<Option<Catalog>> {
        sqlx::query_as::<_, Catalog>("SELECT * FROM catalogs WHERE id = $1 AND venue_id = $2")
            .bind(id)
            .bind(venue_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find catalog", e))
    }

    async fn create(&self, venue_id: VenueId, fields: &CatalogFields) -> AppResult<Catalog> {
        sqlx::query_as::<_, Catalog>(
            "INSERT INTO catalogs (venue_id, title) VALUES ($1, $2) RETURNING *",
        )
        .bind(venue_id)
        .bind(&fields.title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("catalogs_venue_id_fkey") =>
            {
                AppError::resource_not_found()
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create catalog", e),
        })
    }

    async fn update(
        &self,
        venue_id: VenueId,
        id: CatalogId,
        fields: &CatalogFields,
    ) -> AppResult<Option<Catalog>> {
        sqlx::query_as::<_, Catalog>(
            "UPDATE catalogs SET title = $3, updated_at = NOW() \
             WHERE id = $1 AND venue_id = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(venue_id)
        .bind(&fields.title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update catalog", e))
    }

    async fn delete(&self, venue_id: VenueId, id: CatalogId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM catalogs WHERE id = $1 AND venue_id = $2")
            .bind(id)
            .bind(venue_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete catalog", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
