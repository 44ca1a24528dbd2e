//! Item repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use venuehub_core::error::{AppError, ErrorKind};
use venuehub_core::result::AppResult;
use venuehub_core::types::{CatalogId, ItemId, VenueId};
use venuehub_entity::item::{Item, ItemFields};

use crate::store::ItemStore;

/// Repository for item CRUD operations and the likes counter.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for ItemRepository {
    async fn list_by_catalog(&self, catalog_id: CatalogId) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE catalog_id = $1 ORDER BY id ASC")
            .bind(catalog_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    async fn find(
        &self,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
    ) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>(
            "SELECT i.* FROM items i \
             JOIN catalogs c ON c.id = i.catalog_id \
             WHERE i.id = $1 AND i.catalog_id = $2 AND c.venue_id = $3",
        )
        .bind(id)
        .bind(catalog_id)
        .bind(venue_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item", e))
    }

    async fn create(&self, catalog_id: CatalogId, fields: &ItemFields) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO items (catalog_id, title, description, picture, price_uah) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(catalog_id)
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(&fields.picture)
        .bind(fields.price_uah)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("items_catalog_id_fkey") =>
            {
                AppError::resource_not_found()
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create item", e),
        })
    }

    async fn update(
        &self,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
        fields: &ItemFields,
    ) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>(
            "UPDATE items SET title = $4, description = $5, picture = $6, price_uah = $7, \
             updated_at = NOW() \
             WHERE id = $1 AND catalog_id = $2 \
             AND EXISTS (SELECT 1 FROM catalogs c WHERE c.id = $2 AND c.venue_id = $3) \
             RETURNING *",
        )
        .bind(id)
        .bind(catalog_id)
        .bind(venue_id)
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(&fields.picture)
        .bind(fields.price_uah)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update item", e))
    }

    async fn delete(
        &self,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM items WHERE id = $1 AND catalog_id = $2 \
             AND EXISTS (SELECT 1 FROM catalogs c WHERE c.id = $2 AND c.venue_id = $3)",
        )
        .bind(id)
        .bind(catalog_id)
        .bind(venue_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn apply_like_delta(
        &self,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
        delta: i64,
    ) -> AppResult<Option<i64>> {
        // Single statement: the row lock taken by UPDATE serializes concurrent deltas.
        sqlx::query_scalar::<_, i64>(
            "UPDATE items SET likes_count = GREATEST(likes_count + $4, 0) \
             WHERE id = $1 AND catalog_id = $2 \
             AND EXISTS (SELECT 1 FROM catalogs c WHERE c.id = $2 AND c.venue_id = $3) \
             RETURNING likes_count",
        )
        .bind(id)
        .bind(catalog_id)
        .bind(venue_id)
        .bind(delta)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update likes counter", e)
        })
    }
}
