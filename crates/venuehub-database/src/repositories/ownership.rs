//! Root-owner resolution via joins up the resource chain.

use async_trait::async_trait;
use sqlx::PgPool;

use venuehub_core::error::{AppError, ErrorKind};
use venuehub_core::result::AppResult;
use venuehub_core::types::AccountId;
use venuehub_entity::ownership::ResourcePath;

use crate::store::OwnershipStore;

/// Resolves the owning account of any resource path in one query.
#[derive(Debug, Clone)]
pub struct OwnershipRepository {
    pool: PgPool,
}

impl OwnershipRepository {
    /// Create a new ownership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnershipStore for OwnershipRepository {
    async fn resolve_root_owner(&self, path: &ResourcePath) -> AppResult<Option<AccountId>> {
        let query = match *path {
            ResourcePath::Venue { venue_id } => {
                sqlx::query_scalar::<_, AccountId>("SELECT owner_id FROM venues WHERE id = $1")
                    .bind(venue_id)
            }
            ResourcePath::Catalog {
                venue_id,
                catalog_id,
            } => sqlx::query_scalar::<_, AccountId>(
                "SELECT v.owner_id FROM catalogs c \
                 JOIN venues v ON v.id = c.venue_id \
                 WHERE c.id = $1 AND v.id = $2",
            )
            .bind(catalog_id)
            .bind(venue_id),
            ResourcePath::Item {
                venue_id,
                catalog_id,
                item_id,
            } => sqlx::query_scalar::<_, AccountId>(
                "SELECT v.owner_id FROM items i \
                 JOIN catalogs c ON c.id = i.catalog_id \
                 JOIN venues v ON v.id = c.venue_id \
                 WHERE i.id = $1 AND c.id = $2 AND v.id = $3",
            )
            .bind(item_id)
            .bind(catalog_id)
            .bind(venue_id),
        };

        query.fetch_optional(&self.pool).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to resolve owner of {path}"),
                e,
            )
        })
    }
}
