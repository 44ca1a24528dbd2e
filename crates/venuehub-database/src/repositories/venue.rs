//! Venue repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use venuehub_core::error::{AppError, ErrorKind};
use venuehub_core::result::AppResult;
use venuehub_core::types::{AccountId, VenueId};
use venuehub_entity::venue::{Venue, VenueFields};

use crate::store::VenueStore;

/// Repository for venue CRUD operations.
#[derive(Debug, Clone)]
pub struct VenueRepository {
    pool: PgPool,
}

impl VenueRepository {
    /// Create a new venue repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueStore for VenueRepository {
    async fn find_by_id(&self, id: VenueId) -> AppResult<Option<Venue>> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find venue", e))
    }

    async fn list(&self, owner_id: Option<AccountId>) -> AppResult<Vec<Venue>> {
        sqlx::query_as::<_, Venue>(
            "SELECT * FROM venues WHERE ($1::BIGINT IS NULL OR owner_id = $1) ORDER BY id ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list venues", e))
    }

    async fn find_duplicate(&self, fields: &VenueFields) -> AppResult<Option<Venue>> {
        sqlx::query_as::<_, Venue>(
            "SELECT * FROM venues \
             WHERE LOWER(title) = LOWER($1) AND LOWER(kind) = LOWER($2) \
             AND LOWER(description) = LOWER($3) AND LOWER(address) = LOWER($4) \
             AND phone = $5 \
             LIMIT 1",
        )
        .bind(&fields.title)
        .bind(&fields.kind)
        .bind(&fields.description)
        .bind(&fields.address)
        .bind(&fields.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to look up duplicate venue", e)
        })
    }

    async fn create(&self, owner_id: AccountId, fields: &VenueFields) -> AppResult<Venue> {
        sqlx::query_as::<_, Venue>(
            "INSERT INTO venues (owner_id, title, kind, description, address, phone) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(owner_id)
        .bind(&fields.title)
        .bind(&fields.kind)
        .bind(&fields.description)
        .bind(&fields.address)
        .bind(&fields.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create venue", e))
    }

    async fn update(&self, id: VenueId, fields: &VenueFields) -> AppResult<Option<Venue>> {
        sqlx::query_as::<_, Venue>(
            "UPDATE venues SET title = $2, kind = $3, description = $4, address = $5, \
             phone = $6, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.kind)
        .bind(&fields.description)
        .bind(&fields.address)
        .bind(&fields.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update venue", e))
    }

    async fn delete(&self, id: VenueId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete venue", e))?;
        Ok(result.rows_affected() > 0)
    }
}
