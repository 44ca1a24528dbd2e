//! Catalog entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venuehub_core::types::{CatalogId, VenueId};

/// A catalog (menu) belonging to one venue.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Catalog {
    /// Unique catalog identifier.
    pub id: CatalogId,
    /// Parent venue.
    pub venue_id: VenueId,
    /// Display title.
    pub title: String,
    /// When the catalog was created.
    pub created_at: DateTime<Utc>,
    /// When the catalog was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Editable catalog fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFields {
    /// Display title.
    pub title: String,
}
