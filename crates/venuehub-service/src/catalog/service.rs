//! Catalog use cases.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use venuehub_auth::ownership::OwnershipResolver;
use venuehub_auth::session::Session;
use venuehub_core::error::AppError;
use venuehub_core::result::AppResult;
use venuehub_core::types::{CatalogId, VenueId};
use venuehub_database::{CatalogStore, ItemStore, VenueStore};
use venuehub_entity::catalog::{Catalog, CatalogFields};
use venuehub_entity::item::Item;
use venuehub_entity::ownership::ResourcePath;

/// A catalog together with its items.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogWithItems {
    /// The catalog row, flattened into the JSON object.
    #[serde(flatten)]
    pub catalog: Catalog,
    /// Items of the catalog.
    pub items: Vec<Item>,
}

/// Catalog reads and owner-checked mutation.
#[derive(Debug, Clone)]
pub struct CatalogService {
    venues: Arc<dyn VenueStore>,
    catalogs: Arc<dyn CatalogStore>,
    items: Arc<dyn ItemStore>,
    ownership: Arc<OwnershipResolver>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        venues: Arc<dyn VenueStore>,
        catalogs: Arc<dyn CatalogStore>,
        items: Arc<dyn ItemStore>,
        ownership: Arc<OwnershipResolver>,
    ) -> Self {
        Self {
            venues,
            catalogs,
            items,
            ownership,
        }
    }

    /// List the catalogs of a venue. An unknown venue is not found.
    pub async fn list(&self, venue_id: VenueId) -> AppResult<Vec<Catalog>> {
        if self.venues.find_by_id(venue_id).await?.is_none() {
            return Err(AppError::resource_not_found());
        }
        self.catalogs.list_by_venue(venue_id).await
    }

    /// Fetch a catalog with its items.
    pub async fn get(&self, venue_id: VenueId, id: CatalogId) -> AppResult<CatalogWithItems> {
        let catalog = self
            .catalogs
            .find(venue_id, id)
            .await?
            .ok_or_else(AppError::resource_not_found)?;
        let items = self.items.list_by_catalog(catalog.id).await?;
        Ok(CatalogWithItems { catalog, items })
    }

    /// Create a catalog under a venue the caller may mutate.
    pub async fn create(
        &self,
        session: &Session,
        venue_id: VenueId,
        fields: CatalogFields,
    ) -> AppResult<Catalog> {
        self.ownership
            .require(session, &ResourcePath::venue(venue_id))
            .await?;

        let catalog = self.catalogs.create(venue_id, &fields).await?;
        info!(catalog_id = %catalog.id, venue_id = %venue_id, "Catalog created");
        Ok(catalog)
    }

    /// Replace a catalog's fields.
    pub async fn update(
        &self,
        session: &Session,
        venue_id: VenueId,
        id: CatalogId,
        fields: CatalogFields,
    ) -> AppResult<Catalog> {
        self.ownership
            .require(session, &ResourcePath::catalog(venue_id, id))
            .await?;

        let catalog = self
            .catalogs
            .update(venue_id, id, &fields)
            .await?
            .ok_or_else(AppError::resource_not_found)?;
        info!(catalog_id = %id, account_id = %session.account_id(), "Catalog updated");
        Ok(catalog)
    }

    /// Delete a catalog and its items.
    pub async fn delete(&self, session: &Session, venue_id: VenueId, id: CatalogId) -> AppResult<()> {
        self.ownership
            .require(session, &ResourcePath::catalog(venue_id, id))
            .await?;

        if !self.catalogs.delete(venue_id, id).await? {
            return Err(AppError::resource_not_found());
        }
        info!(catalog_id = %id, account_id = %session.account_id(), "Catalog deleted");
        Ok(())
    }
}
