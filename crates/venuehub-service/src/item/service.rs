//! Item use cases.

use std::sync::Arc;

use tracing::info;

use venuehub_auth::ownership::OwnershipResolver;
use venuehub_auth::session::Session;
use venuehub_core::error::AppError;
use venuehub_core::result::AppResult;
use venuehub_core::types::{CatalogId, ItemId, VenueId};
use venuehub_database::ItemStore;
use venuehub_entity::item::{Item, ItemFields};
use venuehub_entity::ownership::ResourcePath;

/// Item reads and owner-checked mutation.
#[derive(Debug, Clone)]
pub struct ItemService {
    items: Arc<dyn ItemStore>,
    ownership: Arc<OwnershipResolver>,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(items: Arc<dyn ItemStore>, ownership: Arc<OwnershipResolver>) -> Self {
        Self { items, ownership }
    }

    /// Fetch one item along its full path.
    pub async fn get(&self, venue_id: VenueId, catalog_id: CatalogId, id: ItemId) -> AppResult<Item> {
        self.items
            .find(venue_id, catalog_id, id)
            .await?
            .ok_or_else(AppError::resource_not_found)
    }

    /// Create an item in a catalog the caller may mutate. Likes start at zero.
    pub async fn create(
        &self,
        session: &Session,
        venue_id: VenueId,
        catalog_id: CatalogId,
        fields: ItemFields,
    ) -> AppResult<Item> {
        self.ownership
            .require(session, &ResourcePath::catalog(venue_id, catalog_id))
            .await?;

        let item = self.items.create(catalog_id, &fields).await?;
        info!(item_id = %item.id, catalog_id = %catalog_id, "Item created");
        Ok(item)
    }

    /// Replace an item's fields. The likes counter is preserved.
    pub async fn update(
        &self,
        session: &Session,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
        fields: ItemFields,
    ) -> AppResult<Item> {
        self.ownership
            .require(session, &ResourcePath::item(venue_id, catalog_id, id))
            .await?;

        let item = self
            .items
            .update(venue_id, catalog_id, id, &fields)
            .await?
            .ok_or_else(AppError::resource_not_found)?;
        info!(item_id = %id, account_id = %session.account_id(), "Item updated");
        Ok(item)
    }

    /// Delete an item.
    pub async fn delete(
        &self,
        session: &Session,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
    ) -> AppResult<()> {
        self.ownership
            .require(session, &ResourcePath::item(venue_id, catalog_id, id))
            .await?;

        if !self.items.delete(venue_id, catalog_id, id).await? {
            return Err(AppError::resource_not_found());
        }
        info!(item_id = %id, account_id = %session.account_id(), "Item deleted");
        Ok(())
    }
}
