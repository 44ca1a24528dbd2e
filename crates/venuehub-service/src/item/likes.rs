//! Anonymous like/unlike on items.

use std::sync::Arc;

use tracing::debug;

use venuehub_core::error::AppError;
use venuehub_core::result::AppResult;
use venuehub_core::types::{CatalogId, ItemId, VenueId};
use venuehub_database::ItemStore;
use venuehub_entity::item::LikeAction;

/// Applies like actions to the per-item counter.
///
/// The counter is a single atomic update in the store and never drops
/// below zero. No per-user tracking is kept.
#[derive(Debug, Clone)]
pub struct LikeService {
    items: Arc<dyn ItemStore>,
}

impl LikeService {
    /// Creates a new like service.
    pub fn new(items: Arc<dyn ItemStore>) -> Self {
        Self { items }
    }

    /// Apply `action` and return the resulting count.
    pub async fn apply(
        &self,
        venue_id: VenueId,
        catalog_id: CatalogId,
        item_id: ItemId,
        action: LikeAction,
    ) -> AppResult<i64> {
        let count = self
            .items
            .apply_like_delta(venue_id, catalog_id, item_id, action.delta())
            .await?
            .ok_or_else(AppError::resource_not_found)?;
        debug!(item_id = %item_id, action = %action, likes = count, "Like applied");
        Ok(count)
    }
}
