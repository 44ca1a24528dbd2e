//! Store traits implemented by every backend.
//!
//! Lookups that take a parent id alongside the child id only match when
//! the stored parent link agrees, so a mismatched path behaves exactly
//! like a missing row.

use async_trait::async_trait;

use venuehub_core::result::AppResult;
use venuehub_core::types::{AccountId, CatalogId, ItemId, VenueId};
use venuehub_entity::account::{Account, NewAccount};
use venuehub_entity::catalog::{Catalog, CatalogFields};
use venuehub_entity::item::{Item, ItemFields};
use venuehub_entity::ownership::ResourcePath;
use venuehub_entity::venue::{Venue, VenueFields};

/// Account persistence.
#[async_trait]
pub trait AccountStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an account by primary key.
    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>>;

    /// Find an account by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Create an account. Fails with a conflict when the email is taken.
    async fn create(&self, data: &NewAccount) -> AppResult<Account>;
}

/// Venue persistence.
#[async_trait]
pub trait VenueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a venue by primary key.
    async fn find_by_id(&self, id: VenueId) -> AppResult<Option<Venue>>;

    /// List venues, optionally restricted to one owner, oldest first.
    async fn list(&self, owner_id: Option<AccountId>) -> AppResult<Vec<Venue>>;

    /// Find a venue whose content duplicates the given fields.
    async fn find_duplicate(&self, fields: &VenueFields) -> AppResult<Option<Venue>>;

    /// Create a venue owned by `owner_id`.
    async fn create(&self, owner_id: AccountId, fields: &VenueFields) -> AppResult<Venue>;

    /// Replace the editable fields of a venue.
    async fn update(&self, id: VenueId, fields: &VenueFields) -> AppResult<Option<Venue>>;

    /// Delete a venue together with its catalogs and items.
    async fn delete(&self, id: VenueId) -> AppResult<bool>;
}

/// Catalog persistence.
#[async_trait]
pub trait CatalogStore: Send + Sync + std::fmt::Debug + 'static {
    /// List the catalogs of a venue, oldest first.
    async fn list_by_venue(&self, venue_id: VenueId) -> AppResult<Vec<Catalog>>;

    /// Find a catalog within a venue.
    async fn find(&self, venue_id: VenueId, id: CatalogId) -> AppResult<Option<Catalog>>;

    /// Create a catalog under a venue. Fails with not-found if the venue is gone.
    async fn create(&self, venue_id: VenueId, fields: &CatalogFields) -> AppResult<Catalog>;

    /// Replace the editable fields of a catalog within a venue.
    async fn update(
        &self,
        venue_id: VenueId,
        id: CatalogId,
        fields: &CatalogFields,
    ) -> AppResult<Option<Catalog>>;

    /// Delete a catalog within a venue together with its items.
    async fn delete(&self, venue_id: VenueId, id: CatalogId) -> AppResult<bool>;
}

/// Item persistence, including the popularity counter.
#[async_trait]
pub trait ItemStore: Send + Sync + std::fmt::Debug + 'static {
    /// List the items of a catalog, oldest first.
    async fn list_by_catalog(&self, catalog_id: CatalogId) -> AppResult<Vec<Item>>;

    /// Find an item along its full path.
    async fn find(
        &self,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
    ) -> AppResult<Option<Item>>;

    /// Create an item under a catalog. Fails with not-found if the catalog is gone.
    async fn create(&self, catalog_id: CatalogId, fields: &ItemFields) -> AppResult<Item>;

    /// Replace the editable fields of an item. The likes counter is untouched.
    async fn update(
        &self,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
        fields: &ItemFields,
    ) -> AppResult<Option<Item>>;

    /// Delete an item along its full path.
    async fn delete(&self, venue_id: VenueId, catalog_id: CatalogId, id: ItemId)
    -> AppResult<bool>;

    /// Atomically add `delta` to the likes counter, flooring at zero.
    ///
    /// Returns the new count, or `None` when the path resolves to no item.
    async fn apply_like_delta(
        &self,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
        delta: i64,
    ) -> AppResult<Option<i64>>;
}

/// Root-owner resolution across the venue → catalog → item chain.
#[async_trait]
pub trait OwnershipStore: Send + Sync + std::fmt::Debug + 'static {
    /// Walk the path up to its venue and return the owning account.
    ///
    /// `None` when any link is missing or does not match its stored parent.
    async fn resolve_root_owner(&self, path: &ResourcePath) -> AppResult<Option<AccountId>>;
}

/// Backend liveness check.
#[async_trait]
pub trait StoreHealth: Send + Sync + std::fmt::Debug + 'static {
    /// Whether the backend answers.
    async fn health_check(&self) -> AppResult<bool>;

    /// Release backend resources.
    async fn close(&self);
}
