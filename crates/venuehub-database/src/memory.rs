//! In-memory store backend.
//!
//! All tables live behind one `RwLock`, so every operation, including
//! cascading deletes and counter updates, is atomic with respect to the
//! others.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use venuehub_core::error::AppError;
use venuehub_core::result::AppResult;
use venuehub_core::types::{AccountId, CatalogId, ItemId, VenueId};
use venuehub_entity::account::{Account, NewAccount};
use venuehub_entity::catalog::{Catalog, CatalogFields};
use venuehub_entity::item::{Item, ItemFields};
use venuehub_entity::ownership::ResourcePath;
use venuehub_entity::venue::{Venue, VenueFields};

use crate::store::{
    AccountStore, CatalogStore, ItemStore, OwnershipStore, StoreHealth, VenueStore,
};

#[derive(Debug, Default)]
struct Tables {
    accounts: BTreeMap<AccountId, Account>,
    venues: BTreeMap<VenueId, Venue>,
    catalogs: BTreeMap<CatalogId, Catalog>,
    items: BTreeMap<ItemId, Item>,
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn catalog_in_venue(&self, venue_id: VenueId, id: CatalogId) -> Option<&Catalog> {
        self.catalogs.get(&id).filter(|c| c.venue_id == venue_id)
    }

    fn item_on_path(&self, venue_id: VenueId, catalog_id: CatalogId, id: ItemId) -> bool {
        self.catalog_in_venue(venue_id, catalog_id).is_some()
            && self
                .items
                .get(&id)
                .is_some_and(|i| i.catalog_id == catalog_id)
    }

    fn remove_catalog_cascade(&mut self, id: CatalogId) {
        self.catalogs.remove(&id);
        self.items.retain(|_, item| item.catalog_id != id);
    }
}

/// Store backend holding every table in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>> {
        Ok(self.tables.read().accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let email = email.to_lowercase();
        Ok(self
            .tables
            .read()
            .accounts
            .values()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn create(&self, data: &NewAccount) -> AppResult<Account> {
        let email = data.email.to_lowercase();
        let mut tables = self.tables.write();
        if tables.accounts.values().any(|a| a.email == email) {
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                data.email
            )));
        }

        let now = Utc::now();
        let account = Account {
            id: AccountId::new(tables.next_id()),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email,
            password_hash: data.password_hash.clone(),
            role: data.role,
            created_at: now,
            updated_at: now,
        };
        tables.accounts.insert(account.id, account.clone());
        Ok(account)
    }
}

#[async_trait]
impl VenueStore for MemoryStore {
    async fn find_by_id(&self, id: VenueId) -> AppResult<Option<Venue>> {
        Ok(self.tables.read().venues.get(&id).cloned())
    }

    async fn list(&self, owner_id: Option<AccountId>) -> AppResult<Vec<Venue>> {
        Ok(self
            .tables
            .read()
            .venues
            .values()
            .filter(|v| owner_id.is_none_or(|owner| v.owner_id == owner))
            .cloned()
            .collect())
    }

    async fn find_duplicate(&self, fields: &VenueFields) -> AppResult<Option<Venue>> {
        Ok(self
            .tables
            .read()
            .venues
            .values()
            .find(|v| fields.duplicates(v))
            .cloned())
    }

    async fn create(&self, owner_id: AccountId, fields: &VenueFields) -> AppResult<Venue> {
        let mut tables = self.tables.write();
        if !tables.accounts.contains_key(&owner_id) {
            return Err(AppError::resource_not_found());
        }

        let now = Utc::now();
        let venue = Venue {
            id: VenueId::new(tables.next_id()),
            owner_id,
            title: fields.title.clone(),
            kind: fields.kind.clone(),
            description: fields.description.clone(),
            address: fields.address.clone(),
            phone: fields.phone.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.venues.insert(venue.id, venue.clone());
        Ok(venue)
    }

    async fn update(&self, id: VenueId, fields: &VenueFields) -> AppResult<Option<Venue>> {
        let mut tables = self.tables.write();
        Ok(tables.venues.get_mut(&id).map(|venue| {
            venue.title = fields.title.clone();
            venue.kind = fields.kind.clone();
            venue.description = fields.description.clone();
            venue.address = fields.address.clone();
            venue.phone = fields.phone.clone();
            venue.updated_at = Utc::now();
            venue.clone()
        }))
    }

    async fn delete(&self, id: VenueId) -> AppResult<bool> {
        let mut tables = self.tables.write();
        if tables.venues.remove(&id).is_none() {
            return Ok(false);
        }
        let catalog_ids: Vec<CatalogId> = tables
            .catalogs
            .values()
            .filter(|c| c.venue_id == id)
            .map(|c| c.id)
            .collect();
        for catalog_id in catalog_ids {
            tables.remove_catalog_cascade(catalog_id);
        }
        debug!(venue_id = %id, "Deleted venue with its catalogs and items");
        Ok(true)
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_by_venue(&self, venue_id: VenueId) -> AppResult<Vec<Catalog>> {
        Ok(self
            .tables
            .read()
            .catalogs
            .values()
            .filter(|c| c.venue_id == venue_id)
            .cloned()
            .collect())
    }

    async fn find(&self, venue_id: VenueId, id: CatalogId) -> AppResult<Option<Catalog>> {
        Ok(self.tables.read().catalog_in_venue(venue_id, id).cloned())
    }

    async fn create(&self, venue_id: VenueId, fields: &CatalogFields) -> AppResult<Catalog> {
        let mut tables = self.tables.write();
        if !tables.venues.contains_key(&venue_id) {
            return Err(AppError::resource_not_found());
        }

        let now = Utc::now();
        let catalog = Catalog {
            id: CatalogId::new(tables.next_id()),
            venue_id,
            title: fields.title.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.catalogs.insert(catalog.id, catalog.clone());
        Ok(catalog)
    }

    async fn update(
        &self,
        venue_id: VenueId,
        id: CatalogId,
        fields: &CatalogFields,
    ) -> AppResult<Option<Catalog>> {
        let mut tables = self.tables.write();
        Ok(tables
            .catalogs
            .get_mut(&id)
            .filter(|c| c.venue_id == venue_id)
            .map(|catalog| {
                catalog.title = fields.title.clone();
                catalog.updated_at = Utc::now();
                catalog.clone()
            }))
    }

    async fn delete(&self, venue_id: VenueId, id: CatalogId) -> AppResult<bool> {
        let mut tables = self.tables.write();
        if tables.catalog_in_venue(venue_id, id).is_none() {
            return Ok(false);
        }
        tables.remove_catalog_cascade(id);
        Ok(true)
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list_by_catalog(&self, catalog_id: CatalogId) -> AppResult<Vec<Item>> {
        Ok(self
            .tables
            .read()
            .items
            .values()
            .filter(|i| i.catalog_id == catalog_id)
            .cloned()
            .collect())
    }

    async fn find(
        &self,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
    ) -> AppResult<Option<Item>> {
        let tables = self.tables.read();
        if !tables.item_on_path(venue_id, catalog_id, id) {
            return Ok(None);
        }
        Ok(tables.items.get(&id).cloned())
    }

    async fn create(&self, catalog_id: CatalogId, fields: &ItemFields) -> AppResult<Item> {
        let mut tables = self.tables.write();
        if !tables.catalogs.contains_key(&catalog_id) {
            return Err(AppError::resource_not_found());
        }

        let now = Utc::now();
        let item = Item {
            id: ItemId::new(tables.next_id()),
            catalog_id,
            title: fields.title.clone(),
            description: fields.description.clone(),
            picture: fields.picture.clone(),
            price_uah: fields.price_uah,
            likes_count: 0,
            created_at: now,
            updated_at: now,
        };
        tables.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
        fields: &ItemFields,
    ) -> AppResult<Option<Item>> {
        let mut tables = self.tables.write();
        if !tables.item_on_path(venue_id, catalog_id, id) {
            return Ok(None);
        }
        Ok(tables.items.get_mut(&id).map(|item| {
            item.title = fields.title.clone();
            item.description = fields.description.clone();
            item.picture = fields.picture.clone();
            item.price_uah = fields.price_uah;
            item.updated_at = Utc::now();
            item.clone()
        }))
    }

    async fn delete(
        &self,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
    ) -> AppResult<bool> {
        let mut tables = self.tables.write();
        if !tables.item_on_path(venue_id, catalog_id, id) {
            return Ok(false);
        }
        Ok(tables.items.remove(&id).is_some())
    }

    async fn apply_like_delta(
        &self,
        venue_id: VenueId,
        catalog_id: CatalogId,
        id: ItemId,
        delta: i64,
    ) -> AppResult<Option<i64>> {
        let mut tables = self.tables.write();
        if !tables.item_on_path(venue_id, catalog_id, id) {
            return Ok(None);
        }
        Ok(tables.items.get_mut(&id).map(|item| {
            item.likes_count = (item.likes_count + delta).max(0);
            item.likes_count
        }))
    }
}

#[async_trait]
impl OwnershipStore for MemoryStore {
    async fn resolve_root_owner(&self, path: &ResourcePath) -> AppResult<Option<AccountId>> {
        let tables = self.tables.read();
        let linked = match *path {
            ResourcePath::Venue { .. } => true,
            ResourcePath::Catalog {
                venue_id,
                catalog_id,
            } => tables.catalog_in_venue(venue_id, catalog_id).is_some(),
            ResourcePath::Item {
                venue_id,
                catalog_id,
                item_id,
            } => tables.item_on_path(venue_id, catalog_id, item_id),
        };
        if !linked {
            return Ok(None);
        }
        Ok(tables.venues.get(&path.venue_id()).map(|v| v.owner_id))
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn close(&self) {}
}
