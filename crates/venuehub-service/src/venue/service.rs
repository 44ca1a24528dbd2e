//! Venue use cases.

use std::sync::Arc;

use tracing::info;

use venuehub_auth::ownership::OwnershipResolver;
use venuehub_auth::session::Session;
use venuehub_core::error::AppError;
use venuehub_core::result::AppResult;
use venuehub_core::types::{AccountId, VenueId};
use venuehub_database::VenueStore;
use venuehub_entity::ownership::ResourcePath;
use venuehub_entity::venue::{Venue, VenueFields};

/// Venue listing and owner-checked mutation.
#[derive(Debug, Clone)]
pub struct VenueService {
    venues: Arc<dyn VenueStore>,
    ownership: Arc<OwnershipResolver>,
}

impl VenueService {
    /// Creates a new venue service.
    pub fn new(venues: Arc<dyn VenueStore>, ownership: Arc<OwnershipResolver>) -> Self {
        Self { venues, ownership }
    }

    /// List venues, optionally filtered by owner.
    pub async fn list(&self, owner_id: Option<AccountId>) -> AppResult<Vec<Venue>> {
        self.venues.list(owner_id).await
    }

    /// Fetch one venue.
    pub async fn get(&self, id: VenueId) -> AppResult<Venue> {
        self.venues
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::resource_not_found)
    }

    /// Create a venue owned by the caller.
    ///
    /// A venue whose content matches an existing one is rejected.
    pub async fn create(&self, session: &Session, fields: VenueFields) -> AppResult<Venue> {
        if self.venues.find_duplicate(&fields).await?.is_some() {
            return Err(AppError::conflict("venue already exists"));
        }

        let venue = self.venues.create(session.account_id(), &fields).await?;
        info!(venue_id = %venue.id, owner_id = %venue.owner_id, "Venue created");
        Ok(venue)
    }

    /// Replace a venue's fields. The owner never changes.
    pub async fn update(
        &self,
        session: &Session,
        id: VenueId,
        fields: VenueFields,
    ) -> AppResult<Venue> {
        self.ownership
            .require(session, &ResourcePath::venue(id))
            .await?;

        let venue = self
            .venues
            .update(id, &fields)
            .await?
            .ok_or_else(AppError::resource_not_found)?;
        info!(venue_id = %id, account_id = %session.account_id(), "Venue updated");
        Ok(venue)
    }

    /// Delete a venue and everything beneath it.
    pub async fn delete(&self, session: &Session, id: VenueId) -> AppResult<()> {
        self.ownership
            .require(session, &ResourcePath::venue(id))
            .await?;

        if !self.venues.delete(id).await? {
            return Err(AppError::resource_not_found());
        }
        info!(venue_id = %id, account_id = %session.account_id(), "Venue deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use venuehub_core::ErrorKind;
    use venuehub_database::{AccountStore, MemoryStore};
    use venuehub_entity::account::{AccountRole, NewAccount};

    use super::*;

    async fn session(store: &MemoryStore, email: &str, role: AccountRole) -> Session {
        let account = AccountStore::create(
            store,
            &NewAccount {
                first_name: "Olena".to_string(),
                last_name: "Koval".to_string(),
                email: email.to_string(),
                password_hash: String::new(),
                role,
            },
        )
        .await
        .expect("account");
        Session {
            account,
            expires_at: Some(Utc::now()),
        }
    }

    fn fields(title: &str) -> VenueFields {
        VenueFields {
            title: title.to_string(),
            kind: "cafe".to_string(),
            description: "Pastries".to_string(),
            address: "5 Khreshchatyk".to_string(),
            phone: "+380441234567".to_string(),
        }
    }

    fn service(store: Arc<MemoryStore>) -> VenueService {
        VenueService::new(
            store.clone(),
            Arc::new(OwnershipResolver::new(store)),
        )
    }

    #[tokio::test]
    async fn test_create_sets_owner_and_rejects_duplicates() {
        let store = Arc::new(MemoryStore::new());
        let owner = session(&store, "owner@example.com", AccountRole::Standard).await;
        let service = service(store);

        let venue = service.create(&owner, fields("Lviv Croissants")).await.expect("create");
        assert_eq!(venue.owner_id, owner.account_id());

        let mut again = fields("LVIV CROISSANTS");
        again.kind = "CAFE".to_string();
        let err = service.create(&owner, again).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let mut other_phone = fields("Lviv Croissants");
        other_phone.phone = "+380449999999".to_string();
        assert!(service.create(&owner, other_phone).await.is_ok());
    }

    #[tokio::test]
    async fn test_foreign_mutation_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let owner = session(&store, "owner@example.com", AccountRole::Standard).await;
        let stranger = session(&store, "stranger@example.com", AccountRole::Standard).await;
        let admin = session(&store, "admin@example.com", AccountRole::Elevated).await;
        let service = service(store);

        let venue = service.create(&owner, fields("Puzata Hata")).await.expect("create");

        let err = service
            .update(&stranger, venue.id, fields("Hijacked"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(service.get(venue.id).await.expect("get").title, "Puzata Hata");

        let updated = service
            .update(&admin, venue.id, fields("Renamed"))
            .await
            .expect("admin update");
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.owner_id, owner.account_id());

        let err = service.delete(&stranger, venue.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        service.delete(&owner, venue.id).await.expect("owner delete");
        assert_eq!(
            service.get(venue.id).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_list_by_owner() {
        let store = Arc::new(MemoryStore::new());
        let first = session(&store, "first@example.com", AccountRole::Standard).await;
        let second = session(&store, "second@example.com", AccountRole::Standard).await;
        let service = service(store);

        service.create(&first, fields("One")).await.expect("create");
        service.create(&second, fields("Two")).await.expect("create");

        assert_eq!(service.list(None).await.expect("list").len(), 2);
        let mine = service.list(Some(second.account_id())).await.expect("list");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "Two");
    }
}
