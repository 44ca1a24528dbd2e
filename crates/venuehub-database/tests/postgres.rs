//! PostgreSQL repository tests.
//!
//! These run against the database named by `VENUEHUB_TEST_DATABASE_URL` and
//! return early when it is unset. Each test creates its own rows under a
//! unique email, so tests can share one database and run in parallel.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use venuehub_core::config::DatabaseConfig;
use venuehub_core::error::ErrorKind;
use venuehub_core::types::AccountId;
use venuehub_database::migration::run_migrations;
use venuehub_database::{DatabasePool, Store};
use venuehub_entity::account::{AccountRole, NewAccount};
use venuehub_entity::catalog::{Catalog, CatalogFields};
use venuehub_entity::item::{Item, ItemFields};
use venuehub_entity::ownership::ResourcePath;
use venuehub_entity::venue::{Venue, VenueFields};

const DATABASE_URL_VAR: &str = "VENUEHUB_TEST_DATABASE_URL";

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

async fn postgres_store() -> Option<Store> {
    let Ok(url) = std::env::var(DATABASE_URL_VAR) else {
        eprintln!("{DATABASE_URL_VAR} not set; skipping PostgreSQL test");
        return None;
    };

    let db = DatabasePool::connect(&DatabaseConfig {
        url,
        ..DatabaseConfig::default()
    })
    .await
    .expect("Failed to connect to test database");

    run_migrations(db.pool())
        .await
        .expect("Failed to run migrations");

    Some(Store::postgres(db))
}

fn unique_email(prefix: &str) -> String {
    let n = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}-{nanos}-{n}@venuehub.test")
}

async fn account(store: &Store, email: &str) -> AccountId {
    store
        .accounts
        .create(&NewAccount {
            first_name: "Olena".to_string(),
            last_name: "Koval".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            role: AccountRole::Standard,
        })
        .await
        .expect("Failed to create account")
        .id
}

/// One account owning one venue with one catalog holding one item.
async fn chain(store: &Store, prefix: &str) -> (AccountId, Venue, Catalog, Item) {
    let owner = account(store, &unique_email(prefix)).await;
    let venue = store
        .venues
        .create(
            owner,
            &VenueFields {
                title: format!("{prefix} venue"),
                kind: "cafe".to_string(),
                description: String::new(),
                address: "5 Khreshchatyk St".to_string(),
                phone: String::new(),
            },
        )
        .await
        .expect("Failed to create venue");
    let catalog = store
        .catalogs
        .create(
            venue.id,
            &CatalogFields {
                title: "Desserts".to_string(),
            },
        )
        .await
        .expect("Failed to create catalog");
    let item = store
        .items
        .create(
            catalog.id,
            &ItemFields {
                title: "Syrnyky".to_string(),
                description: String::new(),
                picture: String::new(),
                price_uah: 140,
            },
        )
        .await
        .expect("Failed to create item");
    (owner, venue, catalog, item)
}

#[tokio::test]
async fn test_duplicate_email_conflicts_case_insensitively() {
    let Some(store) = postgres_store().await else {
        return;
    };

    let email = unique_email("dup");
    account(&store, &email).await;

    let err = store
        .accounts
        .create(&NewAccount {
            first_name: "Other".to_string(),
            last_name: "Person".to_string(),
            email: email.to_uppercase(),
            password_hash: "$argon2id$placeholder".to_string(),
            role: AccountRole::Standard,
        })
        .await
        .expect_err("duplicate email must be rejected");
    assert_eq!(err.kind, ErrorKind::Conflict);

    let found = store
        .accounts
        .find_by_email(&email.to_uppercase())
        .await
        .expect("lookup");
    assert_eq!(found.map(|a| a.email), Some(email));
}

#[tokio::test]
async fn test_unlike_at_zero_stays_zero() {
    let Some(store) = postgres_store().await else {
        return;
    };
    let (_, venue, catalog, item) = chain(&store, "floor").await;

    let count = store
        .items
        .apply_like_delta(venue.id, catalog.id, item.id, -1)
        .await
        .expect("unlike");
    assert_eq!(count, Some(0));

    let count = store
        .items
        .apply_like_delta(venue.id, catalog.id, item.id, 1)
        .await
        .expect("like");
    assert_eq!(count, Some(1));

    let count = store
        .items
        .apply_like_delta(venue.id, catalog.id, item.id, -1)
        .await
        .expect("unlike");
    assert_eq!(count, Some(0));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_likes_are_not_lost() {
    let Some(store) = postgres_store().await else {
        return;
    };
    let (_, venue, catalog, item) = chain(&store, "concurrent").await;
    let (venue_id, catalog_id, item_id) = (venue.id, catalog.id, item.id);

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let items = store.items.clone();
            tokio::spawn(async move {
                items
                    .apply_like_delta(venue_id, catalog_id, item_id, 1)
                    .await
            })
        })
        .collect();

    for result in futures::future::join_all(tasks).await {
        result.expect("join").expect("like");
    }

    let stored = store
        .items
        .find(venue.id, catalog.id, item.id)
        .await
        .expect("find")
        .expect("item exists");
    assert_eq!(stored.likes_count, 50);
}

#[tokio::test]
async fn test_mismatched_path_resolves_to_nothing() {
    let Some(store) = postgres_store().await else {
        return;
    };
    let (owner, venue, catalog, item) = chain(&store, "path").await;
    let (_, other_venue, other_catalog, _) = chain(&store, "path-other").await;

    let good = ResourcePath::Item {
        venue_id: venue.id,
        catalog_id: catalog.id,
        item_id: item.id,
    };
    assert_eq!(
        store.ownership.resolve_root_owner(&good).await.expect("resolve"),
        Some(owner)
    );

    let wrong_catalog = ResourcePath::Item {
        venue_id: venue.id,
        catalog_id: other_catalog.id,
        item_id: item.id,
    };
    assert_eq!(
        store
            .ownership
            .resolve_root_owner(&wrong_catalog)
            .await
            .expect("resolve"),
        None
    );

    let wrong_venue = ResourcePath::Catalog {
        venue_id: other_venue.id,
        catalog_id: catalog.id,
    };
    assert_eq!(
        store
            .ownership
            .resolve_root_owner(&wrong_venue)
            .await
            .expect("resolve"),
        None
    );

    let liked = store
        .items
        .apply_like_delta(other_venue.id, catalog.id, item.id, 1)
        .await
        .expect("like");
    assert_eq!(liked, None);
}

#[tokio::test]
async fn test_delete_venue_cascades() {
    let Some(store) = postgres_store().await else {
        return;
    };
    let (_, venue, catalog, item) = chain(&store, "cascade").await;

    assert!(store.venues.delete(venue.id).await.expect("delete"));
    assert!(
        store
            .items
            .find(venue.id, catalog.id, item.id)
            .await
            .expect("find")
            .is_none()
    );
    assert!(
        store
            .catalogs
            .find(venue.id, catalog.id)
            .await
            .expect("find")
            .is_none()
    );
}
