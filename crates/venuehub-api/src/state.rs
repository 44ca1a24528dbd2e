//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use venuehub_auth::jwt::{JwtDecoder, JwtEncoder};
use venuehub_auth::ownership::OwnershipResolver;
use venuehub_auth::password::{PasswordHasher, PasswordValidator};
use venuehub_auth::session::SessionResolver;
use venuehub_core::config::AppConfig;
use venuehub_core::result::AppResult;
use venuehub_database::Store;
use venuehub_service::{AccountService, CatalogService, ItemService, LikeService, VenueService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Store backend
    pub store: Store,

    // ── Auth ─────────────────────────────────────────────────
    /// Session cookie resolution
    pub sessions: Arc<SessionResolver>,

    // ── Services ─────────────────────────────────────────────
    /// Signup and login
    pub accounts: Arc<AccountService>,
    /// Venue use cases
    pub venues: Arc<VenueService>,
    /// Catalog use cases
    pub catalogs: Arc<CatalogService>,
    /// Item use cases
    pub items: Arc<ItemService>,
    /// Likes counter
    pub likes: Arc<LikeService>,
}

impl AppState {
    /// Validate `config` and wire the auth components and services over an open store.
    pub fn new(config: AppConfig, store: Store) -> AppResult<Self> {
        config.validate()?;

        let hasher = Arc::new(PasswordHasher::new(&config.auth.argon2)?);
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let decoder = Arc::new(JwtDecoder::new(&config.auth));
        let ownership = Arc::new(OwnershipResolver::new(Arc::clone(&store.ownership)));

        let sessions = Arc::new(SessionResolver::new(decoder, Arc::clone(&store.accounts)));
        let accounts = Arc::new(AccountService::new(
            Arc::clone(&store.accounts),
            hasher,
            validator,
            encoder,
        ));
        let venues = Arc::new(VenueService::new(
            Arc::clone(&store.venues),
            Arc::clone(&ownership),
        ));
        let catalogs = Arc::new(CatalogService::new(
            Arc::clone(&store.venues),
            Arc::clone(&store.catalogs),
            Arc::clone(&store.items),
            Arc::clone(&ownership),
        ));
        let items = Arc::new(ItemService::new(Arc::clone(&store.items), ownership));
        let likes = Arc::new(LikeService::new(Arc::clone(&store.items)));

        Ok(Self {
            config: Arc::new(config),
            store,
            sessions,
            accounts,
            venues,
            catalogs,
            items,
            likes,
        })
    }
}
