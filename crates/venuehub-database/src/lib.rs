//! # venuehub-database
//!
//! Store abstractions for VenueHub with two backends: PostgreSQL
//! repositories built on sqlx, and an in-memory store used for local
//! development and tests. [`Store`] selects one from configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{AccountStore, CatalogStore, ItemStore, OwnershipStore, Store, VenueStore};
