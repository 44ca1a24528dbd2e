//! PostgreSQL implementations of the store traits.

pub mod account;
pub mod catalog;
pub mod health;
pub mod item;
pub mod ownership;
pub mod venue;

pub use account::AccountRepository;
pub use catalog::CatalogRepository;
pub use health::PgHealth;
pub use item::ItemRepository;
pub use ownership::OwnershipRepository;
pub use venue::VenueRepository;
