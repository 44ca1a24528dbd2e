//! # venuehub-service
//!
//! Use-case layer for VenueHub. Each service orchestrates the store,
//! credential hashing, token issuance, and ownership authorization.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod catalog;
pub mod item;
pub mod venue;

pub use account::{AccountService, LoginOutcome, SignupInput};
pub use catalog::{CatalogService, CatalogWithItems};
pub use item::{ItemService, LikeService};
pub use venue::VenueService;
