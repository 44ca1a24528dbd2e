//! Catalog use cases.

pub mod service;

pub use service::{CatalogService, CatalogWithItems};
