//! Catalog domain entities.

pub mod model;

pub use model::{Catalog, CatalogFields};
