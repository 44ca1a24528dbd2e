//! Typed path parameters with validation-style rejections.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use venuehub_core::error::AppError;
use venuehub_core::types::{CatalogId, ItemId, VenueId};

use crate::error::ApiError;

/// Like [`Path`], but a malformed segment is a 400 in the JSON envelope.
#[derive(Debug, Clone, Copy)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| ApiPath(value))
            .map_err(|rejection| AppError::validation(rejection.body_text()).into())
    }
}

/// `/venues/{venue_id}`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VenuePath {
    /// Venue id.
    pub venue_id: VenueId,
}

/// `/venues/{venue_id}/catalogs/{catalog_id}`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CatalogPath {
    /// Venue id.
    pub venue_id: VenueId,
    /// Catalog id within the venue.
    pub catalog_id: CatalogId,
}

/// `/venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ItemPath {
    /// Venue id.
    pub venue_id: VenueId,
    /// Catalog id within the venue.
    pub catalog_id: CatalogId,
    /// Item id within the catalog.
    pub item_id: ItemId,
}

/// `/venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}/{action}`
#[derive(Debug, Clone, Deserialize)]
pub struct ItemActionPath {
    /// Venue id.
    pub venue_id: VenueId,
    /// Catalog id within the venue.
    pub catalog_id: CatalogId,
    /// Item id within the catalog.
    pub item_id: ItemId,
    /// `like` or `unlike`.
    pub action: String,
}
