//! Catalog handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use venuehub_entity::catalog::Catalog;
use venuehub_service::CatalogWithItems;

use crate::dto::request::CatalogRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::path::{CatalogPath, VenuePath};
use crate::extractors::{ApiPath, CurrentSession, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/venues/{venue_id}/catalogs
pub async fn list_catalogs(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<VenuePath>,
) -> Result<Json<ApiResponse<Vec<Catalog>>>, ApiError> {
    let catalogs = state.catalogs.list(path.venue_id).await?;
    Ok(Json(ApiResponse::ok(catalogs)))
}

/// GET /api/v1/venues/{venue_id}/catalogs/{catalog_id}
pub async fn get_catalog(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<CatalogPath>,
) -> Result<Json<ApiResponse<CatalogWithItems>>, ApiError> {
    let catalog = state.catalogs.get(path.venue_id, path.catalog_id).await?;
    Ok(Json(ApiResponse::ok(catalog)))
}

/// POST /api/v1/venues/{venue_id}/catalogs
pub async fn create_catalog(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiPath(path): ApiPath<VenuePath>,
    ValidatedJson(req): ValidatedJson<CatalogRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Catalog>>), ApiError> {
    let catalog = state
        .catalogs
        .create(&session, path.venue_id, req.into())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message("catalog created", catalog)),
    ))
}

/// PUT /api/v1/venues/{venue_id}/catalogs/{catalog_id}
pub async fn update_catalog(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiPath(path): ApiPath<CatalogPath>,
    ValidatedJson(req): ValidatedJson<CatalogRequest>,
) -> Result<Json<ApiResponse<Catalog>>, ApiError> {
    let catalog = state
        .catalogs
        .update(&session, path.venue_id, path.catalog_id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok_with_message("catalog updated", catalog)))
}

/// DELETE /api/v1/venues/{venue_id}/catalogs/{catalog_id}
pub async fn delete_catalog(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiPath(path): ApiPath<CatalogPath>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .catalogs
        .delete(&session, path.venue_id, path.catalog_id)
        .await?;
    Ok(Json(ApiResponse::message("catalog deleted")))
}
