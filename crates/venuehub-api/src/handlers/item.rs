//! Item handlers, including like/unlike.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use venuehub_entity::item::{Item, LikeAction};

use crate::dto::request::ItemRequest;
use crate::dto::response::{ApiResponse, LikesResponse};
use crate::error::ApiError;
use crate::extractors::path::{CatalogPath, ItemActionPath, ItemPath};
use crate::extractors::{ApiPath, CurrentSession, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}
pub async fn get_item(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<ItemPath>,
) -> Result<Json<ApiResponse<Item>>, ApiError> {
    let item = state
        .items
        .get(path.venue_id, path.catalog_id, path.item_id)
        .await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /api/v1/venues/{venue_id}/catalogs/{catalog_id}/items
pub async fn create_item(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiPath(path): ApiPath<CatalogPath>,
    ValidatedJson(req): ValidatedJson<ItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Item>>), ApiError> {
    let item = state
        .items
        .create(&session, path.venue_id, path.catalog_id, req.into())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message("item created", item)),
    ))
}

/// PUT /api/v1/venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}
pub async fn update_item(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiPath(path): ApiPath<ItemPath>,
    ValidatedJson(req): ValidatedJson<ItemRequest>,
) -> Result<Json<ApiResponse<Item>>, ApiError> {
    let item = state
        .items
        .update(&session, path.venue_id, path.catalog_id, path.item_id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok_with_message("item updated", item)))
}

/// DELETE /api/v1/venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}
pub async fn delete_item(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiPath(path): ApiPath<ItemPath>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .items
        .delete(&session, path.venue_id, path.catalog_id, path.item_id)
        .await?;
    Ok(Json(ApiResponse::message("item deleted")))
}

/// PUT /api/v1/venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}/{action}
pub async fn apply_like(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<ItemActionPath>,
) -> Result<Json<ApiResponse<LikesResponse>>, ApiError> {
    let action: LikeAction = path.action.parse()?;
    let likes_count = state
        .likes
        .apply(path.venue_id, path.catalog_id, path.item_id, action)
        .await?;
    Ok(Json(ApiResponse::ok(LikesResponse {
        id: path.item_id,
        likes_count,
    })))
}
