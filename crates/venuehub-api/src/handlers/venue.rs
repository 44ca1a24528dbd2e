//! Venue handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use venuehub_core::types::AccountId;
use venuehub_entity::venue::Venue;

use crate::dto::request::VenueRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::path::VenuePath;
use crate::extractors::{ApiPath, ApiQuery, CurrentSession, ValidatedJson};
use crate::state::AppState;

/// Query string for `GET /venues`.
#[derive(Debug, Deserialize)]
pub struct VenueListQuery {
    /// Restrict to venues owned by this account.
    pub owner_id: Option<AccountId>,
}

/// GET /api/v1/venues
pub async fn list_venues(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<VenueListQuery>,
) -> Result<Json<ApiResponse<Vec<Venue>>>, ApiError> {
    let venues = state.venues.list(query.owner_id).await?;
    Ok(Json(ApiResponse::ok(venues)))
}

/// GET /api/v1/venues/{venue_id}
pub async fn get_venue(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<VenuePath>,
) -> Result<Json<ApiResponse<Venue>>, ApiError> {
    let venue = state.venues.get(path.venue_id).await?;
    Ok(Json(ApiResponse::ok(venue)))
}

/// POST /api/v1/venues
pub async fn create_venue(
    State(state): State<AppState>,
    session: CurrentSession,
    ValidatedJson(req): ValidatedJson<VenueRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Venue>>), ApiError> {
    let venue = state.venues.create(&session, req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message("venue created", venue)),
    ))
}

/// PUT /api/v1/venues/{venue_id}
pub async fn update_venue(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiPath(path): ApiPath<VenuePath>,
    ValidatedJson(req): ValidatedJson<VenueRequest>,
) -> Result<Json<ApiResponse<Venue>>, ApiError> {
    let venue = state
        .venues
        .update(&session, path.venue_id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok_with_message("venue updated", venue)))
}

/// DELETE /api/v1/venues/{venue_id}
pub async fn delete_venue(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiPath(path): ApiPath<VenuePath>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.venues.delete(&session, path.venue_id).await?;
    Ok(Json(ApiResponse::message("venue deleted")))
}
