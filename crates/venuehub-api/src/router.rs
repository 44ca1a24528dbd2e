//! Route definitions for the VenueHub HTTP API.
//!
//! All routes are mounted under `/api/v1`. Mutating resource routes sit
//! behind `require_auth`; signup and login behind `require_no_auth`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

const VENUE: &str = "/venues/{venue_id}";
const CATALOGS: &str = "/venues/{venue_id}/catalogs";
const CATALOG: &str = "/venues/{venue_id}/catalogs/{catalog_id}";
const ITEMS: &str = "/venues/{venue_id}/catalogs/{catalog_id}/items";
const ITEM: &str = "/venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}";
const ITEM_ACTION: &str = "/venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}/{action}";

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let server = &config.server;

    let api_routes = Router::new()
        .merge(anonymous_routes(state.clone()))
        .merge(protected_routes(state.clone()))
        .merge(public_routes());

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_seconds,
        )))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&server.cors))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Signup and login: only for callers without a valid session.
fn anonymous_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_no_auth,
        ))
}

/// Everything that needs a session.
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/logout", post(handlers::auth::logout))
        .route("/venues", post(handlers::venue::create_venue))
        .route(
            VENUE,
            put(handlers::venue::update_venue).delete(handlers::venue::delete_venue),
        )
        .route(CATALOGS, post(handlers::catalog::create_catalog))
        .route(
            CATALOG,
            put(handlers::catalog::update_catalog).delete(handlers::catalog::delete_catalog),
        )
        .route(ITEMS, post(handlers::item::create_item))
        .route(
            ITEM,
            put(handlers::item::update_item).delete(handlers::item::delete_item),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}

/// Reads, likes, and health: no session involved.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/venues", get(handlers::venue::list_venues))
        .route(VENUE, get(handlers::venue::get_venue))
        .route(CATALOGS, get(handlers::catalog::list_catalogs))
        .route(CATALOG, get(handlers::catalog::get_catalog))
        .route(ITEM, get(handlers::item::get_item))
        .route(ITEM_ACTION, put(handlers::item::apply_like))
}
