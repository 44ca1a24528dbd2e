//! # venuehub-api
//!
//! HTTP API layer for VenueHub built on Axum.
//!
//! Provides the REST endpoints under `/api/v1`, the session-cookie guards,
//! extractors, DTOs, and the mapping from `AppError` to the JSON envelope.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
