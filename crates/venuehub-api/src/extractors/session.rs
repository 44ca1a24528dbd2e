//! `CurrentSession` extractor: reads the session placed by `require_auth`.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use venuehub_auth::session::Session;
use venuehub_core::error::AppError;

use crate::error::ApiError;

/// The authenticated session of the current request.
///
/// Only available on routes behind the `require_auth` middleware; elsewhere
/// extraction fails with 401.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl std::ops::Deref for CurrentSession {
    type Target = Session;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(CurrentSession)
            .ok_or_else(|| AppError::authentication("unauthorized").into())
    }
}
