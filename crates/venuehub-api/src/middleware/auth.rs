//! Session-cookie guards.
//!
//! `require_auth` resolves the `user_jwt` cookie into a [`Session`] and
//! stores it in request extensions for the `CurrentSession` extractor.
//! `require_no_auth` turns away callers that already hold a valid token.
//!
//! [`Session`]: venuehub_auth::session::Session

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "user_jwt";

fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string())
}

/// Rejects the request with 401 unless the cookie holds a valid session.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = session_token(&jar);
    let session = state
        .sessions
        .require_auth(token.as_deref(), Utc::now())
        .await?;

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

/// Rejects the request with 403 when the cookie holds a valid session.
pub async fn require_no_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = session_token(&jar);
    state.sessions.require_no_auth(token.as_deref(), Utc::now())?;
    Ok(next.run(request).await)
}
