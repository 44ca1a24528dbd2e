//! Auth handlers: signup, login, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;

use venuehub_core::config::AuthConfig;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{CurrentSession, ValidatedJson};
use crate::middleware::auth::SESSION_COOKIE;
use crate::state::AppState;

fn session_cookie(token: String, config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(time::Duration::days(config.cookie_max_age_days))
        .build()
}

fn cleared_cookie(config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(time::Duration::seconds(-1))
        .build()
}

/// POST /api/v1/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    state.accounts.signup(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::message("user created"))))
}

/// POST /api/v1/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<()>>), ApiError> {
    let outcome = state
        .accounts
        .login(&req.email, &req.password, Utc::now())
        .await?;

    let jar = jar.add(session_cookie(outcome.token.token, &state.config.auth));
    let message = format!("logged in as {}", outcome.account.full_name());
    Ok((jar, Json(ApiResponse::message(message))))
}

/// POST /api/v1/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    session: CurrentSession,
) -> (CookieJar, Json<ApiResponse<()>>) {
    tracing::info!(account_id = %session.account_id(), "Account logged out");
    let jar = jar.add(cleared_cookie(&state.config.auth));
    (jar, Json(ApiResponse::message("logged out")))
}
