//! Session resolution for the `RequireAuth` and `RequireNoAuth` guards.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use venuehub_core::error::AppError;
use venuehub_core::result::AppResult;
use venuehub_core::types::AccountId;
use venuehub_database::AccountStore;

use super::context::Session;
use crate::jwt::{JwtDecoder, TokenError};

/// Outcome of resolving the session token presented with a request.
#[derive(Debug, Clone)]
pub enum SessionState {
    /// No token was presented.
    NoToken,
    /// The token failed signature, algorithm, or format checks.
    InvalidToken(TokenError),
    /// The token verified but is past its expiry.
    Expired,
    /// The token verified but its subject no longer exists.
    ValidNoAccount(AccountId),
    /// The token verified and its account was loaded.
    Valid(Session),
}

/// Resolves request tokens into sessions.
#[derive(Debug, Clone)]
pub struct SessionResolver {
    decoder: Arc<JwtDecoder>,
    accounts: Arc<dyn AccountStore>,
}

impl SessionResolver {
    /// Creates a resolver over the token decoder and account store.
    pub fn new(decoder: Arc<JwtDecoder>, accounts: Arc<dyn AccountStore>) -> Self {
        Self { decoder, accounts }
    }

    /// Resolve a token into a [`SessionState`].
    ///
    /// Store failures are returned as errors; every other outcome is a state.
    pub async fn resolve(&self, token: Option<&str>, now: DateTime<Utc>) -> AppResult<SessionState> {
        let Some(token) = token else {
            return Ok(SessionState::NoToken);
        };

        let claims = match self.decoder.verify(token, now) {
            Ok(claims) => claims,
            Err(TokenError::Expired) => return Ok(SessionState::Expired),
            Err(e) => return Ok(SessionState::InvalidToken(e)),
        };

        match self.accounts.find_by_id(claims.account_id()).await? {
            Some(account) => Ok(SessionState::Valid(Session {
                account,
                expires_at: claims.expires_at(),
            })),
            None => Ok(SessionState::ValidNoAccount(claims.account_id())),
        }
    }

    /// `RequireAuth`: only a [`SessionState::Valid`] token passes.
    pub async fn require_auth(&self, token: Option<&str>, now: DateTime<Utc>) -> AppResult<Session> {
        match self.resolve(token, now).await? {
            SessionState::Valid(session) => Ok(session),
            SessionState::NoToken => {
                debug!("Rejected request without session token");
                Err(AppError::authentication("unauthorized"))
            }
            SessionState::InvalidToken(reason) => Err(reason.into()),
            SessionState::Expired => Err(TokenError::Expired.into()),
            SessionState::ValidNoAccount(account_id) => {
                debug!(account_id = %account_id, "Session token subject does not exist");
                Err(AppError::authentication("unauthorized"))
            }
        }
    }

    /// `RequireNoAuth`: rejects only a token that currently verifies.
    ///
    /// Invalid or expired tokens are treated as anonymous. The account store
    /// is not consulted.
    pub fn require_no_auth(&self, token: Option<&str>, now: DateTime<Utc>) -> AppResult<()> {
        match token.map(|t| self.decoder.verify(t, now)) {
            Some(Ok(claims)) => {
                debug!(account_id = %claims.account_id(), "Caller is already authenticated");
                Err(AppError::already_authenticated("already authenticated"))
            }
            Some(Err(_)) | None => Ok(()),
        }
    }
}
