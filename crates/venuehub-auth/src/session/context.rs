//! Typed per-request session context.

use chrono::{DateTime, Utc};

use venuehub_core::types::AccountId;
use venuehub_entity::account::{Account, AccountRole};

/// The authenticated account attached to one in-flight request.
#[derive(Debug, Clone)]
pub struct Session {
    /// The resolved account.
    pub account: Account,
    /// When the presented token expires.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// The caller's account id.
    pub fn account_id(&self) -> AccountId {
        self.account.id
    }

    /// The caller's role.
    pub fn role(&self) -> AccountRole {
        self.account.role
    }
}
