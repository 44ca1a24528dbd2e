//! Owner-chain authorization for mutating operations.
//!
//! Resolution order:
//! 1. Existence: a path that does not resolve is reported as not found.
//! 2. Elevated bypass: the elevated role may act on any existing resource.
//! 3. Owner check: the caller must be the root owner of the path.
//!
//! A denial is reported exactly like a missing resource.

use std::sync::Arc;

use tracing::debug;

use venuehub_core::error::AppError;
use venuehub_core::result::AppResult;
use venuehub_core::types::AccountId;
use venuehub_database::OwnershipStore;
use venuehub_entity::ownership::ResourcePath;

use crate::rbac::bypasses_ownership_check;
use crate::session::Session;

/// Why access was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessSource {
    /// The caller holds the elevated role.
    ElevatedBypass,
    /// The caller owns the root of the chain.
    Owner,
}

/// Authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The operation may proceed.
    Allow(AccessSource),
    /// The resource is not the caller's; surfaced as not found.
    Deny,
}

impl Decision {
    /// Whether the decision grants access.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow(_))
    }
}

/// Pure decision over an already-resolved root owner.
pub fn authorize(session: &Session, root_owner: Option<AccountId>) -> Decision {
    if bypasses_ownership_check(session.role()) {
        return Decision::Allow(AccessSource::ElevatedBypass);
    }
    if root_owner == Some(session.account_id()) {
        return Decision::Allow(AccessSource::Owner);
    }
    Decision::Deny
}

/// Resolves root owners from the store and applies [`authorize`].
#[derive(Debug, Clone)]
pub struct OwnershipResolver {
    store: Arc<dyn OwnershipStore>,
}

impl OwnershipResolver {
    /// Creates a resolver over the ownership store.
    pub fn new(store: Arc<dyn OwnershipStore>) -> Self {
        Self { store }
    }

    /// Require that `session` may mutate the resource at `path`.
    ///
    /// Missing resources and foreign resources both yield the same
    /// not-found error.
    pub async fn require(&self, session: &Session, path: &ResourcePath) -> AppResult<AccessSource> {
        let Some(owner) = self.store.resolve_root_owner(path).await? else {
            debug!(path = %path, account_id = %session.account_id(), "Resource path does not resolve");
            return Err(AppError::resource_not_found());
        };

        match authorize(session, Some(owner)) {
            Decision::Allow(source) => Ok(source),
            Decision::Deny => {
                debug!(
                    path = %path,
                    account_id = %session.account_id(),
                    owner_id = %owner,
                    "Ownership check denied"
                );
                Err(AppError::resource_not_found())
            }
        }
    }
}
