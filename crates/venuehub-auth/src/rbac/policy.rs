//! Which roles skip the ownership check.

use venuehub_entity::account::AccountRole;

/// Whether `role` may act on resources it does not own.
///
/// Authentication is still required for every role.
pub fn bypasses_ownership_check(role: AccountRole) -> bool {
    match role {
        AccountRole::Elevated => true,
        AccountRole::Standard => false,
    }
}
