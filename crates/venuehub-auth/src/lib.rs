//! # venuehub-auth
//!
//! Authentication and authorization for VenueHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id credential hashing and signup password policy
//! - `jwt`: HS256 session token issuance and verification
//! - `session`: request session resolution (`RequireAuth` / `RequireNoAuth`)
//! - `rbac`: role policy (which roles bypass ownership checks)
//! - `ownership`: owner-chain authorization for mutating operations

pub mod jwt;
pub mod ownership;
pub mod password;
pub mod rbac;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use ownership::{Decision, OwnershipResolver};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::{Session, SessionResolver, SessionState};
