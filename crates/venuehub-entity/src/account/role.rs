//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles an account can hold.
///
/// There is exactly one elevated role. It bypasses ownership checks but
/// never authentication.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Regular account created through signup.
    #[default]
    Standard,
    /// Administrative account.
    Elevated,
}

impl AccountRole {
    /// Check if this role is the elevated role.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::Elevated)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Elevated => "elevated",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = venuehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "elevated" => Ok(Self::Elevated),
            _ => Err(venuehub_core::AppError::validation(format!(
                "Invalid account role: '{s}'. Expected one of: standard, elevated"
            ))),
        }
    }
}
