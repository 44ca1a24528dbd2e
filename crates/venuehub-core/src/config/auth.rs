//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder secret shipped in the defaults. Startup warns when it is in use.
pub const PLACEHOLDER_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Upper bound for token and cookie lifetimes, in days.
pub const MAX_LIFETIME_DAYS: i64 = 3650;

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token lifetime in days.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_days: i64,
    /// Lifetime of the session cookie in days.
    #[serde(default = "default_cookie_max_age")]
    pub cookie_max_age_days: i64,
    /// Whether the session cookie carries the `Secure` attribute.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2 work factor.
    #[serde(default)]
    pub argon2: Argon2Config,
    /// Elevated account created at startup when absent.
    #[serde(default)]
    pub bootstrap_admin: Option<BootstrapAdminConfig>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl(),
            cookie_max_age_days: default_cookie_max_age(),
            cookie_secure: false,
            password_min_length: default_password_min(),
            argon2: Argon2Config::default(),
            bootstrap_admin: None,
        }
    }
}

/// Argon2id parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of passes.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

/// Credentials of the elevated account seeded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapAdminConfig {
    /// Login email.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// First name.
    #[serde(default = "default_admin_first_name")]
    pub first_name: String,
    /// Last name.
    #[serde(default = "default_admin_last_name")]
    pub last_name: String,
}

fn default_jwt_secret() -> String {
    PLACEHOLDER_JWT_SECRET.to_string()
}

fn default_token_ttl() -> i64 {
    14
}

fn default_cookie_max_age() -> i64 {
    30
}

fn default_password_min() -> usize {
    8
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

fn default_admin_first_name() -> String {
    "Site".to_string()
}

fn default_admin_last_name() -> String {
    "Admin".to_string()
}
