//! Account signup, login, and bootstrap of the elevated account.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use validator::ValidateEmail;

use venuehub_auth::jwt::{IssuedToken, JwtEncoder};
use venuehub_auth::password::{PasswordHasher, PasswordValidator};
use venuehub_core::config::BootstrapAdminConfig;
use venuehub_core::error::{AppError, ErrorKind};
use venuehub_core::result::AppResult;
use venuehub_database::AccountStore;
use venuehub_entity::account::{Account, AccountRole, NewAccount};

const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Data submitted at signup.
#[derive(Debug, Clone)]
pub struct SignupInput {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// A successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated account.
    pub account: Account,
    /// The session token to hand to the client.
    pub token: IssuedToken,
}

/// Handles account creation and credential checks.
#[derive(Debug, Clone)]
pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a standard account. No session is created.
    pub async fn signup(&self, input: SignupInput) -> AppResult<Account> {
        let first_name = input.first_name.trim();
        let last_name = input.last_name.trim();
        let email = input.email.trim().to_lowercase();

        if first_name.is_empty() || last_name.is_empty() {
            return Err(AppError::validation("First and last name are required"));
        }
        if !email.validate_email() {
            return Err(AppError::validation("Invalid email format"));
        }
        self.validator.validate(&input.password)?;

        let password_hash = self.hash(input.password).await?;
        let account = self
            .accounts
            .create(&NewAccount {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email,
                password_hash,
                role: AccountRole::Standard,
            })
            .await?;

        info!(account_id = %account.id, "Account registered");
        Ok(account)
    }

    /// Checks credentials and issues a session token valid from `now`.
    ///
    /// Unknown emails and wrong passwords fail identically.
    pub async fn login(&self, email: &str, password: &str, now: DateTime<Utc>) -> AppResult<LoginOutcome> {
        let email = email.trim();
        let Some(account) = self.accounts.find_by_email(email).await? else {
            self.verify_decoy(password.to_string()).await?;
            debug!("Login attempt for unknown email");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self
            .verify(password.to_string(), account.password_hash.clone())
            .await?
        {
            debug!(account_id = %account.id, "Login attempt with wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let token = self.encoder.issue(account.id, now)?;
        info!(account_id = %account.id, "Account logged in");
        Ok(LoginOutcome { account, token })
    }

    /// Creates the configured elevated account unless its email is taken.
    ///
    /// Returns the account when one was created.
    pub async fn ensure_bootstrap_admin(
        &self,
        config: &BootstrapAdminConfig,
    ) -> AppResult<Option<Account>> {
        if let Some(existing) = self.accounts.find_by_email(&config.email).await? {
            if !existing.is_elevated() {
                warn!(
                    account_id = %existing.id,
                    "Bootstrap admin email belongs to a standard account; role left unchanged"
                );
            }
            return Ok(None);
        }

        self.validator.validate(&config.password)?;
        let password_hash = self.hash(config.password.clone()).await?;
        let account = self
            .accounts
            .create(&NewAccount {
                first_name: config.first_name.clone(),
                last_name: config.last_name.clone(),
                email: config.email.trim().to_lowercase(),
                password_hash,
                role: AccountRole::Elevated,
            })
            .await?;

        info!(account_id = %account.id, "Elevated account bootstrapped");
        Ok(Some(account))
    }

    async fn hash(&self, password: String) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Password hashing task failed", e))?
    }

    async fn verify(&self, password: String, hash: String) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Password verification task failed", e)
            })
    }

    async fn verify_decoy(&self, password: String) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify_decoy(&password))
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Password verification task failed", e)
            })
    }
}
