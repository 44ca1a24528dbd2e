//! Password policy enforcement for new passwords.

use venuehub_core::config::AuthConfig;
use venuehub_core::error::AppError;

/// Validates new passwords against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password, counting characters rather than bytes.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length() {
        let validator = PasswordValidator::new(&AuthConfig::default());
        assert!(validator.validate("1234567").is_err());
        assert!(validator.validate("12345678").is_ok());
    }

    #[test]
    fn test_counts_characters() {
        let validator = PasswordValidator::new(&AuthConfig::default());
        // 7 characters, 14 bytes
        assert!(validator.validate("ґґґґґґґ").is_err());
    }
}
