use crate::credentials::ServiceCredentials;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenConfig;
use crate::token::TokenError;
use crate::token::TokenIssuer;
use crate::token::TokenValidator;

/// Authentication coordinator combining the password hasher, the token
/// issuer/validator pair, and the service-account credential gate.
///
/// One instance is constructed at startup from immutable configuration and
/// shared read-only across requests; every operation is a stateless, pure
/// computation over its inputs.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_validator: TokenValidator,
    service_credentials: ServiceCredentials,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_config` - Issuer/audience/key/TTL configuration shared by
    ///   issuance and validation
    /// * `service_credentials` - Credential pair accepted on the token
    ///   endpoint
    pub fn new(token_config: &TokenConfig, service_credentials: ServiceCredentials) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(token_config),
            token_validator: TokenValidator::new(token_config),
            service_credentials,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// Malformed digests are a non-match, never an error.
    pub fn verify_password(&self, password: &str, digest: &str) -> bool {
        self.password_hasher.verify(password, digest)
    }

    /// Check the service-account credential pair and issue a bearer token.
    ///
    /// The one anonymous operation: exact-match the presented pair against
    /// the configured credentials, then sign a token for the username. No
    /// side effects on mismatch.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Presented pair does not match exactly
    /// * `Token` - Token signing failed
    pub fn issue_token(&self, username: &str, password: &str) -> Result<String, AuthenticationError> {
        if !self.service_credentials.matches(username, password) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_issuer.issue(username)?)
    }

    /// Validate a presented bearer token.
    ///
    /// # Returns
    /// The verified claims on acceptance.
    ///
    /// # Errors
    /// * `TokenError` - One variant per rejection reason
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_validator.validate(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_authenticator() -> Authenticator {
        let config = TokenConfig::new(
            "test-issuer",
            "test-audience",
            b"test_secret_key_at_least_32_bytes!",
        );
        Authenticator::new(&config, ServiceCredentials::new("admin@example.com", "s3cret!"))
    }

    #[test]
    fn test_issue_token_with_matching_credentials() {
        let authenticator = test_authenticator();

        let token = authenticator
            .issue_token("admin@example.com", "s3cret!")
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = authenticator
            .validate_token(&token)
            .expect("Failed to validate token");
        assert_eq!(claims.sub, "admin@example.com");
    }

    #[test]
    fn test_issue_token_rejects_bad_credentials() {
        let authenticator = test_authenticator();

        let result = authenticator.issue_token("admin@example.com", "wrong");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hash_and_verify_password() {
        let authenticator = test_authenticator();

        let digest = authenticator
            .hash_password("password123")
            .expect("Failed to hash password");

        assert!(authenticator.verify_password("password123", &digest));
        assert!(!authenticator.verify_password("wrong", &digest));
    }

    #[test]
    fn test_validate_rejects_garbage_token() {
        let authenticator = test_authenticator();

        assert!(authenticator.validate_token("invalid.token.here").is_err());
    }
}
