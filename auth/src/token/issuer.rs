use chrono::Duration;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::config::TokenConfig;
use super::errors::TokenError;

/// Builds and signs bearer tokens for verified identities.
///
/// Produces standard three-part compact JWTs signed with HMAC-SHA-512, so
/// any compliant client library can parse them. Stateless; the only input
/// besides the subject is the immutable [`TokenConfig`].
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    issuer: String,
    audience: String,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer from token configuration.
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl: config.ttl,
        }
    }

    /// Issue a signed, time-boxed token for a verified subject.
    ///
    /// Claims carry the subject, an email-style claim mirroring it, a fresh
    /// unique `jti`, the configured issuer and audience, and an absolute
    /// expiry of issue time plus the configured TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claim serialization or signing failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let claims = Claims::for_subject(subject, &self.issuer, &self.audience, self.ttl);
        let header = Header::new(Algorithm::HS512);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::validator::TokenValidator;

    fn test_config() -> TokenConfig {
        TokenConfig::new(
            "test-issuer",
            "test-audience",
            b"test_secret_key_at_least_32_bytes!",
        )
    }

    #[test]
    fn test_issue_produces_compact_token() {
        let issuer = TokenIssuer::new(&test_config());

        let token = issuer.issue("alice@example.com").expect("Failed to issue");

        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_issued_tokens_never_collide() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let validator = TokenValidator::new(&config);

        let first = issuer.issue("alice@example.com").expect("Failed to issue");
        let second = issuer.issue("alice@example.com").expect("Failed to issue");

        assert_ne!(first, second);

        let first_claims = validator.validate(&first).expect("Failed to validate");
        let second_claims = validator.validate(&second).expect("Failed to validate");
        assert_ne!(first_claims.jti, second_claims.jti);
    }

    #[test]
    fn test_issued_claims_carry_configuration() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let validator = TokenValidator::new(&config);

        let token = issuer.issue("alice@example.com").expect("Failed to issue");
        let claims = validator.validate(&token).expect("Failed to validate");

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.aud, "test-audience");
        assert_eq!(claims.exp - claims.iat, 5 * 60);
    }
}
