use jsonwebtoken::decode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::config::TokenConfig;
use super::errors::TokenError;

/// Gate that accepts or rejects presented bearer tokens.
///
/// Checks, rejecting on the first failure: structural parse, signature under
/// the configured key and algorithm (any other declared algorithm is
/// rejected outright), exact issuer match, exact audience match, and - only
/// when `validate_lifetime` is enabled - expiry. With lifetime validation
/// off (the default) expired tokens are accepted; validity is then purely a
/// function of signature, issuer, and audience.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    /// Create a validator from the same configuration used at issuance.
    pub fn new(config: &TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = config.validate_lifetime;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(&config.secret),
            validation,
        }
    }

    /// Decide accept or reject for a presented token string.
    ///
    /// # Returns
    /// The verified claims, which the caller may expose to wrapped handlers.
    ///
    /// # Errors
    /// One [`TokenError`] variant per rejection reason; see type docs for
    /// the check order.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::from)
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::encode;
    use jsonwebtoken::EncodingKey;
    use jsonwebtoken::Header;

    use super::*;
    use crate::token::issuer::TokenIssuer;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn test_config() -> TokenConfig {
        TokenConfig::new("test-issuer", "test-audience", SECRET)
    }

    #[test]
    fn test_roundtrip_with_matching_configuration() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let validator = TokenValidator::new(&config);

        let token = issuer.issue("alice@example.com").expect("Failed to issue");
        let claims = validator.validate(&token).expect("Failed to validate");

        assert_eq!(claims.sub, "alice@example.com");
    }

    #[test]
    fn test_rejects_malformed_token() {
        let validator = TokenValidator::new(&test_config());

        assert!(matches!(
            validator.validate("not-a-token"),
            Err(TokenError::Malformed(_))
        ));
        assert!(validator.validate("a.b.c").is_err());
    }

    #[test]
    fn test_rejects_wrong_key() {
        let issuing_config = test_config();
        let issuer = TokenIssuer::new(&issuing_config);

        let other_config =
            TokenConfig::new("test-issuer", "test-audience", b"another_secret_32_bytes_long!!!");
        let validator = TokenValidator::new(&other_config);

        let token = issuer.issue("alice@example.com").expect("Failed to issue");

        assert!(matches!(
            validator.validate(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_rejects_wrong_issuer() {
        let issuer = TokenIssuer::new(&test_config());
        let validator =
            TokenValidator::new(&TokenConfig::new("other-issuer", "test-audience", SECRET));

        let token = issuer.issue("alice@example.com").expect("Failed to issue");

        assert!(matches!(
            validator.validate(&token),
            Err(TokenError::IssuerMismatch)
        ));
    }

    #[test]
    fn test_rejects_wrong_audience() {
        let issuer = TokenIssuer::new(&test_config());
        let validator =
            TokenValidator::new(&TokenConfig::new("test-issuer", "other-audience", SECRET));

        let token = issuer.issue("alice@example.com").expect("Failed to issue");

        assert!(matches!(
            validator.validate(&token),
            Err(TokenError::AudienceMismatch)
        ));
    }

    #[test]
    fn test_rejects_tampered_signature() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let validator = TokenValidator::new(&config);

        let token = issuer.issue("alice@example.com").expect("Failed to issue");

        // Flip one byte of the signature segment, keeping valid base64url.
        let (payload, signature) = token.rsplit_once('.').expect("compact token");
        let mut flipped = signature.to_string();
        let replacement = if flipped.starts_with('A') { "B" } else { "A" };
        flipped.replace_range(0..1, replacement);
        let tampered = format!("{payload}.{flipped}");

        assert!(matches!(
            validator.validate(&tampered),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_rejects_algorithm_substitution() {
        let config = test_config();
        let validator = TokenValidator::new(&config);

        // Same key, same claims, but signed with HS256 instead of HS512.
        let claims = Claims::for_subject(
            "alice@example.com",
            &config.issuer,
            &config.audience,
            config.ttl,
        );
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode");

        assert!(matches!(
            validator.validate(&token),
            Err(TokenError::InvalidAlgorithm)
        ));
    }

    #[test]
    fn test_expired_token_accepted_when_lifetime_validation_off() {
        // Reference behavior: lifetime validation disabled by default.
        let config = test_config().with_ttl_minutes(-10);
        let issuer = TokenIssuer::new(&config);
        let validator = TokenValidator::new(&config);

        let token = issuer.issue("alice@example.com").expect("Failed to issue");
        let claims = validator.validate(&token).expect("Failed to validate");

        assert!(claims.is_expired(chrono::Utc::now().timestamp()));
    }

    #[test]
    fn test_expired_token_rejected_when_lifetime_validation_on() {
        let config = test_config()
            .with_ttl_minutes(-10)
            .with_lifetime_validation(true);
        let issuer = TokenIssuer::new(&config);
        let validator = TokenValidator::new(&config);

        let token = issuer.issue("alice@example.com").expect("Failed to issue");

        assert!(matches!(
            validator.validate(&token),
            Err(TokenError::Expired)
        ));
    }
}
