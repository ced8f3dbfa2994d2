use chrono::Duration;

/// Default token lifetime in minutes.
const DEFAULT_TTL_MINUTES: i64 = 5;

/// Immutable token configuration shared by [`TokenIssuer`] and
/// [`TokenValidator`].
///
/// Built once from application configuration at startup and passed in at
/// construction time. The signing secret is operator-supplied and never
/// derived from request data.
///
/// [`TokenIssuer`]: crate::token::TokenIssuer
/// [`TokenValidator`]: crate::token::TokenValidator
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Issuer embedded in every token and matched exactly at validation.
    pub issuer: String,
    /// Audience embedded in every token and matched exactly at validation.
    pub audience: String,
    /// HMAC-SHA-512 signing secret.
    pub secret: Vec<u8>,
    /// Token lifetime; expiry is an absolute timestamp, no sliding window.
    pub ttl: Duration,
    /// Whether validation rejects expired tokens. Defaults to false: expired
    /// tokens are accepted, matching the reference behavior this service
    /// preserves. Enable explicitly to get strict expiry checking.
    pub validate_lifetime: bool,
}

impl TokenConfig {
    /// Create a token configuration with the default 5 minute TTL and
    /// lifetime validation disabled.
    pub fn new(issuer: impl Into<String>, audience: impl Into<String>, secret: &[u8]) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
            secret: secret.to_vec(),
            ttl: Duration::minutes(DEFAULT_TTL_MINUTES),
            validate_lifetime: false,
        }
    }

    /// Set the token lifetime in minutes.
    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.ttl = Duration::minutes(minutes);
        self
    }

    /// Enable or disable expiry checking at validation time.
    pub fn with_lifetime_validation(mut self, enabled: bool) -> Self {
        self.validate_lifetime = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TokenConfig::new("issuer", "audience", b"secret");

        assert_eq!(config.ttl, Duration::minutes(5));
        assert!(!config.validate_lifetime);
    }

    #[test]
    fn test_builder_overrides() {
        let config = TokenConfig::new("issuer", "audience", b"secret")
            .with_ttl_minutes(30)
            .with_lifetime_validation(true);

        assert_eq!(config.ttl, Duration::minutes(30));
        assert!(config.validate_lifetime);
    }
}
