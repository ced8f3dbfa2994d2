use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// JWT claims embedded in every issued token.
///
/// Standard RFC 7519 claims; the `email` claim mirrors the subject because
/// usernames in this system are email-style identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the authenticated username)
    pub sub: String,

    /// Email-style claim, mirrors the subject
    pub email: String,

    /// JWT ID, a fresh UUID v4 per issued token
    pub jti: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a verified subject.
    ///
    /// Stamps `iat` with the current time, `exp` with `iat + ttl`, and a
    /// freshly generated `jti` so two tokens for the same subject never
    /// collide.
    ///
    /// # Arguments
    /// * `subject` - Authenticated username
    /// * `issuer` - Configured issuer
    /// * `audience` - Configured audience
    /// * `ttl` - Token lifetime
    pub fn for_subject(subject: &str, issuer: &str, audience: &str, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + ttl;

        Self {
            sub: subject.to_string(),
            email: subject.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject(
            "alice@example.com",
            "my-issuer",
            "my-audience",
            Duration::minutes(5),
        );

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.iss, "my-issuer");
        assert_eq!(claims.aud, "my-audience");
        assert_eq!(claims.exp - claims.iat, 5 * 60);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_jti_is_unique() {
        let ttl = Duration::minutes(5);
        let first = Claims::for_subject("alice", "iss", "aud", ttl);
        let second = Claims::for_subject("alice", "iss", "aud", ttl);

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_is_expired() {
        let mut claims = Claims::for_subject("alice", "iss", "aud", Duration::minutes(5));
        claims.exp = 1000;

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
