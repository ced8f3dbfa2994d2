//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the note-taking backend:
//! - Password hashing (Argon2id)
//! - JWT bearer token issuance and validation (HS512)
//! - Service-account credential checking
//!
//! The service defines its own domain traits and adapts these implementations.
//! Token behavior is driven entirely by an immutable [`TokenConfig`] built once
//! at startup; nothing in this crate reads ambient global state.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("wrong_password", &digest));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenConfig, TokenIssuer, TokenValidator};
//!
//! let config = TokenConfig::new("my-issuer", "my-audience", b"secret_key_at_least_32_bytes_long!");
//! let issuer = TokenIssuer::new(&config);
//! let validator = TokenValidator::new(&config);
//!
//! let token = issuer.issue("alice@example.com").unwrap();
//! let claims = validator.validate(&token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, ServiceCredentials, TokenConfig};
//!
//! let config = TokenConfig::new("my-issuer", "my-audience", b"secret_key_at_least_32_bytes_long!");
//! let credentials = ServiceCredentials::new("admin@example.com", "hunter2");
//! let auth = Authenticator::new(&config, credentials);
//!
//! // Register: hash password
//! let digest = auth.hash_password("password123").unwrap();
//!
//! // Login: verify against the stored digest
//! assert!(auth.verify_password("password123", &digest));
//!
//! // Token endpoint: exact-match service credentials, then issue
//! let token = auth.issue_token("admin@example.com", "hunter2").unwrap();
//! let claims = auth.validate_token(&token).unwrap();
//! assert_eq!(claims.sub, "admin@example.com");
//! ```

pub mod authenticator;
pub mod credentials;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use credentials::ServiceCredentials;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenConfig;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenValidator;
