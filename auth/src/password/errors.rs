use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error variant: a digest that cannot be parsed is
/// treated as a non-match so callers keep a single boolean decision point.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
