mod argon2;

use thiserror::Error;

pub use self::argon2::PasswordHasher;

/// Failure inside the hashing primitive itself.
///
/// A wrong password is not an error: `verify` reports it as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password hash could not be checked: {0}")]
    VerificationFailed(String),
}
