use thiserror::Error;

use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UserError;

/// Why a refresh attempt was turned down.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RefreshRejection {
    /// The presented access token has not expired; there is nothing to refresh.
    #[error("Access token is still valid")]
    AccessTokenStillValid,

    #[error("Refresh token is invalid or expired")]
    InvalidRefreshToken,
}

/// Errors of the credential subsystem.
///
/// `InvalidCredentials` deliberately covers both "no such email" and
/// "wrong password" so that login cannot be used to enumerate accounts.
/// `Unauthenticated` likewise covers forged, expired and orphaned tokens.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Malformed credential: {0}")]
    MalformedCredential(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthenticated,

    #[error("Refresh rejected: {0}")]
    RefreshRejected(#[from] RefreshRejection),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UserError> for CredentialError {
    fn from(err: UserError) -> Self {
        CredentialError::Internal(err.to_string())
    }
}

impl From<auth::TokenError> for CredentialError {
    fn from(err: auth::TokenError) -> Self {
        CredentialError::Internal(err.to_string())
    }
}

impl From<auth::PasswordError> for CredentialError {
    fn from(err: auth::PasswordError) -> Self {
        CredentialError::Internal(err.to_string())
    }
}
