use std::sync::Arc;

use uuid::Uuid;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::jwt::AccessClaims;
use crate::jwt::AccessTokenIssuer;
use crate::jwt::IssuedAccessToken;
use crate::jwt::RefreshClaims;
use crate::jwt::RefreshTokenIssuer;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds the only copy of the signing key; construct it once at startup and
/// share it behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    codec: Arc<TokenCodec>,
    access_issuer: AccessTokenIssuer,
    refresh_issuer: RefreshTokenIssuer,
}

/// Result of successful authentication: an access + refresh token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    pub access_token: IssuedAccessToken,
    pub refresh_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator on the system clock.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_clock(jwt_secret, Arc::new(SystemClock))
    }

    /// Create a new authenticator reading time from `clock`.
    pub fn with_clock(jwt_secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        let codec = Arc::new(TokenCodec::with_clock(jwt_secret, clock));

        Self {
            password_hasher: PasswordHasher::new(),
            access_issuer: AccessTokenIssuer::new(Arc::clone(&codec)),
            refresh_issuer: RefreshTokenIssuer::new(Arc::clone(&codec)),
            codec,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access + refresh token pair.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id`, `name`, `email` - Identity embedded in the access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: Uuid,
        name: &str,
        email: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(AuthenticationResult {
            access_token: self.access_issuer.issue(user_id, name, email)?,
            refresh_token: self.refresh_issuer.issue()?,
        })
    }

    /// Burn one password verification for an account that does not exist.
    pub fn reject_unknown_account(&self, password: &str) {
        self.password_hasher.verify_decoy(password);
    }

    /// Issue an access token without password verification.
    ///
    /// For refresh flows, where authenticity was established by the token pair.
    pub fn issue_access_token(
        &self,
        user_id: Uuid,
        name: &str,
        email: &str,
    ) -> Result<IssuedAccessToken, TokenError> {
        self.access_issuer.issue(user_id, name, email)
    }

    /// Validate a live access token.
    ///
    /// # Errors
    /// * `Invalid` - Token is forged, malformed or not an access token
    /// * `Expired` - Token is past its expiry
    pub fn validate_access_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.codec.verify(token)
    }

    /// Read the claims of an access token that must already have expired.
    ///
    /// # Errors
    /// * `Invalid` - Token is forged, malformed or not an access token
    /// * `StillValid` - Token has not expired yet
    pub fn read_expired_access_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.codec.verify_allowing_expired(token)
    }

    /// Validate a live refresh token.
    ///
    /// # Errors
    /// * `Invalid` - Token is forged, malformed or not a refresh token
    /// * `Expired` - Token is past its expiry
    pub fn validate_refresh_token(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        self.codec.verify(token)
    }
}
