use async_trait::async_trait;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::AuthenticatedIdentity;
use crate::domain::credential::models::LoginOutcome;
use crate::domain::credential::models::TokenBundle;
use crate::domain::user::models::Password;
use crate::domain::user::models::UserId;

/// Port for credential operations: login, refresh, per-request authentication.
#[async_trait]
pub trait CredentialServicePort: Send + Sync + 'static {
    /// Verify email + password and issue an access/refresh token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Internal` - Hashing, signing or storage fault
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, CredentialError>;

    /// Exchange an expired access token plus a live refresh token for a new
    /// access token. The refresh token is not rotated.
    ///
    /// # Errors
    /// * `RefreshRejected(AccessTokenStillValid)` - Access token has not expired
    /// * `RefreshRejected(InvalidRefreshToken)` - Refresh token forged or expired
    /// * `Unauthenticated` - Access token forged, or its user no longer exists
    /// * `Internal` - Signing or storage fault
    async fn refresh(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<TokenBundle, CredentialError>;

    /// Verify a bearer access token and load the user it names.
    ///
    /// # Errors
    /// * `Unauthenticated` - Token forged, expired, or user no longer exists
    /// * `Internal` - Storage fault
    async fn authenticate_bearer(
        &self,
        access_token: &str,
    ) -> Result<AuthenticatedIdentity, CredentialError>;

    /// Replace a user's password.
    ///
    /// # Errors
    /// * `Unauthenticated` - User no longer exists
    /// * `Internal` - Hashing or storage fault
    async fn reset_password(&self, user_id: &UserId, password: Password)
        -> Result<(), CredentialError>;
}
