use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use super::claims::AccessClaims;
use super::claims::RefreshClaims;
use super::codec::TokenCodec;
use super::errors::TokenError;

/// Lifetime of an access token: 15 minutes.
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// Lifetime of a refresh token: 48 hours.
pub const REFRESH_TOKEN_TTL: Duration = Duration::from_secs(48 * 60 * 60);

/// An issued access token with its lifetime, for the client's convenience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedAccessToken {
    pub token: String,
    /// Seconds until expiry, measured from issuance
    pub expires_in: i64,
    /// Absolute expiry (Unix timestamp)
    pub expires_at: i64,
}

/// Builds short-lived, identity-bearing access tokens.
pub struct AccessTokenIssuer {
    codec: Arc<TokenCodec>,
}

impl AccessTokenIssuer {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Issue an access token for a user.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(
        &self,
        user_id: Uuid,
        name: &str,
        email: &str,
    ) -> Result<IssuedAccessToken, TokenError> {
        let signed = self
            .codec
            .sign(AccessClaims::for_user(user_id, name, email), ACCESS_TOKEN_TTL)?;

        Ok(IssuedAccessToken {
            token: signed.token,
            expires_in: ACCESS_TOKEN_TTL.as_secs() as i64,
            expires_at: signed.expires_at,
        })
    }
}

/// Builds long-lived refresh tokens that carry no identity.
pub struct RefreshTokenIssuer {
    codec: Arc<TokenCodec>,
}

impl RefreshTokenIssuer {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self) -> Result<String, TokenError> {
        self.codec
            .sign(RefreshClaims::default(), REFRESH_TOKEN_TTL)
            .map(|signed| signed.token)
    }
}
