use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims that carry a validity window.
///
/// The codec stamps `iat`/`exp` when signing and reads `exp` back when
/// verifying; everything else in the payload is opaque to it.
pub trait TokenClaims: Serialize + DeserializeOwned {
    fn issued_at(&self) -> i64;

    fn expires_at(&self) -> i64;

    fn set_validity(&mut self, issued_at: i64, expires_at: i64);

    /// Expired strictly after the `exp` instant.
    fn is_expired(&self, current_timestamp: i64) -> bool {
        self.expires_at() < current_timestamp
    }
}

/// Identity-bearing claims of a short-lived access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// User identifier
    pub id: Uuid,

    pub name: String,

    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Create claims for a user. Timestamps are filled in at signing time.
    pub fn for_user(id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            iat: 0,
            exp: 0,
        }
    }
}

impl TokenClaims for AccessClaims {
    fn issued_at(&self) -> i64 {
        self.iat
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }

    fn set_validity(&mut self, issued_at: i64, expires_at: i64) {
        self.iat = issued_at;
        self.exp = expires_at;
    }
}

/// Claims of a refresh token: a validity window and nothing else.
///
/// Unknown fields are rejected, so an access token never passes for a
/// refresh token.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RefreshClaims {
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims for RefreshClaims {
    fn issued_at(&self) -> i64 {
        self.iat
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }

    fn set_validity(&mut self, issued_at: i64, expires_at: i64) {
        self.iat = issued_at;
        self.exp = expires_at;
    }
}
