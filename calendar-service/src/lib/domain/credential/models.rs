use auth::AuthenticationResult;
use auth::IssuedAccessToken;

use crate::domain::user::models::User;

/// Token type advertised to clients.
pub const TOKEN_TYPE: &str = "Bearer";

/// The caller behind a request that passed the authentication gate.
///
/// Carries the user record as loaded for this request.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    pub user: User,
}

/// Access token plus refresh token, as handed to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBundle {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub expires_at: i64,
    pub refresh_token: String,
}

impl TokenBundle {
    pub fn new(access: IssuedAccessToken, refresh_token: String) -> Self {
        Self {
            access_token: access.token,
            token_type: TOKEN_TYPE,
            expires_in: access.expires_in,
            expires_at: access.expires_at,
            refresh_token,
        }
    }
}

impl From<AuthenticationResult> for TokenBundle {
    fn from(result: AuthenticationResult) -> Self {
        Self::new(result.access_token, result.refresh_token)
    }
}

/// Successful login: who logged in and the tokens they received.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub tokens: TokenBundle,
}
