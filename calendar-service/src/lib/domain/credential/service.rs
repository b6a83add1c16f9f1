use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::TokenError;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::errors::RefreshRejection;
use crate::domain::credential::models::AuthenticatedIdentity;
use crate::domain::credential::models::LoginOutcome;
use crate::domain::credential::models::TokenBundle;
use crate::domain::credential::ports::CredentialServicePort;
use crate::domain::user::models::Password;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Credential service: login, refresh, bearer authentication and password reset.
pub struct CredentialService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> CredentialService<UR>
where
    UR: UserRepository,
{
    /// # Arguments
    /// * `repository` - User lookup by id and email
    /// * `authenticator` - Password and token primitives bound to the signing secret
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> CredentialServicePort for CredentialService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, CredentialError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            self.authenticator.reject_unknown_account(password);
            tracing::warn!(reason = "unknown email", "Login rejected");
            return Err(CredentialError::InvalidCredentials);
        };

        let result = self
            .authenticator
            .authenticate(
                password,
                &user.password_hash,
                user.id.0,
                user.name.as_str(),
                user.email.as_str(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(user_id = %user.id, reason = "password mismatch", "Login rejected");
                    CredentialError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => CredentialError::from(err),
                AuthenticationError::TokenError(err) => CredentialError::from(err),
            })?;

        tracing::info!(user_id = %user.id, "User has been authenticated");

        Ok(LoginOutcome {
            user,
            tokens: result.into(),
        })
    }

    async fn refresh(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<TokenBundle, CredentialError> {
        let claims = self
            .authenticator
            .read_expired_access_token(access_token)
            .map_err(|e| match e {
                TokenError::StillValid => {
                    CredentialError::from(RefreshRejection::AccessTokenStillValid)
                }
                other => {
                    tracing::warn!(reason = %other, "Refresh rejected: access token");
                    CredentialError::Unauthenticated
                }
            })?;

        self.authenticator
            .validate_refresh_token(refresh_token)
            .map_err(|e| {
                tracing::warn!(reason = %e, "Refresh rejected: refresh token");
                CredentialError::from(RefreshRejection::InvalidRefreshToken)
            })?;

        let user_id = UserId(claims.id);
        let Some(user) = self.repository.find_by_id(&user_id).await? else {
            tracing::warn!(user_id = %user_id, reason = "user no longer exists", "Refresh rejected");
            return Err(CredentialError::Unauthenticated);
        };

        let access = self.authenticator.issue_access_token(
            user.id.0,
            user.name.as_str(),
            user.email.as_str(),
        )?;

        tracing::info!(user_id = %user.id, "Access token has been refreshed");

        // Refresh tokens are not rotated; the presented one stays in use
        Ok(TokenBundle::new(access, refresh_token.to_string()))
    }

    async fn authenticate_bearer(
        &self,
        access_token: &str,
    ) -> Result<AuthenticatedIdentity, CredentialError> {
        let claims = self
            .authenticator
            .validate_access_token(access_token)
            .map_err(|e| {
                tracing::warn!(reason = %e, "Bearer token rejected");
                CredentialError::Unauthenticated
            })?;

        let user_id = UserId(claims.id);
        match self.repository.find_by_id(&user_id).await? {
            Some(user) => Ok(AuthenticatedIdentity { user }),
            None => {
                tracing::warn!(user_id = %user_id, reason = "user no longer exists", "Bearer token rejected");
                Err(CredentialError::Unauthenticated)
            }
        }
    }

    async fn reset_password(
        &self,
        user_id: &UserId,
        password: Password,
    ) -> Result<(), CredentialError> {
        let password_hash = self.authenticator.hash_password(password.as_str())?;

        self.repository
            .update_password(user_id, password_hash)
            .await
            .map_err(|e| match e {
                UserError::NotFound(_) => CredentialError::Unauthenticated,
                other => CredentialError::from(other),
            })?;

        tracing::info!(user_id = %user_id, "User has updated their password");

        Ok(())
    }
}
