use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::credential::errors::CredentialError;
use crate::domain::credential::models::AuthenticatedIdentity;
use crate::domain::user::models::Password;
use crate::inbound::http::router::AppState;

/// Replace the caller's own password.
pub async fn reset_password(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Json(body): Json<ResetPasswordRequestBody>,
) -> Result<ApiSuccess<String>, ApiError> {
    let password = Password::new(body.password).map_err(CredentialError::from)?;

    state
        .credential_service
        .reset_password(&identity.user.id, password)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, "Password has been updated".to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResetPasswordRequestBody {
    password: String,
}
