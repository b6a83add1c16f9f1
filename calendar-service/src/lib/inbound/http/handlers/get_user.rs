use axum::extract::Path;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::credential::models::AuthenticatedIdentity;
use crate::domain::user::models::UserId;

/// Return the caller's own record. Other users' records are off limits.
pub async fn get_user(
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user_id = UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if user_id != identity.user.id {
        return Err(ApiError::unauthenticated());
    }

    tracing::info!(user_id = %user_id, "User has been retrieved");

    Ok(ApiSuccess::new(StatusCode::OK, (&identity.user).into()))
}
