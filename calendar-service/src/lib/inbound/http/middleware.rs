use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use http::header::AUTHORIZATION;
use http::HeaderMap;

use crate::credential::errors::CredentialError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Authentication gate for protected routes.
///
/// Missing or garbled `Authorization` header is a caller bug (400). Any
/// problem with the token itself, or a token whose user is gone, is a
/// uniform 401. On success the request carries an
/// [`AuthenticatedIdentity`](crate::credential::models::AuthenticatedIdentity)
/// extension.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(req.headers())?;

    let identity = state.credential_service.authenticate_bearer(token).await?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// # Errors
/// * `MalformedCredential` - Header missing, not ASCII, wrong scheme or empty token
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, CredentialError> {
    let auth_header = headers.get(AUTHORIZATION).ok_or_else(|| {
        CredentialError::MalformedCredential("Authorization header is missing".to_string())
    })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        CredentialError::MalformedCredential("Invalid Authorization header".to_string())
    })?;

    match auth_str.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(CredentialError::MalformedCredential(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )),
    }
}
