use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::create_user::create_user;
use super::handlers::delete_user::delete_user;
use super::handlers::get_user::get_user;
use super::handlers::health::health;
use super::handlers::refresh_token::refresh_token;
use super::handlers::reset_password::reset_password;
use super::handlers::update_user::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::config::CorsConfig;
use crate::credential::ports::CredentialServicePort;
use crate::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub credential_service: Arc<dyn CredentialServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    credential_service: Arc<dyn CredentialServicePort>,
    cors: &CorsConfig,
) -> Router {
    let state = AppState {
        user_service,
        credential_service,
    };

    let public_routes = Router::new()
        .route("/auth/login", post(authenticate))
        .route("/auth/refresh", post(refresh_token))
        .route("/users", post(create_user));

    let protected_routes = Router::new()
        .route("/auth/reset-password", put(reset_password))
        .route("/users/:user_id", get(get_user).put(update_user).delete(delete_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", public_routes.merge(protected_routes))
        .with_state(state);

    match cors_layer(cors) {
        Some(cors_layer) => {
            router.layer(ServiceBuilder::new().layer(trace_layer).layer(cors_layer))
        }
        None => router.layer(trace_layer),
    }
}

fn cors_layer(cors: &CorsConfig) -> Option<CorsLayer> {
    let origin = cors.allowed_origin.as_deref()?;

    match HeaderValue::from_str(origin) {
        Ok(origin) => {
            tracing::info!(allowed_origin = ?origin, "CORS enabled");
            Some(
                CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([
                        Method::GET,
                        Method::POST,
                        Method::PUT,
                        Method::DELETE,
                        Method::OPTIONS,
                    ])
                    .allow_headers([AUTHORIZATION, CONTENT_TYPE]),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "Invalid CORS allowed origin, CORS disabled");
            None
        }
    }
}
