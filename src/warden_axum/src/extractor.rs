//! Handler-facing extractor for the verified identity.

use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use warden_core::Identity;

/// Verified principal attached to the request by
/// [`require_auth`](crate::middleware::require_auth).
///
/// Handlers take this as an argument and never see unauthenticated requests:
/// the middleware rejected those before the handler ran.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn into_inner(self) -> Identity {
        self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthUserRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AuthUserRejection::GuardNotInstalled)
    }
}

/// Errors that can occur when extracting the verified identity.
#[derive(Debug, Error)]
pub enum AuthUserRejection {
    /// The route was not wired behind the auth middleware. A deployment wiring
    /// mistake, not a caller fault.
    #[error("authentication guard not installed on this route")]
    GuardNotInstalled,
}

impl IntoResponse for AuthUserRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthUserRejection::GuardNotInstalled => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "authentication not configured".to_string(),
            ),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
