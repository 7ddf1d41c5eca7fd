//! Request-interception middleware around the auth guard.
//!
//! Every request to a protected route passes through [`require_auth`] before
//! its handler. The middleware performs exactly one side effect: on success it
//! inserts [`AuthUser`] into the request extensions for handlers to extract.
//! On failure the request is rejected unmutated and the handler never runs.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use warden_core::{AuthError, AuthGuard, IdentityClient};

use crate::extractor::AuthUser;

/// Wrap every route of `router` behind the auth guard.
pub fn protect<C>(router: Router, guard: AuthGuard<C>) -> Router
where
    C: IdentityClient + Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(guard, require_auth::<C>))
}

/// The guard as an axum middleware function.
///
/// Reads the `authorization` header, asks the guard for a decision, and either
/// forwards the request with the verified [`AuthUser`] attached or
/// short-circuits with the mapped error response.
pub async fn require_auth<C>(
    State(guard): State<AuthGuard<C>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthRejection>
where
    C: IdentityClient + Clone + Send + Sync + 'static,
{
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match guard.authenticate(authorization).await {
        Ok(identity) => {
            req.extensions_mut().insert(AuthUser(identity));
            Ok(next.run(req).await)
        }
        Err(err) => {
            tracing::warn!(error = %err, "request rejected by auth guard");
            Err(AuthRejection(err))
        }
    }
}

/// [`AuthError`] carried to the HTTP boundary.
///
/// Denials map to 401; a provider that could not be consulted maps to 503 -
/// the token was never judged, so asking the caller to re-authenticate would
/// be wrong.
#[derive(Debug)]
pub struct AuthRejection(pub AuthError);

impl From<AuthError> for AuthRejection {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AuthError::NoTokenProvided | AuthError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, self.0.to_string())
            }
            // Transport details stay in the logs, not the response body.
            AuthError::Provider(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "identity provider unavailable".to_string(),
            ),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
