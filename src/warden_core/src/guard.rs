use thiserror::Error;

use crate::bearer::extract_bearer_token;
use crate::domain::identity::Identity;
use crate::ports::{IdentityClient, IdentityClientError};

/// Why a request was denied.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No well-formed `Authorization: Bearer <token>` header was present.
    #[error("no token provided")]
    NoTokenProvided,
    /// The provider was consulted and found no identity for the token.
    #[error("invalid token")]
    InvalidToken,
    /// The provider could not be consulted; the token was never judged.
    #[error(transparent)]
    Provider(#[from] IdentityClientError),
}

impl PartialEq for AuthError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NoTokenProvided, Self::NoTokenProvided) => true,
            (Self::InvalidToken, Self::InvalidToken) => true,
            (Self::Provider(a), Self::Provider(b)) => a == b,
            _ => false,
        }
    }
}

/// The allow/deny decision point.
///
/// Holds a single immutable [`IdentityClient`] handle and nothing else, so
/// concurrent requests never contend on guard-owned state. Cloning the guard
/// clones the client handle (cheap for pool-backed clients).
///
/// Construction is either dependency injection (`AuthGuard::new(client)`) or,
/// for the reqwest-backed client, the environment-driven factory in
/// `warden_adapters`.
#[derive(Debug, Clone)]
pub struct AuthGuard<C> {
    client: C,
}

impl<C> AuthGuard<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: IdentityClient> AuthGuard<C> {
    /// Decide whether a request carrying the given `Authorization` header
    /// value is authenticated.
    ///
    /// Exactly one remote verification call is made, and only when a
    /// well-formed bearer credential is present. A failed verification is
    /// terminal for the request; there are no retries.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NoTokenProvided`] - no usable bearer credential; the
    ///   client is never invoked.
    /// - [`AuthError::InvalidToken`] - the provider returned no identity.
    /// - [`AuthError::Provider`] - the provider could not be consulted.
    pub async fn authenticate(&self, authorization: Option<&str>) -> Result<Identity, AuthError> {
        let token = extract_bearer_token(authorization).ok_or(AuthError::NoTokenProvided)?;

        match self.client.verify_token(token).await? {
            Some(identity) => Ok(identity),
            None => Err(AuthError::InvalidToken),
        }
    }
}
