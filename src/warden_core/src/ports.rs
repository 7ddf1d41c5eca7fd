use async_trait::async_trait;
use thiserror::Error;

use crate::domain::identity::Identity;

// IdentityClient port trait and errors
#[derive(Debug, Error)]
pub enum IdentityClientError {
    #[error("identity provider unreachable: {0}")]
    Unreachable(String),
    #[error("unexpected identity provider response: {0}")]
    UnexpectedResponse(String),
}

impl PartialEq for IdentityClientError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unreachable(_), Self::Unreachable(_)) => true,
            (Self::UnexpectedResponse(_), Self::UnexpectedResponse(_)) => true,
            _ => false,
        }
    }
}

/// Port to the identity provider's token-verification endpoint.
///
/// One operation: hand the provider a bearer token, get back the principal it
/// belongs to. Implementations are constructed once and shared for the guard's
/// lifetime; they hold no per-request state.
///
/// # Contract
///
/// - `Ok(Some(identity))` - the provider recognized the token.
/// - `Ok(None)` - the provider was consulted and found no identity for the
///   token. This is a caller problem (401 territory), not a client error.
/// - `Err(..)` - the provider could not give an answer at all: transport
///   failure, or a response outside its contract.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    async fn verify_token(&self, token: &str) -> Result<Option<Identity>, IdentityClientError>;
}
