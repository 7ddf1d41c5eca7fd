use std::collections::HashMap;

use async_trait::async_trait;
use warden_core::{Identity, IdentityClient, IdentityClientError};

/// In-memory identity client for tests and local composition roots.
///
/// Holds a fixed token-to-identity mapping; unknown tokens verify to `None`.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityClient {
    identities: HashMap<String, Identity>,
}

impl StaticIdentityClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(mut self, token: impl Into<String>, identity: Identity) -> Self {
        self.identities.insert(token.into(), identity);
        self
    }
}

#[async_trait]
impl IdentityClient for StaticIdentityClient {
    async fn verify_token(&self, token: &str) -> Result<Option<Identity>, IdentityClientError> {
        Ok(self.identities.get(token).cloned())
    }
}
