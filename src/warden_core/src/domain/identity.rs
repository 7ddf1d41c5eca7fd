use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A principal the identity provider has vouched for.
///
/// The provider owns the shape of this record; the guard only requires a stable
/// identifier. Every field beyond `id` and `email` is carried through untouched
/// in `extra`, so downstream handlers see exactly what the provider returned.
///
/// Immutable once returned from verification - the guard performs no local
/// re-validation of claims, expiry, or signatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned identifier of the principal.
    pub id: Uuid,
    /// Primary email, when the provider exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Provider-defined fields passed through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            email: None,
            extra: Map::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
