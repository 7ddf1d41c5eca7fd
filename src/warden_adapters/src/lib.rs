//! Infrastructure adapters for the Warden authentication guard.
//!
//! Implements the `warden_core` ports against real infrastructure:
//!
//! - [`HttpIdentityClient`] - reqwest-backed client for the identity
//!   provider's token-verification endpoint.
//! - [`StaticIdentityClient`] - in-memory client for tests and local
//!   composition roots.
//! - [`ProviderSettings`] - fail-fast environment configuration, plus the
//!   [`auth_guard_from_env`] factory for the lazy-construction path.

pub mod identity;
pub mod settings;

pub use identity::{HttpIdentityClient, StaticIdentityClient};
pub use settings::{
    auth_guard_from_env, ProviderSettings, SettingsError, PROVIDER_PUBLIC_KEY_VAR,
    PROVIDER_URL_VAR,
};
