//! Environment-driven provider configuration.
//!
//! The guard is unusable without a provider endpoint and a public API key, so
//! both are validated eagerly at construction time. A missing or malformed
//! value fails the composition root, not the first authenticated request.

use reqwest::{Client, Url};
use secrecy::Secret;
use thiserror::Error;
use warden_core::AuthGuard;

use crate::identity::HttpIdentityClient;

pub const PROVIDER_URL_VAR: &str = "PROVIDER_URL";
pub const PROVIDER_PUBLIC_KEY_VAR: &str = "PROVIDER_PUBLIC_KEY";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid environment variable: {0}")]
    Invalid(&'static str),
}

impl PartialEq for SettingsError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Missing(a), Self::Missing(b)) => a == b,
            (Self::Invalid(a), Self::Invalid(b)) => a == b,
            _ => false,
        }
    }
}

/// Connection settings for the identity provider.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub provider_url: Url,
    pub public_key: Secret<String>,
}

impl ProviderSettings {
    /// Read settings from the environment (`.env`-aware).
    ///
    /// # Errors
    ///
    /// [`SettingsError::Missing`] when a variable is unset,
    /// [`SettingsError::Invalid`] when it is empty or, for the URL, does not
    /// parse as an absolute URL.
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            std::env::var(PROVIDER_URL_VAR).ok(),
            std::env::var(PROVIDER_PUBLIC_KEY_VAR).ok(),
        )
    }

    fn from_vars(url: Option<String>, public_key: Option<String>) -> Result<Self, SettingsError> {
        let url = url.ok_or(SettingsError::Missing(PROVIDER_URL_VAR))?;
        if url.is_empty() {
            return Err(SettingsError::Invalid(PROVIDER_URL_VAR));
        }
        let provider_url =
            Url::parse(&url).map_err(|_| SettingsError::Invalid(PROVIDER_URL_VAR))?;

        let public_key = public_key.ok_or(SettingsError::Missing(PROVIDER_PUBLIC_KEY_VAR))?;
        if public_key.is_empty() {
            return Err(SettingsError::Invalid(PROVIDER_PUBLIC_KEY_VAR));
        }

        Ok(Self {
            provider_url,
            public_key: Secret::new(public_key),
        })
    }
}

impl HttpIdentityClient {
    /// Build a client from [`ProviderSettings`] with a caller-supplied
    /// `reqwest::Client`.
    pub fn from_settings(settings: ProviderSettings, http_client: Client) -> Self {
        Self::new(settings.provider_url, settings.public_key, http_client)
    }
}

/// Lazy-construction path for when no client is injected: build the guard
/// entirely from the environment.
///
/// The dependency-injection path is `AuthGuard::new(client)` with any
/// [`warden_core::IdentityClient`] implementation.
pub fn auth_guard_from_env() -> Result<AuthGuard<HttpIdentityClient>, SettingsError> {
    let settings = ProviderSettings::from_env()?;
    tracing::debug!("building identity client from environment settings");

    Ok(AuthGuard::new(HttpIdentityClient::from_settings(
        settings,
        Client::new(),
    )))
}
