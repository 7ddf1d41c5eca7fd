//! # Warden - Bearer-Token Authentication Guard
//!
//! This is a facade crate that re-exports all public APIs from the guard
//! components. Use this crate to get access to the full guard in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! warden = { path = "../warden" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain**: `Identity`, `extract_bearer_token`, `AuthGuard`
//! - **Port trait**: `IdentityClient` - the seam to the identity provider
//! - **Adapters**: `HttpIdentityClient`, `StaticIdentityClient`,
//!   `ProviderSettings`
//! - **Axum boundary**: `require_auth` middleware and the `AuthUser` extractor
//!
//! ## Flow
//!
//! Request → extract bearer token → verify with the remote provider →
//! attach `AuthUser` | reject with 401/503. Every validity decision is
//! delegated to the provider; nothing is verified locally.

// ============================================================================
// Core Domain
// ============================================================================

/// Framework-free domain types and the guard itself
pub mod core {
    pub use warden_core::*;
}

// Re-export most commonly used core types at the root level
pub use warden_core::{
    AuthError, AuthGuard, Identity, IdentityClient, IdentityClientError, extract_bearer_token,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Identity client implementations
    pub mod identity {
        pub use warden_adapters::identity::*;
    }

    /// Environment configuration
    pub mod settings {
        pub use warden_adapters::settings::*;
    }
}

// Re-export commonly used adapters at root level
pub use warden_adapters::{
    HttpIdentityClient, ProviderSettings, SettingsError, StaticIdentityClient, auth_guard_from_env,
};

// ============================================================================
// Axum Boundary
// ============================================================================

/// Axum middleware and extractor
pub mod axum_guard {
    pub use warden_axum::*;
}

pub use warden_axum::{AuthRejection, AuthUser, protect, require_auth};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the `IdentityClient` port
pub use async_trait::async_trait;

/// Re-export secrecy for handling the provider public key
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use tokio;
