//! Framework-free core of the Warden authentication guard.
//!
//! This crate defines the domain types and the verification seam, with no
//! knowledge of any particular web framework or HTTP client:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  warden_core                                 │
//! │  - Identity (verified principal)             │
//! │  - extract_bearer_token (header parsing)     │
//! │  - IdentityClient (port to the provider)     │
//! │  - AuthGuard (allow/deny decision)           │
//! └──────────────┬───────────────────────────────┘
//!                │ implemented / consumed by
//!                ▼
//! ┌──────────────────────────────────────────────┐
//! │  warden_adapters: reqwest provider client    │
//! │  warden_axum: middleware + extractor         │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The guard never validates tokens locally - every "is this token valid"
//! decision is delegated to an [`IdentityClient`] implementation.

pub mod bearer;
pub mod domain;
pub mod guard;
pub mod ports;

// Re-export commonly used types for convenience
pub use bearer::extract_bearer_token;
pub use domain::identity::Identity;
pub use guard::{AuthError, AuthGuard};
pub use ports::{IdentityClient, IdentityClientError};
