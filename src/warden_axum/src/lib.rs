//! Axum integration for the Warden authentication guard.
//!
//! This crate binds the framework-free guard from `warden_core` to axum's
//! request pipeline:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  warden_core: AuthGuard + IdentityClient │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  warden_axum                             │
//! │  - require_auth middleware               │
//! │  - AuthUser extractor                    │
//! │  - AuthRejection → 401/503 responses     │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use warden_axum::{protect, AuthUser};
//!
//! async fn whoami(AuthUser(identity): AuthUser) -> Json<Identity> {
//!     Json(identity)
//! }
//!
//! let app = protect(
//!     Router::new().route("/whoami", get(whoami)),
//!     AuthGuard::new(client),
//! );
//! ```

pub mod extractor;
pub mod middleware;

// Re-export for convenience
pub use extractor::{AuthUser, AuthUserRejection};
pub use middleware::{protect, require_auth, AuthRejection};
