pub mod http_identity_client;
pub mod static_identity_client;

pub use http_identity_client::HttpIdentityClient;
pub use static_identity_client::StaticIdentityClient;
