// npman-api: Async Rust client for the Nginx Proxy Manager REST API

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod transport;
pub mod wire;

pub use auth::TokenResponse;
pub use client::ApiClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
