// npman-core: Domain layer between npman-api and consumers (CLI, automation).

pub mod config;
pub mod convert;
pub mod error;
pub mod manager;
pub mod model;
pub mod reconcile;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ManagerConfig, TlsVerification};
pub use error::CoreError;
pub use manager::Manager;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Shared pieces
    AuthEntry, CertificateRef, ClientRule, EntityKind, Meta, SystemStatus,
    // Entities
    AccessList, Certificate, DeadHost, Location, PermissionLevel, Permissions, ProxyHost,
    RedirectionHost, Setting, Stream, User,
    // Desired-state requests
    AccessListRequest, CertificateRequest, DeadHostRequest, ProxyHostRequest,
    RedirectionHostRequest, SettingRequest, StreamRequest, UserRequest,
};
