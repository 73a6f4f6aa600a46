// Canonical domain model.
//
// These are the typed entities consumers work with -- wire quirks
// (0/1 booleans, polymorphic certificate ids, stringly metadata) are
// normalized away by `convert` before anything reaches this layer.

pub mod access_list;
pub mod certificate;
pub mod common;
pub mod dead_host;
pub mod proxy_host;
pub mod redirection_host;
pub mod setting;
pub mod stream;
pub mod user;

pub use access_list::{AccessList, AccessListRequest, AuthEntry, ClientRule};
pub use certificate::{Certificate, CertificateRequest};
pub use common::{CertificateRef, EntityKind, Meta, SystemStatus};
pub use dead_host::{DeadHost, DeadHostRequest};
pub use proxy_host::{Location, ProxyHost, ProxyHostRequest};
pub use redirection_host::{RedirectionHost, RedirectionHostRequest};
pub use setting::{Setting, SettingRequest};
pub use stream::{Stream, StreamRequest};
pub use user::{PermissionLevel, Permissions, User, UserRequest};
