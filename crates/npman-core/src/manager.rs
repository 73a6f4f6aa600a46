// ── Manager facade ──
//
// The one-time bootstrap and operation surface consumers hold on to.
// Authenticates once at connect time, owns the shared `ApiClient`
// immutably, and exposes one high-level method per operation. Consumers
// receive `&Manager` by explicit injection; there are no globals, and
// concurrent reuse across entities is safe because nothing here mutates
// after construction.

use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{debug, info};

use npman_api::ApiClient;

use crate::config::ManagerConfig;
use crate::convert;
use crate::error::CoreError;
use crate::model::{
    AccessList, AccessListRequest, Certificate, CertificateRequest, DeadHost, DeadHostRequest,
    EntityKind, Permissions, ProxyHost, ProxyHostRequest, RedirectionHost, RedirectionHostRequest,
    Setting, SettingRequest, Stream, StreamRequest, SystemStatus, User, UserRequest,
};
use crate::reconcile::{
    self, AccessListEndpoint, DeadHostEndpoint, ProxyHostEndpoint, RedirectionHostEndpoint,
    StreamEndpoint,
};

/// A configured, authenticated handle to one NPM instance.
pub struct Manager {
    client: ApiClient,
    config: ManagerConfig,
}

impl Manager {
    /// Validate the configuration, authenticate once, and build the
    /// shared client.
    ///
    /// Missing or empty url/identity/password fails here before any
    /// network activity; credential rejection or an unreachable host is
    /// a single aggregated connect error, and no operation surface
    /// becomes usable.
    pub async fn connect(config: ManagerConfig) -> Result<Self, CoreError> {
        config.validate()?;

        let transport = config.transport();
        let client = ApiClient::connect(
            config.url.as_str(),
            &config.identity,
            &config.password,
            &transport,
        )
        .await
        .map_err(|e| connect_error(&config, e))?;

        info!(url = %config.url, "connected to NPM instance");
        Ok(Self { client, config })
    }

    /// Wrap an already-built client (tests, token reuse).
    pub fn from_client(client: ApiClient, config: ManagerConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    // ── System ───────────────────────────────────────────────────────

    /// Probe instance health and version.
    pub async fn health(&self) -> Result<SystemStatus, CoreError> {
        Ok(self.client.health().await?.into())
    }

    // ── Proxy hosts ──────────────────────────────────────────────────

    pub async fn list_proxy_hosts(&self) -> Result<Vec<ProxyHost>, CoreError> {
        Ok(self
            .client
            .list_proxy_hosts()
            .await?
            .into_iter()
            .map(ProxyHost::from)
            .collect())
    }

    /// Fetch by id; `Ok(None)` means the host no longer exists and
    /// should be dropped from tracked state.
    pub async fn get_proxy_host(&self, id: u64) -> Result<Option<ProxyHost>, CoreError> {
        reconcile::refresh(&ProxyHostEndpoint(&self.client), id).await
    }

    pub async fn create_proxy_host(
        &self,
        desired: &ProxyHostRequest,
    ) -> Result<ProxyHost, CoreError> {
        reconcile::create(&ProxyHostEndpoint(&self.client), desired).await
    }

    pub async fn update_proxy_host(
        &self,
        id: u64,
        desired: &ProxyHostRequest,
    ) -> Result<ProxyHost, CoreError> {
        reconcile::update(&ProxyHostEndpoint(&self.client), id, desired).await
    }

    pub async fn delete_proxy_host(&self, id: u64) -> Result<(), CoreError> {
        reconcile::destroy(&ProxyHostEndpoint(&self.client), id).await
    }

    pub async fn set_proxy_host_enabled(&self, id: u64, enabled: bool) -> Result<(), CoreError> {
        reconcile::set_enabled(&ProxyHostEndpoint(&self.client), id, enabled).await
    }

    // ── Redirection hosts ────────────────────────────────────────────

    pub async fn list_redirection_hosts(&self) -> Result<Vec<RedirectionHost>, CoreError> {
        Ok(self
            .client
            .list_redirection_hosts()
            .await?
            .into_iter()
            .map(RedirectionHost::from)
            .collect())
    }

    pub async fn get_redirection_host(&self, id: u64) -> Result<Option<RedirectionHost>, CoreError> {
        reconcile::refresh(&RedirectionHostEndpoint(&self.client), id).await
    }

    pub async fn create_redirection_host(
        &self,
        desired: &RedirectionHostRequest,
    ) -> Result<RedirectionHost, CoreError> {
        reconcile::create(&RedirectionHostEndpoint(&self.client), desired).await
    }

    pub async fn update_redirection_host(
        &self,
        id: u64,
        desired: &RedirectionHostRequest,
    ) -> Result<RedirectionHost, CoreError> {
        reconcile::update(&RedirectionHostEndpoint(&self.client), id, desired).await
    }

    pub async fn delete_redirection_host(&self, id: u64) -> Result<(), CoreError> {
        reconcile::destroy(&RedirectionHostEndpoint(&self.client), id).await
    }

    pub async fn set_redirection_host_enabled(
        &self,
        id: u64,
        enabled: bool,
    ) -> Result<(), CoreError> {
        reconcile::set_enabled(&RedirectionHostEndpoint(&self.client), id, enabled).await
    }

    // ── Dead hosts ───────────────────────────────────────────────────

    pub async fn list_dead_hosts(&self) -> Result<Vec<DeadHost>, CoreError> {
        Ok(self
            .client
            .list_dead_hosts()
            .await?
            .into_iter()
            .map(DeadHost::from)
            .collect())
    }

    pub async fn get_dead_host(&self, id: u64) -> Result<Option<DeadHost>, CoreError> {
        reconcile::refresh(&DeadHostEndpoint(&self.client), id).await
    }

    pub async fn create_dead_host(&self, desired: &DeadHostRequest) -> Result<DeadHost, CoreError> {
        reconcile::create(&DeadHostEndpoint(&self.client), desired).await
    }

    pub async fn update_dead_host(
        &self,
        id: u64,
        desired: &DeadHostRequest,
    ) -> Result<DeadHost, CoreError> {
        reconcile::update(&DeadHostEndpoint(&self.client), id, desired).await
    }

    pub async fn delete_dead_host(&self, id: u64) -> Result<(), CoreError> {
        reconcile::destroy(&DeadHostEndpoint(&self.client), id).await
    }

    pub async fn set_dead_host_enabled(&self, id: u64, enabled: bool) -> Result<(), CoreError> {
        reconcile::set_enabled(&DeadHostEndpoint(&self.client), id, enabled).await
    }

    // ── Streams ──────────────────────────────────────────────────────

    pub async fn list_streams(&self) -> Result<Vec<Stream>, CoreError> {
        Ok(self
            .client
            .list_streams()
            .await?
            .into_iter()
            .map(Stream::from)
            .collect())
    }

    pub async fn get_stream(&self, id: u64) -> Result<Option<Stream>, CoreError> {
        reconcile::refresh(&StreamEndpoint(&self.client), id).await
    }

    pub async fn create_stream(&self, desired: &StreamRequest) -> Result<Stream, CoreError> {
        reconcile::create(&StreamEndpoint(&self.client), desired).await
    }

    pub async fn update_stream(
        &self,
        id: u64,
        desired: &StreamRequest,
    ) -> Result<Stream, CoreError> {
        reconcile::update(&StreamEndpoint(&self.client), id, desired).await
    }

    pub async fn delete_stream(&self, id: u64) -> Result<(), CoreError> {
        reconcile::destroy(&StreamEndpoint(&self.client), id).await
    }

    pub async fn set_stream_enabled(&self, id: u64, enabled: bool) -> Result<(), CoreError> {
        reconcile::set_enabled(&StreamEndpoint(&self.client), id, enabled).await
    }

    // ── Access lists ─────────────────────────────────────────────────

    pub async fn list_access_lists(&self) -> Result<Vec<AccessList>, CoreError> {
        Ok(self
            .client
            .list_access_lists()
            .await?
            .into_iter()
            .map(AccessList::from)
            .collect())
    }

    pub async fn get_access_list(&self, id: u64) -> Result<Option<AccessList>, CoreError> {
        reconcile::refresh(&AccessListEndpoint(&self.client), id).await
    }

    /// Fetch an access list and re-attach locally-known authorization
    /// secrets from a prior view (the server only returns hints).
    pub async fn refresh_access_list(
        &self,
        id: u64,
        prior: &AccessList,
    ) -> Result<Option<AccessList>, CoreError> {
        let Some(mut list) = self.get_access_list(id).await? else {
            return Ok(None);
        };
        convert::merge_auth_secrets(&mut list.items, &prior.items);
        Ok(Some(list))
    }

    pub async fn create_access_list(
        &self,
        desired: &AccessListRequest,
    ) -> Result<AccessList, CoreError> {
        reconcile::create(&AccessListEndpoint(&self.client), desired).await
    }

    pub async fn update_access_list(
        &self,
        id: u64,
        desired: &AccessListRequest,
    ) -> Result<AccessList, CoreError> {
        reconcile::update(&AccessListEndpoint(&self.client), id, desired).await
    }

    pub async fn delete_access_list(&self, id: u64) -> Result<(), CoreError> {
        reconcile::destroy(&AccessListEndpoint(&self.client), id).await
    }

    pub async fn set_access_list_enabled(&self, id: u64, enabled: bool) -> Result<(), CoreError> {
        reconcile::set_enabled(&AccessListEndpoint(&self.client), id, enabled).await
    }

    // ── Certificates (no enable/disable side channel) ────────────────

    pub async fn list_certificates(&self) -> Result<Vec<Certificate>, CoreError> {
        Ok(self
            .client
            .list_certificates()
            .await?
            .into_iter()
            .map(Certificate::from)
            .collect())
    }

    pub async fn get_certificate(&self, id: u64) -> Result<Option<Certificate>, CoreError> {
        let found = self.client.find_certificate(id).await?;
        Ok(found.map(Certificate::from).filter(|c| c.id != 0))
    }

    /// Create a certificate record and read it back.
    pub async fn create_certificate(
        &self,
        desired: &CertificateRequest,
    ) -> Result<Certificate, CoreError> {
        let created: Certificate = self
            .client
            .create_certificate(&convert::certificate_payload(desired))
            .await?
            .into();
        if created.id == 0 {
            return Err(CoreError::Internal(
                "certificate create response carried no id".into(),
            ));
        }
        debug!(id = created.id, "created certificate");
        self.read_back_certificate(created.id).await
    }

    pub async fn delete_certificate(&self, id: u64) -> Result<(), CoreError> {
        if self.client.delete_certificate(id).await? {
            Ok(())
        } else {
            Err(CoreError::Rejected {
                operation: "delete".into(),
                entity: EntityKind::Certificate,
                identifier: id.to_string(),
            })
        }
    }

    /// Attach a PEM certificate/key pair to an existing record.
    pub async fn upload_certificate(
        &self,
        id: u64,
        certificate: Vec<u8>,
        key: Vec<u8>,
    ) -> Result<Certificate, CoreError> {
        self.client.upload_certificate(id, certificate, key).await?;
        self.read_back_certificate(id).await
    }

    /// Pre-flight validation of a PEM certificate/key pair. Returns the
    /// server's parsed view of the pair.
    pub async fn validate_certificate(
        &self,
        certificate: Vec<u8>,
        key: Vec<u8>,
    ) -> Result<Value, CoreError> {
        Ok(self.client.validate_certificate(certificate, key).await?)
    }

    async fn read_back_certificate(&self, id: u64) -> Result<Certificate, CoreError> {
        self.get_certificate(id)
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity: EntityKind::Certificate,
                identifier: id.to_string(),
            })
    }

    // ── Users ────────────────────────────────────────────────────────

    pub async fn list_users(&self) -> Result<Vec<User>, CoreError> {
        Ok(self
            .client
            .list_users()
            .await?
            .into_iter()
            .map(User::from)
            .collect())
    }

    pub async fn get_user(&self, id: u64) -> Result<Option<User>, CoreError> {
        let found = self.client.find_user(id).await?;
        Ok(found.map(User::from).filter(|u| u.id != 0))
    }

    /// The authenticated user's own account.
    pub async fn current_user(&self) -> Result<User, CoreError> {
        Ok(self.client.get_current_user().await?.into())
    }

    pub async fn create_user(&self, desired: &UserRequest) -> Result<User, CoreError> {
        let created: User = self
            .client
            .create_user(&convert::user_payload(desired))
            .await?
            .into();
        if created.id == 0 {
            return Err(CoreError::Internal("user create response carried no id".into()));
        }
        debug!(id = created.id, "created user");
        self.read_back_user(created.id).await
    }

    pub async fn update_user(&self, id: u64, desired: &UserRequest) -> Result<User, CoreError> {
        self.client
            .update_user(id, &convert::user_payload(desired))
            .await?;
        self.read_back_user(id).await
    }

    pub async fn delete_user(&self, id: u64) -> Result<(), CoreError> {
        if self.client.delete_user(id).await? {
            Ok(())
        } else {
            Err(CoreError::Rejected {
                operation: "delete".into(),
                entity: EntityKind::User,
                identifier: id.to_string(),
            })
        }
    }

    /// Change a user's password.
    pub async fn set_user_password(
        &self,
        id: u64,
        secret: &secrecy::SecretString,
    ) -> Result<(), CoreError> {
        let payload = npman_api::models::UserAuthPayload {
            auth_type: "password".into(),
            current: None,
            secret: secret.expose_secret().to_owned(),
        };
        if self.client.set_user_auth(id, &payload).await? {
            Ok(())
        } else {
            Err(CoreError::Rejected {
                operation: "change password for".into(),
                entity: EntityKind::User,
                identifier: id.to_string(),
            })
        }
    }

    /// Replace a user's per-section permissions.
    pub async fn set_user_permissions(
        &self,
        id: u64,
        permissions: &Permissions,
    ) -> Result<(), CoreError> {
        let wire = convert::permissions_wire(permissions);
        if self.client.set_user_permissions(id, &wire).await? {
            Ok(())
        } else {
            Err(CoreError::Rejected {
                operation: "set permissions for".into(),
                entity: EntityKind::User,
                identifier: id.to_string(),
            })
        }
    }

    async fn read_back_user(&self, id: u64) -> Result<User, CoreError> {
        self.get_user(id).await?.ok_or_else(|| CoreError::NotFound {
            entity: EntityKind::User,
            identifier: id.to_string(),
        })
    }

    // ── Settings (string ids, GET/PUT only) ──────────────────────────

    pub async fn list_settings(&self) -> Result<Vec<Setting>, CoreError> {
        Ok(self
            .client
            .list_settings()
            .await?
            .into_iter()
            .map(Setting::from)
            .collect())
    }

    pub async fn get_setting(&self, id: &str) -> Result<Option<Setting>, CoreError> {
        Ok(self.client.find_setting(id).await?.map(Setting::from))
    }

    pub async fn update_setting(
        &self,
        id: &str,
        desired: &SettingRequest,
    ) -> Result<Setting, CoreError> {
        self.client
            .update_setting(id, &convert::setting_payload(desired))
            .await?;
        self.get_setting(id).await?.ok_or_else(|| CoreError::NotFound {
            entity: EntityKind::Setting,
            identifier: id.to_owned(),
        })
    }
}

/// Aggregate a transport-layer connect failure into one provider-level
/// error, keeping the configured timeout in timeout reports.
fn connect_error(config: &ManagerConfig, err: npman_api::Error) -> CoreError {
    match &err {
        npman_api::Error::Transport(e) if e.is_timeout() => CoreError::Timeout {
            timeout_secs: config.timeout.as_secs(),
        },
        npman_api::Error::Transport(e) if e.is_connect() => CoreError::ConnectionFailed {
            url: config.url.to_string(),
            reason: e.to_string(),
        },
        _ => err.into(),
    }
}
