// ── CRUD reconciliation engine ──
//
// The NPM API splits "attribute update" from "enabled/disabled toggle"
// into independent endpoints, while callers think of an entity as one
// atomic thing. This module owns the protocol that bridges the two:
//
//   create/update -> sync enabled (side channel) -> read-back
//
// The enabled sync happens strictly after a successful main call and
// strictly before the read-back; if it fails, the read-back is skipped
// and the caller's last-known-good view is left un-overwritten. Better
// stale-but-consistent than a half-applied merge.
//
// One [`ReconcileEndpoint`] adapter exists per toggleable entity kind;
// certificates, users, and settings have no enable/disable routes and
// bypass this engine.

use tracing::debug;

use npman_api::ApiClient;

use crate::convert;
use crate::error::CoreError;
use crate::model::{
    AccessList, AccessListRequest, DeadHost, DeadHostRequest, EntityKind, ProxyHost,
    ProxyHostRequest, RedirectionHost, RedirectionHostRequest, Stream, StreamRequest,
};

// ── Endpoint abstraction ─────────────────────────────────────────────

/// One entity family's REST surface, as consumed by the engine.
///
/// Implementations perform exactly one HTTP call per method and no
/// retries; resilience policy belongs to the caller.
pub trait ReconcileEndpoint {
    type Entity;
    type Desired;

    fn kind(&self) -> EntityKind;
    fn entity_id(entity: &Self::Entity) -> u64;
    fn entity_enabled(entity: &Self::Entity) -> bool;
    fn desired_enabled(desired: &Self::Desired) -> bool;

    /// POST the desired attributes (minus `enabled`); the server
    /// assigns the id and reports its own default for `enabled`.
    async fn create(&self, desired: &Self::Desired) -> Result<Self::Entity, CoreError>;

    /// PUT the desired attributes against an existing id.
    async fn update(&self, id: u64, desired: &Self::Desired) -> Result<Self::Entity, CoreError>;

    /// Fetch by id; `Ok(None)` means the entity is absent (404).
    async fn fetch(&self, id: u64) -> Result<Option<Self::Entity>, CoreError>;

    /// DELETE by id, returning the server's success flag.
    async fn delete(&self, id: u64) -> Result<bool, CoreError>;

    /// Hit the enable or disable action route, returning the server's
    /// success flag.
    async fn set_enabled(&self, id: u64, enabled: bool) -> Result<bool, CoreError>;
}

// ── Engine ───────────────────────────────────────────────────────────

/// Create an entity and reconcile it to the desired state.
///
/// New entities come back enabled by default server-side; the engine
/// never trusts the create response's flag as the desired state and
/// always compares and corrects through the side channel.
pub async fn create<E: ReconcileEndpoint>(
    endpoint: &E,
    desired: &E::Desired,
) -> Result<E::Entity, CoreError> {
    let created = endpoint.create(desired).await?;
    let id = E::entity_id(&created);
    if id == 0 {
        return Err(CoreError::Internal(format!(
            "{} create response carried no id",
            endpoint.kind()
        )));
    }
    debug!(id, kind = %endpoint.kind(), "created");

    sync_enabled(
        endpoint,
        id,
        E::entity_enabled(&created),
        E::desired_enabled(desired),
    )
    .await?;
    read_back(endpoint, id).await
}

/// Fetch the current server-side state of an entity.
///
/// `Ok(None)` covers both a 404 and a body whose id is zero: either
/// way the entity no longer exists and the caller should drop it from
/// tracked state instead of erroring. Out-of-band deletion is
/// acceptable drift, not a failure.
pub async fn refresh<E: ReconcileEndpoint>(
    endpoint: &E,
    id: u64,
) -> Result<Option<E::Entity>, CoreError> {
    let Some(entity) = endpoint.fetch(id).await? else {
        return Ok(None);
    };
    if E::entity_id(&entity) == 0 {
        return Ok(None);
    }
    Ok(Some(entity))
}

/// Update an entity in place and reconcile it to the desired state.
/// The id travels in the URL only and is never resent as a mutable
/// attribute.
pub async fn update<E: ReconcileEndpoint>(
    endpoint: &E,
    id: u64,
    desired: &E::Desired,
) -> Result<E::Entity, CoreError> {
    let updated = endpoint.update(id, desired).await?;
    debug!(id, kind = %endpoint.kind(), "updated");

    sync_enabled(
        endpoint,
        id,
        E::entity_enabled(&updated),
        E::desired_enabled(desired),
    )
    .await?;
    read_back(endpoint, id).await
}

/// Delete an entity.
///
/// A 2xx response with a `false` body is the server refusing the
/// deletion -- a distinct failure from a transport or API error, which
/// propagates as-is from the endpoint call.
pub async fn destroy<E: ReconcileEndpoint>(endpoint: &E, id: u64) -> Result<(), CoreError> {
    if endpoint.delete(id).await? {
        debug!(id, kind = %endpoint.kind(), "deleted");
        Ok(())
    } else {
        Err(CoreError::Rejected {
            operation: "delete".into(),
            entity: endpoint.kind(),
            identifier: id.to_string(),
        })
    }
}

/// Toggle an entity's enabled flag directly, outside a create/update
/// cycle.
pub async fn set_enabled<E: ReconcileEndpoint>(
    endpoint: &E,
    id: u64,
    enabled: bool,
) -> Result<(), CoreError> {
    if endpoint.set_enabled(id, enabled).await? {
        Ok(())
    } else {
        Err(rejected_toggle(endpoint, id, enabled))
    }
}

/// Phase 2 of the protocol: correct `enabled` drift through the side
/// channel. No call is made when server and desired already agree; a
/// `false` flag or transport error is a hard failure that aborts the
/// operation before any read-back.
async fn sync_enabled<E: ReconcileEndpoint>(
    endpoint: &E,
    id: u64,
    actual: bool,
    desired: bool,
) -> Result<(), CoreError> {
    if actual == desired {
        return Ok(());
    }
    debug!(id, kind = %endpoint.kind(), desired, "correcting enabled drift");
    if endpoint.set_enabled(id, desired).await? {
        Ok(())
    } else {
        Err(rejected_toggle(endpoint, id, desired))
    }
}

async fn read_back<E: ReconcileEndpoint>(endpoint: &E, id: u64) -> Result<E::Entity, CoreError> {
    refresh(endpoint, id).await?.ok_or_else(|| CoreError::NotFound {
        entity: endpoint.kind(),
        identifier: id.to_string(),
    })
}

fn rejected_toggle<E: ReconcileEndpoint>(endpoint: &E, id: u64, enabled: bool) -> CoreError {
    CoreError::Rejected {
        operation: if enabled { "enable" } else { "disable" }.into(),
        entity: endpoint.kind(),
        identifier: id.to_string(),
    }
}

// ── Adapters ─────────────────────────────────────────────────────────

macro_rules! toggleable_endpoint {
    (
        $adapter:ident, $kind:expr, $entity:ty, $desired:ty, $payload:path,
        $create:ident, $update:ident, $find:ident, $delete:ident, $enable:ident, $disable:ident
    ) => {
        pub struct $adapter<'a>(pub(crate) &'a ApiClient);

        impl ReconcileEndpoint for $adapter<'_> {
            type Entity = $entity;
            type Desired = $desired;

            fn kind(&self) -> EntityKind {
                $kind
            }

            fn entity_id(entity: &Self::Entity) -> u64 {
                entity.id
            }

            fn entity_enabled(entity: &Self::Entity) -> bool {
                entity.enabled
            }

            fn desired_enabled(desired: &Self::Desired) -> bool {
                desired.enabled
            }

            async fn create(&self, desired: &Self::Desired) -> Result<Self::Entity, CoreError> {
                Ok(self.0.$create(&$payload(desired)).await?.into())
            }

            async fn update(
                &self,
                id: u64,
                desired: &Self::Desired,
            ) -> Result<Self::Entity, CoreError> {
                Ok(self.0.$update(id, &$payload(desired)).await?.into())
            }

            async fn fetch(&self, id: u64) -> Result<Option<Self::Entity>, CoreError> {
                Ok(self.0.$find(id).await?.map(Into::into))
            }

            async fn delete(&self, id: u64) -> Result<bool, CoreError> {
                Ok(self.0.$delete(id).await?)
            }

            async fn set_enabled(&self, id: u64, enabled: bool) -> Result<bool, CoreError> {
                if enabled {
                    Ok(self.0.$enable(id).await?)
                } else {
                    Ok(self.0.$disable(id).await?)
                }
            }
        }
    };
}

toggleable_endpoint!(
    ProxyHostEndpoint,
    EntityKind::ProxyHost,
    ProxyHost,
    ProxyHostRequest,
    convert::proxy_host_payload,
    create_proxy_host,
    update_proxy_host,
    find_proxy_host,
    delete_proxy_host,
    enable_proxy_host,
    disable_proxy_host
);

toggleable_endpoint!(
    RedirectionHostEndpoint,
    EntityKind::RedirectionHost,
    RedirectionHost,
    RedirectionHostRequest,
    convert::redirection_host_payload,
    create_redirection_host,
    update_redirection_host,
    find_redirection_host,
    delete_redirection_host,
    enable_redirection_host,
    disable_redirection_host
);

toggleable_endpoint!(
    DeadHostEndpoint,
    EntityKind::DeadHost,
    DeadHost,
    DeadHostRequest,
    convert::dead_host_payload,
    create_dead_host,
    update_dead_host,
    find_dead_host,
    delete_dead_host,
    enable_dead_host,
    disable_dead_host
);

toggleable_endpoint!(
    StreamEndpoint,
    EntityKind::Stream,
    Stream,
    StreamRequest,
    convert::stream_payload,
    create_stream,
    update_stream,
    find_stream,
    delete_stream,
    enable_stream,
    disable_stream
);

toggleable_endpoint!(
    AccessListEndpoint,
    EntityKind::AccessList,
    AccessList,
    AccessListRequest,
    convert::access_list_payload,
    create_access_list,
    update_access_list,
    find_access_list,
    delete_access_list,
    enable_access_list,
    disable_access_list
);

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct FakeEntity {
        id: u64,
        enabled: bool,
    }

    struct FakeDesired {
        enabled: bool,
    }

    /// In-memory stand-in for one entity's REST surface, with call
    /// counters for every route.
    #[derive(Default)]
    struct MockEndpoint {
        exists: Mutex<bool>,
        server_enabled: Mutex<bool>,
        /// `false` makes enable/disable answer 2xx-with-`false`.
        toggle_refused: bool,
        /// `false` makes delete answer 2xx-with-`false`.
        delete_refused: bool,
        /// Simulate a transport failure on delete.
        delete_transport_error: bool,
        /// Fetch answers an entity with id 0.
        zero_id_body: bool,
        create_calls: AtomicU32,
        update_calls: AtomicU32,
        fetch_calls: AtomicU32,
        enable_calls: AtomicU32,
        disable_calls: AtomicU32,
        delete_calls: AtomicU32,
    }

    impl MockEndpoint {
        fn with_entity(enabled: bool) -> Self {
            let mock = Self::default();
            *mock.exists.lock().expect("lock") = true;
            *mock.server_enabled.lock().expect("lock") = enabled;
            mock
        }

        fn toggles(&self) -> (u32, u32) {
            (
                self.enable_calls.load(Ordering::SeqCst),
                self.disable_calls.load(Ordering::SeqCst),
            )
        }
    }

    impl ReconcileEndpoint for MockEndpoint {
        type Entity = FakeEntity;
        type Desired = FakeDesired;

        fn kind(&self) -> EntityKind {
            EntityKind::ProxyHost
        }

        fn entity_id(entity: &FakeEntity) -> u64 {
            entity.id
        }

        fn entity_enabled(entity: &FakeEntity) -> bool {
            entity.enabled
        }

        fn desired_enabled(desired: &FakeDesired) -> bool {
            desired.enabled
        }

        async fn create(&self, _desired: &FakeDesired) -> Result<FakeEntity, CoreError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            *self.exists.lock().expect("lock") = true;
            // New entities are enabled by default server-side,
            // regardless of what the caller wanted.
            *self.server_enabled.lock().expect("lock") = true;
            Ok(FakeEntity {
                id: 42,
                enabled: true,
            })
        }

        async fn update(&self, id: u64, _desired: &FakeDesired) -> Result<FakeEntity, CoreError> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            Ok(FakeEntity {
                id,
                enabled: *self.server_enabled.lock().expect("lock"),
            })
        }

        async fn fetch(&self, id: u64) -> Result<Option<FakeEntity>, CoreError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            if !*self.exists.lock().expect("lock") {
                return Ok(None);
            }
            Ok(Some(FakeEntity {
                id: if self.zero_id_body { 0 } else { id },
                enabled: *self.server_enabled.lock().expect("lock"),
            }))
        }

        async fn delete(&self, _id: u64) -> Result<bool, CoreError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            if self.delete_transport_error {
                return Err(CoreError::Api {
                    message: "bad gateway".into(),
                    status: Some(502),
                });
            }
            Ok(!self.delete_refused)
        }

        async fn set_enabled(&self, _id: u64, enabled: bool) -> Result<bool, CoreError> {
            if enabled {
                self.enable_calls.fetch_add(1, Ordering::SeqCst);
            } else {
                self.disable_calls.fetch_add(1, Ordering::SeqCst);
            }
            if self.toggle_refused {
                return Ok(false);
            }
            *self.server_enabled.lock().expect("lock") = enabled;
            Ok(true)
        }
    }

    #[tokio::test]
    async fn create_corrects_enabled_drift_with_one_disable() {
        let mock = MockEndpoint::default();
        let entity = create(&mock, &FakeDesired { enabled: false })
            .await
            .expect("create");

        assert_eq!(entity, FakeEntity { id: 42, enabled: false });
        assert_eq!(mock.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(mock.toggles(), (0, 1));
        assert_eq!(mock.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn create_with_matching_enabled_makes_no_toggle_calls() {
        let mock = MockEndpoint::default();
        let entity = create(&mock, &FakeDesired { enabled: true })
            .await
            .expect("create");

        assert!(entity.enabled);
        assert_eq!(mock.toggles(), (0, 0));
        assert_eq!(mock.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn refused_toggle_aborts_before_read_back() {
        let mock = MockEndpoint {
            toggle_refused: true,
            ..MockEndpoint::default()
        };
        let err = create(&mock, &FakeDesired { enabled: false })
            .await
            .expect_err("toggle refusal must fail the create");

        match err {
            CoreError::Rejected { operation, .. } => assert_eq!(operation, "disable"),
            other => panic!("expected Rejected, got {other:?}"),
        }
        // The caller's view is never refreshed after a partial failure.
        assert_eq!(mock.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn update_syncs_enabled_then_reads_back() {
        let mock = MockEndpoint::with_entity(false);
        let entity = update(&mock, 42, &FakeDesired { enabled: true })
            .await
            .expect("update");

        assert!(entity.enabled);
        assert_eq!(mock.update_calls.load(Ordering::SeqCst), 1);
        assert_eq!(mock.toggles(), (1, 0));
        assert_eq!(mock.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn refresh_is_idempotent_for_unchanged_entity() {
        let mock = MockEndpoint::with_entity(true);
        let first = refresh(&mock, 42).await.expect("first refresh");
        let second = refresh(&mock, 42).await.expect("second refresh");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn refresh_of_missing_id_is_none() {
        let mock = MockEndpoint::default();
        assert_eq!(refresh(&mock, 42).await.expect("refresh"), None);
    }

    #[tokio::test]
    async fn refresh_treats_zero_id_body_as_absent() {
        let mock = MockEndpoint {
            zero_id_body: true,
            ..MockEndpoint::with_entity(true)
        };
        assert_eq!(refresh(&mock, 42).await.expect("refresh"), None);
    }

    #[tokio::test]
    async fn destroy_maps_false_flag_to_rejected() {
        let mock = MockEndpoint {
            delete_refused: true,
            ..MockEndpoint::with_entity(true)
        };
        let err = destroy(&mock, 42).await.expect_err("server refused");
        assert!(matches!(err, CoreError::Rejected { ref operation, .. } if operation == "delete"));
    }

    #[tokio::test]
    async fn destroy_keeps_transport_errors_distinct_from_refusal() {
        let mock = MockEndpoint {
            delete_transport_error: true,
            ..MockEndpoint::with_entity(true)
        };
        let err = destroy(&mock, 42).await.expect_err("transport failure");
        assert!(matches!(err, CoreError::Api { .. }));
    }

    #[tokio::test]
    async fn standalone_set_enabled_reports_refusal() {
        let mock = MockEndpoint {
            toggle_refused: true,
            ..MockEndpoint::with_entity(false)
        };
        let err = set_enabled(&mock, 42, true).await.expect_err("refused");
        assert!(matches!(err, CoreError::Rejected { ref operation, .. } if operation == "enable"));
        assert_eq!(mock.toggles(), (1, 0));
    }
}
