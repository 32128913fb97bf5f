use async_trait::async_trait;

use bindex_core::{BindingRecord, ObjectDescriptor, TriggerOperation};

use crate::domain::AppSettings;

/// Read-only metadata collaborator.
#[async_trait]
pub trait MetadataPort: Send + Sync + 'static {
    /// All triggerable object types. No filter parameters; filtering to
    /// triggerable objects is the collaborator's contract.
    async fn entity_definitions(&self) -> anyhow::Result<Vec<ObjectDescriptor>>;
}

/// Read-only binding query collaborator, keyed by the (object, phase, async)
/// triple.
#[async_trait]
pub trait BindingsPort: Send + Sync + 'static {
    async fn domain_process_bindings(
        &self,
        object_developer_name: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>>;

    /// Forced re-fetch of the same triple, bypassing any response cache the
    /// collaborator maintains.
    async fn refresh_domain_process_bindings(
        &self,
        object_developer_name: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>>;
}

pub trait SettingsRepo: Send + Sync + 'static {
    fn load(&self) -> anyhow::Result<AppSettings>;
    fn save(&self, settings: &AppSettings) -> anyhow::Result<()>;
}

// Shared collaborators: one client instance can sit behind several seams.

#[async_trait]
impl<P: MetadataPort + ?Sized> MetadataPort for std::sync::Arc<P> {
    async fn entity_definitions(&self) -> anyhow::Result<Vec<ObjectDescriptor>> {
        (**self).entity_definitions().await
    }
}

#[async_trait]
impl<P: BindingsPort + ?Sized> BindingsPort for std::sync::Arc<P> {
    async fn domain_process_bindings(
        &self,
        object_developer_name: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>> {
        (**self)
            .domain_process_bindings(object_developer_name, phase, is_async)
            .await
    }

    async fn refresh_domain_process_bindings(
        &self,
        object_developer_name: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>> {
        (**self)
            .refresh_domain_process_bindings(object_developer_name, phase, is_async)
            .await
    }
}
