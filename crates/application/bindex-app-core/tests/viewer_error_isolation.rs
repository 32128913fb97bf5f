use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use bindex_app_core::{
    AppCommand, AppKernel, AppState, AppStore, BindingsPort, BootState, MetadataPort, ViewerData,
};
use bindex_core::{BindingRecord, BindingType, ObjectDescriptor, Timing, TriggerOperation};

struct OneObjectMetadata;

#[async_trait]
impl MetadataPort for OneObjectMetadata {
    async fn entity_definitions(&self) -> anyhow::Result<Vec<ObjectDescriptor>> {
        Ok(vec![ObjectDescriptor {
            developer_name: "Order".into(),
            label: "Order".into(),
        }])
    }
}

/// Fails every Before-phase query; answers After-phase queries normally.
struct BeforeFailsBindings;

#[async_trait]
impl BindingsPort for BeforeFailsBindings {
    async fn domain_process_bindings(
        &self,
        _object: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>> {
        if phase.timing() == Timing::Before {
            anyhow::bail!("binding query rejected: INVALID_SESSION");
        }
        Ok(vec![BindingRecord {
            id: "m001".into(),
            master_label: "after row".into(),
            binding_type: BindingType::Criteria,
            is_active: true,
            order_of_execution: 1,
            execute_asynchronous: is_async,
        }])
    }

    async fn refresh_domain_process_bindings(
        &self,
        object: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>> {
        self.domain_process_bindings(object, phase, is_async).await
    }
}

#[test]
fn a_failed_fetch_is_distinct_and_does_not_corrupt_sibling_viewers() {
    let mut kernel = AppKernel::new(
        AppStore::new(AppState::default()),
        Arc::new(OneObjectMetadata),
        Arc::new(BeforeFailsBindings),
    );
    kernel.dispatch(AppCommand::LoadEntityDefinitions);

    let deadline = Instant::now() + Duration::from_secs(3);
    let state = loop {
        kernel.tick();
        let state = kernel.store.state();
        let settled = matches!(state.boot, BootState::Ready)
            && state
                .viewers
                .iter()
                .all(|(_, v)| !v.is_loading && v.data != ViewerData::Pending);
        if settled {
            break state;
        }
        assert!(Instant::now() < deadline, "viewers never settled");
        std::thread::sleep(Duration::from_millis(10));
    };

    // Errored, empty, and pending are three different observable states;
    // the failure stays local to the viewer whose fetch failed.
    match &state.viewers.before.data {
        ViewerData::Failed(message) => assert!(message.contains("INVALID_SESSION")),
        other => panic!("expected a failed state, got {other:?}"),
    }

    for viewer in [&state.viewers.after, &state.viewers.after_async] {
        match &viewer.data {
            ViewerData::Ready(records) => assert_eq!(records.len(), 1),
            other => panic!("sibling viewer corrupted: {other:?}"),
        }
    }
}
