use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use bindex_app_core::{
    AppCommand, AppKernel, AppState, AppStore, BindingsPort, BootState, MetadataPort, ViewerData,
};
use bindex_core::{BindingRecord, BindingType, ObjectDescriptor, TriggerOperation};

struct OneObjectMetadata;

#[async_trait]
impl MetadataPort for OneObjectMetadata {
    async fn entity_definitions(&self) -> anyhow::Result<Vec<ObjectDescriptor>> {
        Ok(vec![ObjectDescriptor {
            developer_name: "Account".into(),
            label: "Account".into(),
        }])
    }
}

/// Resolves instantly and counts calls, so the 300 ms floor is the only
/// thing keeping the loading flag up.
#[derive(Default)]
struct CountingBindings {
    fetches: AtomicUsize,
    refreshes: AtomicUsize,
}

#[async_trait]
impl BindingsPort for CountingBindings {
    async fn domain_process_bindings(
        &self,
        _object: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(vec![BindingRecord {
            id: format!("{phase}:{is_async}"),
            master_label: "instant".into(),
            binding_type: BindingType::Action,
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
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        self.domain_process_bindings(object, phase, is_async).await
    }
}

fn pump_until(
    kernel: &mut AppKernel<OneObjectMetadata, CountingBindings>,
    what: &str,
    pred: impl Fn(&AppState) -> bool,
) -> AppState {
    let deadline = Instant::now() + Duration::from_secs(3);
    while Instant::now() < deadline {
        kernel.tick();
        let state = kernel.store.state();
        if pred(&state) {
            return state;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("timed out waiting for: {what}");
}

fn all_settled(state: &AppState) -> bool {
    matches!(state.boot, BootState::Ready)
        && state
            .viewers
            .iter()
            .all(|(_, v)| !v.is_loading && v.data != ViewerData::Pending)
}

#[test]
fn refresh_holds_the_loading_flag_for_at_least_the_minimum_duration() {
    let bindings = Arc::new(CountingBindings::default());
    let mut kernel = AppKernel::new(
        AppStore::new(AppState::default()),
        Arc::new(OneObjectMetadata),
        bindings.clone(),
    );

    kernel.dispatch(AppCommand::LoadEntityDefinitions);
    pump_until(&mut kernel, "boot + initial fetches", all_settled);
    assert_eq!(bindings.refreshes.load(Ordering::SeqCst), 0);

    let refreshed_at = Instant::now();
    kernel.dispatch(AppCommand::RefreshBindings);
    // A second refresh while the first is in flight coalesces into it.
    kernel.dispatch(AppCommand::RefreshBindings);

    let state = kernel.store.state();
    assert!(state.viewers.iter().all(|(_, v)| v.is_loading));
    // Rows stay visible underneath the refresh spinner.
    assert!(state
        .viewers
        .iter()
        .all(|(_, v)| matches!(v.data, ViewerData::Ready(_))));

    let state = pump_until(&mut kernel, "refresh completion", all_settled);
    let held_for = refreshed_at.elapsed();

    assert!(
        held_for >= Duration::from_millis(300),
        "loading cleared after {held_for:?}, before the 300 ms floor"
    );
    // Each mounted viewer refreshed exactly once despite the double dispatch.
    assert_eq!(bindings.refreshes.load(Ordering::SeqCst), 3);
    assert!(state.viewers.iter().all(|(_, v)| !v.is_loading));
}

#[test]
fn refresh_before_any_selection_is_a_no_op() {
    let bindings = Arc::new(CountingBindings::default());
    let mut kernel = AppKernel::new(
        AppStore::new(AppState::default()),
        Arc::new(OneObjectMetadata),
        bindings.clone(),
    );

    kernel.dispatch(AppCommand::RefreshBindings);
    kernel.tick();

    assert_eq!(bindings.refreshes.load(Ordering::SeqCst), 0);
    assert!(kernel.store.state().viewers.iter().all(|(_, v)| !v.is_loading));
}
