use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use bindex_app_core::{
    AppCommand, AppKernel, AppState, AppStore, BindingsPort, BootState, MetadataPort, ViewerData,
    ViewerSlot,
};
use bindex_core::{BindingRecord, BindingType, ObjectDescriptor, TriggerAction, TriggerOperation};

struct StubMetadata;

#[async_trait]
impl MetadataPort for StubMetadata {
    async fn entity_definitions(&self) -> anyhow::Result<Vec<ObjectDescriptor>> {
        // Deliberately not in display order.
        Ok(vec![
            ObjectDescriptor {
                developer_name: "Potato__c".into(),
                label: "Potato".into(),
            },
            ObjectDescriptor {
                developer_name: "Contact".into(),
                label: "Contact".into(),
            },
            ObjectDescriptor {
                developer_name: "Account".into(),
                label: "Account".into(),
            },
        ])
    }
}

struct StubBindings;

#[async_trait]
impl BindingsPort for StubBindings {
    async fn domain_process_bindings(
        &self,
        object: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>> {
        Ok(vec![BindingRecord {
            id: format!("{object}:{phase}:{is_async}"),
            master_label: format!("{object} {phase}"),
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
        self.domain_process_bindings(object, phase, is_async).await
    }
}

fn pump_until(
    kernel: &mut AppKernel<StubMetadata, StubBindings>,
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
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("timed out waiting for: {what}");
}

fn all_resolved(state: &AppState) -> bool {
    matches!(state.boot, BootState::Ready)
        && state
            .viewers
            .iter()
            .all(|(_, v)| !v.is_loading && v.data != ViewerData::Pending)
}

fn booted_kernel() -> AppKernel<StubMetadata, StubBindings> {
    let mut kernel = AppKernel::new(
        AppStore::new(AppState::default()),
        Arc::new(StubMetadata),
        Arc::new(StubBindings),
    );
    kernel.dispatch(AppCommand::LoadEntityDefinitions);
    pump_until(&mut kernel, "boot + initial fetches", all_resolved);
    kernel
}

#[test]
fn boot_defaults_to_first_sorted_object_and_insert_phases() {
    let mut kernel = booted_kernel();
    let state = kernel.store.state();

    // Options sorted by label ascending regardless of collaborator order,
    // and the default selection is the first sorted entry.
    let labels: Vec<&str> = state.objects.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, ["Account", "Contact", "Potato"]);
    assert_eq!(state.selected_object.as_deref(), Some("Account"));

    assert_eq!(state.viewers.before.phase.to_string(), "Before_Insert");
    assert_eq!(state.viewers.after.phase.to_string(), "After_Insert");
    assert_eq!(state.viewers.after_async.phase.to_string(), "After_Insert");
    assert!(state.viewers.after_async.is_async);
    assert!(!state.viewers.before.is_async);

    match &state.viewers.before.data {
        ViewerData::Ready(records) => {
            assert_eq!(records[0].id, "Account:Before_Insert:false");
        }
        other => panic!("expected resolved data, got {other:?}"),
    }
}

#[test]
fn selecting_an_object_refetches_without_touching_phases() {
    let mut kernel = booted_kernel();

    kernel.dispatch(AppCommand::SelectObject("Potato__c".into()));
    let state = kernel.store.state();
    assert_eq!(state.selected_object.as_deref(), Some("Potato__c"));
    assert_eq!(state.viewers.before.phase.to_string(), "Before_Insert");
    assert_eq!(state.viewers.after.phase.to_string(), "After_Insert");
    assert!(state.viewers.iter().all(|(_, v)| v.is_loading));

    let state = pump_until(&mut kernel, "potato fetches", all_resolved);
    match &state.viewers.after.data {
        ViewerData::Ready(records) => {
            assert_eq!(records[0].id, "Potato__c:After_Insert:false");
        }
        other => panic!("expected resolved data, got {other:?}"),
    }
}

#[test]
fn selecting_an_action_rederives_phases_and_keeps_the_object() {
    let mut kernel = booted_kernel();
    kernel.dispatch(AppCommand::SelectObject("Potato__c".into()));
    pump_until(&mut kernel, "potato fetches", all_resolved);

    kernel.dispatch(AppCommand::SelectAction(TriggerAction::Delete));
    let state = kernel.store.state();
    assert_eq!(state.selected_object.as_deref(), Some("Potato__c"));
    assert_eq!(state.viewers.before.phase.to_string(), "Before_Delete");
    assert_eq!(state.viewers.after.phase.to_string(), "After_Delete");
    assert_eq!(state.viewers.after_async.phase.to_string(), "After_Delete");

    let state = pump_until(&mut kernel, "delete fetches", all_resolved);
    match &state.viewers.before.data {
        ViewerData::Ready(records) => {
            assert_eq!(records[0].id, "Potato__c:Before_Delete:false");
        }
        other => panic!("expected resolved data, got {other:?}"),
    }
}

#[test]
fn reselecting_the_current_inputs_does_not_restart_fetches() {
    let mut kernel = booted_kernel();
    let before_ids: Vec<u64> = ViewerSlot::ALL
        .iter()
        .map(|&s| kernel.store.state().viewers.get(s).request_id)
        .collect();

    kernel.dispatch(AppCommand::SelectAction(TriggerAction::Create));
    kernel.dispatch(AppCommand::SelectObject("Account".into()));

    let state = kernel.store.state();
    let after_ids: Vec<u64> = ViewerSlot::ALL
        .iter()
        .map(|&s| state.viewers.get(s).request_id)
        .collect();
    assert_eq!(before_ids, after_ids);
    assert!(state.viewers.iter().all(|(_, v)| !v.is_loading));
}
