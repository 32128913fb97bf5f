use bindex_core::{
    item_count_label, BindingRecord, PhaseError, EMPTY_LIST_PLACEHOLDER,
};

use crate::domain::{AppState, BootState, ViewerData, ViewerSlot};

// --- Selector ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOptionVm {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct SelectorVm {
    /// Always in display order, whatever order the collaborator returned.
    pub options: Vec<SelectorOptionVm>,
    pub selected_value: Option<String>,
    pub selected_label: Option<String>,
    pub is_loading: bool,
}

pub fn selector_vm(state: &AppState) -> SelectorVm {
    let options: Vec<SelectorOptionVm> = state
        .objects
        .iter()
        .map(|o| SelectorOptionVm {
            value: o.developer_name.clone(),
            label: o.label.clone(),
        })
        .collect();

    let selected_label = state.selected_object.as_ref().and_then(|value| {
        options
            .iter()
            .find(|o| &o.value == value)
            .map(|o| o.label.clone())
    });

    SelectorVm {
        options,
        selected_value: state.selected_object.clone(),
        selected_label,
        is_loading: matches!(state.boot, BootState::Loading),
    }
}

// --- Filter ---

#[derive(Debug, Clone)]
pub struct ActionOptionVm {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct FilterVm {
    pub actions: Vec<ActionOptionVm>,
    pub selected_action_label: &'static str,
}

pub fn filter_vm(state: &AppState) -> FilterVm {
    FilterVm {
        actions: bindex_core::TriggerAction::ALL
            .iter()
            .map(|&a| ActionOptionVm {
                value: a.value(),
                label: a.label(),
                selected: a == state.selected_action,
            })
            .collect(),
        selected_action_label: state.selected_action.label(),
    }
}

// --- Binding list item ---

#[derive(Debug, Clone)]
pub struct BindingItemVm {
    pub record_id: String,
    pub label: String,
    pub icon_name: Option<&'static str>,
    pub order_of_execution: u32,
    pub is_active: bool,
    pub active_badge_label: &'static str,
    /// Async marker is shown only for bindings that execute asynchronously.
    pub show_async_marker: bool,
}

/// Display adapter for one binding record. No bound record renders nothing.
pub fn binding_item_vm(record: Option<&BindingRecord>) -> Option<BindingItemVm> {
    let record = record?;
    Some(BindingItemVm {
        record_id: record.id.clone(),
        label: record.master_label.clone(),
        icon_name: record.binding_type.icon_name(),
        order_of_execution: record.order_of_execution,
        is_active: record.is_active,
        active_badge_label: if record.is_active { "Active" } else { "Inactive" },
        show_async_marker: record.execute_asynchronous,
    })
}

// --- Viewer ---

#[derive(Debug, Clone)]
pub struct ViewerVm {
    pub title: &'static str,
    pub phase_label: String,
    pub items: Vec<BindingItemVm>,
    /// Present only once data has resolved; never reads "0" mid-fetch.
    pub count_label: Option<String>,
    pub placeholder: Option<&'static str>,
    pub error: Option<String>,
    pub is_loading: bool,
}

/// Projection of one viewer slot. Title derivation happens first and fails
/// fast on the impossible Before+async combination, before anything is
/// prepared for rendering.
pub fn viewer_vm(state: &AppState, slot: ViewerSlot) -> Result<ViewerVm, PhaseError> {
    let viewer = state.viewers.get(slot);
    let title = viewer.phase.title(viewer.is_async)?;

    let (items, count_label, placeholder, error) = match &viewer.data {
        ViewerData::Pending => (Vec::new(), None, None, None),
        ViewerData::Ready(records) => (
            records
                .iter()
                .filter_map(|r| binding_item_vm(Some(r)))
                .collect::<Vec<_>>(),
            Some(item_count_label(records.len())),
            records.is_empty().then_some(EMPTY_LIST_PLACEHOLDER),
            None,
        ),
        ViewerData::Failed(message) => (Vec::new(), None, None, Some(message.clone())),
    };

    Ok(ViewerVm {
        title,
        phase_label: viewer.phase.to_string(),
        items,
        count_label,
        placeholder,
        error,
        is_loading: viewer.is_loading,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindex_core::{BindingType, ObjectDescriptor, Timing, TriggerOperation, TriggerOperationKind};
    use crate::domain::ViewerState;

    fn record(label: &str, order: u32) -> BindingRecord {
        BindingRecord {
            id: format!("m00-{order}"),
            master_label: label.to_string(),
            binding_type: BindingType::Action,
            is_active: true,
            order_of_execution: order,
            execute_asynchronous: false,
        }
    }

    #[test]
    fn count_label_is_absent_while_pending_and_present_once_resolved() {
        let mut state = AppState::default();
        assert_eq!(
            viewer_vm(&state, ViewerSlot::Before).unwrap().count_label,
            None
        );

        state.viewers.before.data = ViewerData::Ready(vec![record("a", 1), record("b", 2)]);
        let vm = viewer_vm(&state, ViewerSlot::Before).unwrap();
        assert_eq!(vm.count_label.as_deref(), Some("2 Item(s)"));
        assert_eq!(vm.placeholder, None);
    }

    #[test]
    fn empty_resolved_list_shows_the_placeholder() {
        let mut state = AppState::default();
        state.viewers.after.data = ViewerData::Ready(Vec::new());

        let vm = viewer_vm(&state, ViewerSlot::After).unwrap();
        assert_eq!(vm.count_label.as_deref(), Some("0 Item(s)"));
        assert_eq!(vm.placeholder, Some(EMPTY_LIST_PLACEHOLDER));
        assert!(vm.items.is_empty());
    }

    #[test]
    fn fetch_errors_stay_distinct_from_empty_results() {
        let mut state = AppState::default();
        state.viewers.after.data = ViewerData::Failed("boom".into());

        let vm = viewer_vm(&state, ViewerSlot::After).unwrap();
        assert_eq!(vm.error.as_deref(), Some("boom"));
        assert_eq!(vm.count_label, None);
        assert_eq!(vm.placeholder, None);
    }

    #[test]
    fn viewer_vm_fails_fast_on_before_async() {
        let mut state = AppState::default();
        // Not constructible through ViewerSlot; forced by hand to prove the
        // guard trips before rendering.
        state.viewers.before = ViewerState {
            phase: TriggerOperation::new(Timing::Before, TriggerOperationKind::Insert).unwrap(),
            is_async: true,
            data: ViewerData::Pending,
            is_loading: false,
            request_id: 0,
        };

        assert_eq!(
            viewer_vm(&state, ViewerSlot::Before).unwrap_err(),
            PhaseError::BeforeAsync
        );
    }

    #[test]
    fn slot_titles_follow_the_timing_and_async_flag() {
        let state = AppState::default();
        assert_eq!(
            viewer_vm(&state, ViewerSlot::Before).unwrap().title,
            "Record Before Save"
        );
        assert_eq!(
            viewer_vm(&state, ViewerSlot::After).unwrap().title,
            "Record After Save"
        );
        assert_eq!(
            viewer_vm(&state, ViewerSlot::AfterAsync).unwrap().title,
            "Run Asynchronously"
        );
    }

    #[test]
    fn binding_item_vm_renders_nothing_without_a_record() {
        assert!(binding_item_vm(None).is_none());
    }

    #[test]
    fn binding_item_vm_maps_badges_icons_and_async_marker() {
        let mut r = record("Validate potato", 7);
        r.is_active = false;
        r.execute_asynchronous = true;
        r.binding_type = BindingType::Other("Webhook".into());

        let vm = binding_item_vm(Some(&r)).unwrap();
        assert_eq!(vm.active_badge_label, "Inactive");
        assert_eq!(vm.icon_name, None);
        assert!(vm.show_async_marker);
        assert_eq!(vm.order_of_execution, 7);
    }

    #[test]
    fn selector_options_mirror_display_ordered_objects() {
        let mut state = AppState::default();
        state.objects = vec![
            ObjectDescriptor {
                developer_name: "Account".into(),
                label: "Account".into(),
            },
            ObjectDescriptor {
                developer_name: "Potato__c".into(),
                label: "Potato".into(),
            },
        ];
        state.selected_object = Some("Potato__c".into());
        state.boot = BootState::Ready;

        let vm = selector_vm(&state);
        assert_eq!(vm.selected_label.as_deref(), Some("Potato"));
        assert!(!vm.is_loading);
        assert_eq!(vm.options.len(), 2);
    }

    #[test]
    fn filter_marks_the_selected_action() {
        let state = AppState::default();
        let vm = filter_vm(&state);
        assert_eq!(vm.selected_action_label, "Created");
        assert_eq!(
            vm.actions
                .iter()
                .filter(|a| a.selected)
                .map(|a| a.value)
                .collect::<Vec<_>>(),
            vec!["create"]
        );
    }
}
