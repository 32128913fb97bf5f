use bindex_core::ObjectDescriptor;

use crate::domain::{AppState, BootState, ViewerData, ViewerSlot};

use super::events::{DomainEvent, ViewerFetchEvent};

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::BootLoadingStarted => {
            state.boot = BootState::Loading;
        }

        DomainEvent::EntityDefinitionsLoaded { mut objects } => {
            ObjectDescriptor::sort_for_display(&mut objects);
            if state.selected_object.is_none() {
                state.selected_object = objects.first().map(|o| o.developer_name.clone());
            }
            state.objects = objects;
            state.boot = BootState::Ready;
        }

        DomainEvent::BootFailed { message } => {
            state.boot = BootState::Failed(message);
        }

        DomainEvent::ObjectSelected(developer_name) => {
            if state.selected_object.as_deref() != Some(developer_name.as_str()) {
                state.selected_object = Some(developer_name);
                invalidate_viewers(&mut state);
            }
        }

        DomainEvent::ActionSelected(action) => {
            if state.selected_action != action {
                state.selected_action = action;
                for slot in ViewerSlot::ALL {
                    state.viewers.get_mut(slot).phase = slot.phase_for(action);
                }
                invalidate_viewers(&mut state);
            }
        }

        DomainEvent::ViewerEvent { slot, ev, .. } => {
            // Staleness is filtered in the kernel's tick; whatever reaches
            // the reducer answers the slot's current request.
            let viewer = state.viewers.get_mut(slot);
            match ev {
                ViewerFetchEvent::Loaded { records } => {
                    viewer.data = ViewerData::Ready(records);
                }
                ViewerFetchEvent::Failed { message } => {
                    viewer.data = ViewerData::Failed(message);
                }
            }
            viewer.is_loading = false;
        }
    }
    state
}

/// An input-triple change makes every viewer's current data stale.
fn invalidate_viewers(state: &mut AppState) {
    for slot in ViewerSlot::ALL {
        let viewer = state.viewers.get_mut(slot);
        viewer.data = ViewerData::Pending;
        viewer.is_loading = true;
    }
}
