use bindex_core::{BindingRecord, ObjectDescriptor, TriggerAction};

use crate::domain::ViewerSlot;

#[derive(Debug, Clone)]
pub enum ViewerFetchEvent {
    Loaded { records: Vec<BindingRecord> },
    Failed { message: String },
}

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Boot
    BootLoadingStarted,
    EntityDefinitionsLoaded {
        objects: Vec<ObjectDescriptor>,
    },
    BootFailed {
        message: String,
    },

    // Filter selections
    ObjectSelected(String),
    ActionSelected(TriggerAction),

    // Fetch completion, tagged with the request it answers
    ViewerEvent {
        slot: ViewerSlot,
        request_id: u64,
        ev: ViewerFetchEvent,
    },
}
