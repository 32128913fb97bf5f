use bindex_core::TriggerAction;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Boot
    LoadEntityDefinitions,

    // Filter selections
    SelectObject(String),
    SelectAction(TriggerAction),

    // Explicit re-fetch of every mounted viewer
    RefreshBindings,
}
