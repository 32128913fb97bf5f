use serde::{Deserialize, Serialize};

pub mod phase;

pub use phase::{
    viewer_title, PhaseError, Timing, TriggerAction, TriggerOperation, TriggerOperationKind,
};

/// API name of the custom-metadata object that stores binding records.
/// Record navigation always targets this object type.
pub const BINDING_OBJECT_API_NAME: &str = "DomainProcessBinding__mdt";

/// A triggerable object type, as returned by the platform metadata query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectDescriptor {
    #[serde(rename = "DeveloperName")]
    pub developer_name: String,
    #[serde(rename = "Label")]
    pub label: String,
}

impl ObjectDescriptor {
    /// Display order: case-insensitive ascending by label, developer name as
    /// the tie-breaker so the order is total.
    pub fn sort_for_display(descriptors: &mut [ObjectDescriptor]) {
        descriptors.sort_by(|a, b| {
            a.label
                .to_lowercase()
                .cmp(&b.label.to_lowercase())
                .then_with(|| a.developer_name.cmp(&b.developer_name))
        });
    }
}

/// Binding classification. The platform stores this as a free-form picklist
/// value; anything outside the known pair is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum BindingType {
    Action,
    Criteria,
    Other(String),
}

impl From<String> for BindingType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Action" => Self::Action,
            "Criteria" => Self::Criteria,
            _ => Self::Other(value),
        }
    }
}

impl From<BindingType> for String {
    fn from(value: BindingType) -> Self {
        match value {
            BindingType::Action => "Action".to_string(),
            BindingType::Criteria => "Criteria".to_string(),
            BindingType::Other(other) => other,
        }
    }
}

impl BindingType {
    /// Closed icon mapping. Unrecognized types render without an icon.
    pub fn icon_name(&self) -> Option<&'static str> {
        match self {
            Self::Action => Some("standard:invocable_action"),
            Self::Criteria => Some("standard:filter_criteria_rule"),
            Self::Other(_) => None,
        }
    }
}

/// One Domain Process Binding record, a read-only snapshot of the platform's
/// custom-metadata row. Field names follow the platform schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BindingRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "MasterLabel")]
    pub master_label: String,
    #[serde(rename = "Type__c")]
    pub binding_type: BindingType,
    #[serde(rename = "IsActive__c")]
    pub is_active: bool,
    #[serde(rename = "OrderOfExecution__c")]
    pub order_of_execution: u32,
    #[serde(rename = "ExecuteAsynchronous__c")]
    pub execute_asynchronous: bool,
}

/// List-length label for a resolved binding list.
pub fn item_count_label(len: usize) -> String {
    format!("{len} Item(s)")
}

/// Placeholder shown instead of the list body when a fetch has resolved to
/// an empty sequence. Never shown while a fetch is still pending.
pub const EMPTY_LIST_PLACEHOLDER: &str = "No items to display";
