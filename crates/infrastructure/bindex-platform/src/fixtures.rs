use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use bindex_app_core::{BindingsPort, MetadataPort};
use bindex_core::{BindingRecord, BindingType, ObjectDescriptor, TriggerOperation};

/// Simulated collaborator latency, just enough to make spinners visible.
const FIXTURE_LATENCY: Duration = Duration::from_millis(150);

/// In-memory stand-in for both platform collaborators. Used when no org is
/// configured, and handy for driving the UI without credentials.
pub struct FixturePlatform {
    objects: Vec<ObjectDescriptor>,
    bindings: HashMap<(String, String, bool), Vec<BindingRecord>>,
}

impl Default for FixturePlatform {
    fn default() -> Self {
        Self::new()
    }
}

fn object(developer_name: &str, label: &str) -> ObjectDescriptor {
    ObjectDescriptor {
        developer_name: developer_name.into(),
        label: label.into(),
    }
}

fn binding(
    id: &str,
    label: &str,
    binding_type: BindingType,
    order: u32,
    is_active: bool,
    is_async: bool,
) -> BindingRecord {
    BindingRecord {
        id: id.into(),
        master_label: label.into(),
        binding_type,
        is_active,
        order_of_execution: order,
        execute_asynchronous: is_async,
    }
}

impl FixturePlatform {
    pub fn new() -> Self {
        // Collaborator order is deliberately not display order; the selector
        // is responsible for sorting.
        let objects = vec![
            object("Potato__c", "Potato"),
            object("Contact", "Contact"),
            object("Account", "Account"),
            object("Order", "order"),
        ];

        let mut bindings: HashMap<(String, String, bool), Vec<BindingRecord>> = HashMap::new();
        let mut seed = |obj: &str, phase: &str, is_async: bool, records: Vec<BindingRecord>| {
            bindings.insert((obj.to_string(), phase.to_string(), is_async), records);
        };

        seed(
            "Account",
            "Before_Insert",
            false,
            vec![
                binding(
                    "m00A0",
                    "Default account region",
                    BindingType::Action,
                    10,
                    true,
                    false,
                ),
                binding(
                    "m00A1",
                    "Only commercial accounts",
                    BindingType::Criteria,
                    20,
                    true,
                    false,
                ),
            ],
        );
        seed(
            "Account",
            "After_Insert",
            false,
            vec![binding(
                "m00A2",
                "Publish account created event",
                BindingType::Action,
                10,
                true,
                false,
            )],
        );
        seed(
            "Account",
            "After_Insert",
            true,
            vec![binding(
                "m00A3",
                "Recalculate account hierarchy",
                BindingType::Action,
                10,
                true,
                true,
            )],
        );
        seed(
            "Potato__c",
            "Before_Update",
            false,
            vec![
                binding(
                    "m00P0",
                    "Normalize potato variety",
                    BindingType::Action,
                    5,
                    true,
                    false,
                ),
                binding(
                    "m00P1",
                    "Skip archived potatoes",
                    BindingType::Criteria,
                    15,
                    false,
                    false,
                ),
                binding(
                    "m00P2",
                    "Potato webhook relay",
                    BindingType::Other("Webhook".into()),
                    25,
                    true,
                    false,
                ),
            ],
        );
        seed(
            "Potato__c",
            "After_Delete",
            false,
            vec![binding(
                "m00P3",
                "Archive potato lineage",
                BindingType::Action,
                10,
                true,
                false,
            )],
        );

        Self { objects, bindings }
    }

    fn lookup(
        &self,
        object_developer_name: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> Vec<BindingRecord> {
        let key = (
            object_developer_name.to_string(),
            phase.to_string(),
            is_async,
        );
        let mut records = self.bindings.get(&key).cloned().unwrap_or_default();
        records.sort_by_key(|r| r.order_of_execution);
        records
    }
}

#[async_trait]
impl MetadataPort for FixturePlatform {
    async fn entity_definitions(&self) -> anyhow::Result<Vec<ObjectDescriptor>> {
        tokio::time::sleep(FIXTURE_LATENCY).await;
        Ok(self.objects.clone())
    }
}

#[async_trait]
impl BindingsPort for FixturePlatform {
    async fn domain_process_bindings(
        &self,
        object_developer_name: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>> {
        tokio::time::sleep(FIXTURE_LATENCY).await;
        Ok(self.lookup(object_developer_name, phase, is_async))
    }

    async fn refresh_domain_process_bindings(
        &self,
        object_developer_name: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>> {
        tokio::time::sleep(FIXTURE_LATENCY).await;
        Ok(self.lookup(object_developer_name, phase, is_async))
    }
}
