use bindex_core::{item_count_label, BindingRecord, BindingType, ObjectDescriptor};

#[test]
fn object_descriptors_sort_case_insensitively_by_label() {
    let mut objects = vec![
        ObjectDescriptor {
            developer_name: "Potato__c".into(),
            label: "potato".into(),
        },
        ObjectDescriptor {
            developer_name: "Account".into(),
            label: "Account".into(),
        },
        ObjectDescriptor {
            developer_name: "Order".into(),
            label: "order".into(),
        },
        ObjectDescriptor {
            developer_name: "Asset".into(),
            label: "asset".into(),
        },
    ];

    ObjectDescriptor::sort_for_display(&mut objects);

    let names: Vec<&str> = objects.iter().map(|o| o.developer_name.as_str()).collect();
    assert_eq!(names, ["Account", "Asset", "Order", "Potato__c"]);
}

#[test]
fn binding_record_decodes_platform_field_names() {
    let json = r#"{
        "Id": "m005e000000TesTAAQ",
        "MasterLabel": "Rollup potato counts",
        "Type__c": "Action",
        "IsActive__c": true,
        "OrderOfExecution__c": 10,
        "ExecuteAsynchronous__c": false
    }"#;

    let record: BindingRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.master_label, "Rollup potato counts");
    assert_eq!(record.binding_type, BindingType::Action);
    assert_eq!(record.order_of_execution, 10);
    assert!(record.is_active);
    assert!(!record.execute_asynchronous);
}

#[test]
fn unknown_binding_types_are_preserved_and_have_no_icon() {
    let action = BindingType::from("Action".to_string());
    let criteria = BindingType::from("Criteria".to_string());
    let other = BindingType::from("Webhook".to_string());

    assert_eq!(action.icon_name(), Some("standard:invocable_action"));
    assert_eq!(criteria.icon_name(), Some("standard:filter_criteria_rule"));
    assert_eq!(other, BindingType::Other("Webhook".into()));
    assert_eq!(other.icon_name(), None);
    assert_eq!(String::from(other), "Webhook");
}

#[test]
fn item_count_label_reports_length() {
    assert_eq!(item_count_label(0), "0 Item(s)");
    assert_eq!(item_count_label(1), "1 Item(s)");
    assert_eq!(item_count_label(12), "12 Item(s)");
}
