use domain::{EquipmentRecord, SurveyContext};
use pvsr_storage::{EquipmentStore, InMemoryEquipmentStore, InverterRosterStore};

fn inverter(record_id: &str, brand: Option<&str>, model: Option<&str>) -> EquipmentRecord {
    EquipmentRecord {
        record_id: record_id.to_string(),
        tenant_id: "tenant-1".to_string(),
        report_id: "report-1".to_string(),
        category: "inverter".to_string(),
        brand: brand.map(str::to_string),
        model: model.map(str::to_string),
        quantity: None,
        status: None,
        location: None,
        characteristics: String::new(),
    }
}

#[tokio::test]
async fn roster_preserves_save_order() {
    let store = InMemoryEquipmentStore::new();
    let ctx = SurveyContext::new("tenant-1", "user-1", None);

    store
        .replace_equipment(
            &ctx,
            "report-1",
            "inverter",
            vec![
                inverter("a", Some("SMA"), Some("Core1")),
                inverter("b", Some("Huawei"), None),
                inverter("c", None, None),
            ],
        )
        .await
        .expect("save");

    let roster = store
        .inverter_roster(&ctx, "report-1")
        .await
        .expect("roster");
    assert_eq!(roster, vec!["SMA Core1", "Huawei", ""]);
}

#[tokio::test]
async fn roster_is_empty_without_inverters() {
    let store = InMemoryEquipmentStore::new();
    let ctx = SurveyContext::new("tenant-1", "user-1", None);
    let roster = store
        .inverter_roster(&ctx, "report-1")
        .await
        .expect("roster");
    assert!(roster.is_empty());
}
