//! 保存-重载场景：编码落库后取回解码，属性无损。

use domain::{AttributeBag, EquipmentRecord, SurveyContext};
use pvsr_codec::{decode, encode};
use pvsr_storage::{EquipmentStore, InMemoryEquipmentStore};

#[tokio::test]
async fn saved_inverter_serial_survives_reload() {
    let store = InMemoryEquipmentStore::new();
    let ctx = SurveyContext::new("tenant-1", "user-1", None);

    let mut bag = AttributeBag::new();
    bag.insert("serial".to_string(), "SN001".to_string());
    let record = EquipmentRecord {
        record_id: "rec-1".to_string(),
        tenant_id: "tenant-1".to_string(),
        report_id: "report-1".to_string(),
        category: "inverter".to_string(),
        brand: Some("SMA".to_string()),
        model: Some("Core1".to_string()),
        quantity: Some(1),
        status: Some("installed".to_string()),
        location: Some("pad A".to_string()),
        characteristics: encode("inverter", &bag),
    };

    store
        .replace_equipment(&ctx, "report-1", "inverter", vec![record])
        .await
        .expect("save");

    let reloaded = store
        .fetch_equipment(&ctx, "report-1")
        .await
        .expect("fetch");
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].brand.as_deref(), Some("SMA"));
    assert_eq!(reloaded[0].model.as_deref(), Some("Core1"));

    let attributes = decode("inverter", &reloaded[0].characteristics);
    assert_eq!(attributes.get("serial").map(String::as_str), Some("SN001"));
}
