use domain::{AttributeBag, EquipmentRecord, MeasurementPoint};
use pvsr_codec::encode;
use pvsr_report::assemble;

fn record(category: &str, characteristics: &str) -> EquipmentRecord {
    EquipmentRecord {
        record_id: format!("rec-{}", category),
        tenant_id: "tenant-1".to_string(),
        report_id: "report-1".to_string(),
        category: category.to_string(),
        brand: None,
        model: None,
        quantity: None,
        status: None,
        location: None,
        characteristics: characteristics.to_string(),
    }
}

fn module(brand: &str, power_wp: &str, quantity: i64) -> EquipmentRecord {
    let mut bag = AttributeBag::new();
    bag.insert("power_wp".to_string(), power_wp.to_string());
    EquipmentRecord {
        brand: Some(brand.to_string()),
        quantity: Some(quantity),
        characteristics: encode("pv_module", &bag),
        ..record("pv_module", "")
    }
}

#[test]
fn empty_input_keeps_every_section_present() {
    let model = assemble(&[], &[]);
    let keys: Vec<_> = model.sections.iter().map(|section| section.key).collect();
    assert_eq!(
        keys,
        vec![
            "pv_modules",
            "inverters",
            "protection",
            "meters",
            "telemetry",
            "punch_list",
            "notes"
        ]
    );
    assert!(model.sections.iter().all(|section| section.entries.is_empty()));
    assert!(model.measurements.is_empty());
    assert_eq!(model.totals.module_count, 0);
    assert_eq!(model.totals.total_power_wp, 0.0);
    assert_eq!(model.totals.inverter_count, 0);
    assert_eq!(model.totals.open_punch_items, 0);
    assert_eq!(model.totals.measurement_count, 0);
}

#[test]
fn records_group_into_their_sections() {
    let records = vec![
        record("inverter", "Serial Number: SN001"),
        record("note", "Note: gate code 4711"),
        record("inverter", "Serial Number: SN002"),
    ];
    let model = assemble(&records, &[]);
    let inverters = model
        .sections
        .iter()
        .find(|section| section.key == "inverters")
        .expect("inverters section");
    assert_eq!(inverters.entries.len(), 2);
    assert_eq!(
        inverters.entries[0].attributes.get("serial").map(String::as_str),
        Some("SN001")
    );
    let notes = model
        .sections
        .iter()
        .find(|section| section.key == "notes")
        .expect("notes section");
    assert_eq!(notes.entries.len(), 1);
}

#[test]
fn module_power_aggregates_across_groups() {
    let records = vec![module("Longi", "450", 10), module("Trina", "400", 5)];
    let model = assemble(&records, &[]);
    assert_eq!(model.totals.module_count, 15);
    assert_eq!(model.totals.total_power_wp, 450.0 * 10.0 + 400.0 * 5.0);
    let modules = &model.sections[0];
    assert_eq!(modules.entries[0].group_power_wp, Some(4500.0));
    assert_eq!(modules.entries[1].group_power_wp, Some(2000.0));
}

#[test]
fn comma_decimal_power_parses() {
    let model = assemble(&[module("Longi", "450,5", 2)], &[]);
    assert_eq!(model.totals.total_power_wp, 901.0);
}

#[test]
fn unparsable_power_contributes_nothing() {
    let model = assemble(&[module("Longi", "tbd", 10)], &[]);
    assert_eq!(model.totals.total_power_wp, 0.0);
    assert_eq!(model.totals.module_count, 10);
    assert_eq!(model.sections[0].entries[0].group_power_wp, None);
}

#[test]
fn missing_quantity_counts_zero() {
    let mut record = module("Longi", "450", 0);
    record.quantity = None;
    let model = assemble(&[record], &[]);
    assert_eq!(model.totals.module_count, 0);
    assert_eq!(model.totals.total_power_wp, 0.0);
}

#[test]
fn unknown_category_records_are_skipped() {
    let model = assemble(&[record("battery", "Capacity: 10kWh")], &[]);
    assert!(model.sections.iter().all(|section| section.entries.is_empty()));
}

#[test]
fn punch_items_count_open_only() {
    let mut open = record("punch_item", "Severity: high");
    open.status = Some("open".to_string());
    let mut pending = record("punch_item", "Severity: low");
    pending.status = None;
    let mut closed = record("punch_item", "Severity: low");
    closed.status = Some("Closed".to_string());

    let model = assemble(&[open, pending, closed], &[]);
    assert_eq!(model.totals.open_punch_items, 2);
    assert_eq!(model.sections[5].entries.len(), 3);
}

#[test]
fn measurements_are_sorted_and_counted() {
    let point = |mppt: &str, string_num: &str| MeasurementPoint {
        mppt: mppt.to_string(),
        string_num: string_num.to_string(),
        ..MeasurementPoint::default()
    };
    let model = assemble(&[], &[point("10", "1"), point("2", "1")]);
    assert_eq!(model.totals.measurement_count, 2);
    assert_eq!(model.measurements[0].mppt, "2");
    assert_eq!(model.measurements[1].mppt, "10");
}

#[test]
fn assembly_is_deterministic() {
    let records = vec![
        module("Longi", "450", 10),
        record("inverter", "Serial Number: SN001"),
    ];
    let points = vec![MeasurementPoint {
        mppt: "1".to_string(),
        string_num: "1".to_string(),
        voc: Some("600".to_string()),
        ..MeasurementPoint::default()
    }];
    assert_eq!(assemble(&records, &points), assemble(&records, &points));
}
