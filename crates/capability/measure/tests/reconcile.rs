use domain::{AggregatedReading, RawMeasurementWire};
use pvsr_measure::{natural_cmp, reconcile, reconcile_channels};
use std::cmp::Ordering;

fn reading(mppt: &str, string_num: &str) -> AggregatedReading {
    AggregatedReading {
        mppt: mppt.to_string(),
        string_num: string_num.to_string(),
        ..AggregatedReading::default()
    }
}

fn flat(fields: &[(&str, &str)]) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[test]
fn aggregated_channel_is_authoritative() {
    let aggregated = vec![AggregatedReading {
        voc: Some("601".to_string()),
        ..reading("1", "1")
    }];
    let flat = flat(&[("string_voc_1_1", "999"), ("string_voc_1_2", "888")]);

    let points = reconcile_channels(aggregated, flat, &[]);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].voc.as_deref(), Some("601"));
}

#[test]
fn flat_fields_group_by_identity() {
    let points = reconcile_channels(
        Vec::new(),
        flat(&[("string_voc_1_2", "600"), ("string_isc_1_2", "9.5")]),
        &[],
    );
    assert_eq!(points.len(), 1);
    let point = &points[0];
    assert_eq!(point.inverter_index, 0);
    assert_eq!(point.mppt, "1");
    assert_eq!(point.string_num, "2");
    assert_eq!(point.voc.as_deref(), Some("600"));
    assert_eq!(point.isc.as_deref(), Some("9.5"));
}

#[test]
fn indexed_flat_fields_group_by_identity() {
    let points = reconcile_channels(
        Vec::new(),
        flat(&[("string_voc_1_1_2", "600"), ("string_isc_1_1_2", "9.5")]),
        &[],
    );
    assert_eq!(points.len(), 1);
    let point = &points[0];
    assert_eq!(point.inverter_index, 1);
    assert_eq!(point.mppt, "1");
    assert_eq!(point.string_num, "2");
    assert_eq!(point.voc.as_deref(), Some("600"));
    assert_eq!(point.isc.as_deref(), Some("9.5"));
}

#[test]
fn current_fills_isc_slot() {
    let points = reconcile_channels(Vec::new(), flat(&[("string_current_1_1", "9.8")]), &[]);
    assert_eq!(points[0].isc.as_deref(), Some("9.8"));
}

#[test]
fn unrecognized_fields_are_dropped_silently() {
    let points = reconcile_channels(
        Vec::new(),
        flat(&[
            ("string_voc_1_1", "600"),
            ("string_count", "14"),
            ("csrf_token", "zzz"),
        ]),
        &[],
    );
    assert_eq!(points.len(), 1);
}

#[test]
fn natural_order_sorts_numeric_identifiers() {
    let fields = flat(&[
        ("string_voc_10_1", "a"),
        ("string_voc_2_1", "b"),
        ("string_voc_2_10", "c"),
        ("string_voc_2_2", "d"),
    ]);
    let points = reconcile_channels(Vec::new(), fields, &[]);
    let order: Vec<(String, String)> = points
        .iter()
        .map(|point| (point.mppt.clone(), point.string_num.clone()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("2".to_string(), "1".to_string()),
            ("2".to_string(), "2".to_string()),
            ("2".to_string(), "10".to_string()),
            ("10".to_string(), "1".to_string()),
        ]
    );
}

#[test]
fn sorts_by_inverter_then_mppt() {
    let aggregated = vec![
        AggregatedReading {
            inverter_index: Some(1),
            ..reading("1", "1")
        },
        AggregatedReading {
            inverter_index: Some(0),
            ..reading("2", "1")
        },
        AggregatedReading {
            inverter_index: Some(0),
            ..reading("1", "1")
        },
    ];
    let points = reconcile(&RawMeasurementWire::Aggregated(aggregated), &[]);
    let order: Vec<(u32, String)> = points
        .iter()
        .map(|point| (point.inverter_index, point.mppt.clone()))
        .collect();
    assert_eq!(
        order,
        vec![
            (0, "1".to_string()),
            (0, "2".to_string()),
            (1, "1".to_string()),
        ]
    );
}

#[test]
fn roster_resolves_inverter_labels() {
    let roster = vec!["SMA Core1".to_string(), "SMA Core2".to_string()];
    let fields = flat(&[("string_voc_1_1_1", "600"), ("string_voc_3_1_1", "590")]);
    let points = reconcile_channels(Vec::new(), fields, &roster);
    assert_eq!(points[0].inverter_label, "SMA Core2");
    // 花名册缺位：合成标签
    assert_eq!(points[1].inverter_label, "INV04");
}

#[test]
fn explicit_inverter_id_wins_over_roster() {
    let roster = vec!["Roster Label".to_string()];
    let aggregated = vec![AggregatedReading {
        inverter_id: Some("Pad 3 West".to_string()),
        ..reading("1", "1")
    }];
    let points = reconcile(&RawMeasurementWire::Aggregated(aggregated), &roster);
    assert_eq!(points[0].inverter_label, "Pad 3 West");
}

#[test]
fn missing_index_defaults_to_zero() {
    let points = reconcile(
        &RawMeasurementWire::Aggregated(vec![reading("1", "1")]),
        &[],
    );
    assert_eq!(points[0].inverter_index, 0);
    assert_eq!(points[0].inverter_label, "INV01");
}

#[test]
fn malformed_numbers_pass_through_verbatim() {
    let points = reconcile_channels(
        Vec::new(),
        flat(&[("string_voc_1_1", "~600 (wet)"), ("string_rins_1_1", ">1G")]),
        &[],
    );
    assert_eq!(points[0].voc.as_deref(), Some("~600 (wet)"));
    assert_eq!(points[0].rins.as_deref(), Some(">1G"));
}

#[test]
fn duplicate_metric_keeps_first_value() {
    let points = reconcile_channels(
        Vec::new(),
        flat(&[("string_voc_1_1", "600"), ("string_voc_1_1", "601")]),
        &[],
    );
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].voc.as_deref(), Some("600"));
}

#[test]
fn duplicate_aggregated_keys_merge() {
    let aggregated = vec![
        AggregatedReading {
            voc: Some("600".to_string()),
            ..reading("1", "1")
        },
        AggregatedReading {
            isc: Some("9.5".to_string()),
            ..reading("1", "1")
        },
    ];
    let points = reconcile(&RawMeasurementWire::Aggregated(aggregated), &[]);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].voc.as_deref(), Some("600"));
    assert_eq!(points[0].isc.as_deref(), Some("9.5"));
}

#[test]
fn empty_channels_yield_no_points() {
    let points = reconcile_channels(Vec::new(), Vec::new(), &[]);
    assert!(points.is_empty());
}

#[test]
fn natural_cmp_prefers_numbers() {
    assert_eq!(natural_cmp("2", "10"), Ordering::Less);
    assert_eq!(natural_cmp("10", "10"), Ordering::Equal);
    assert_eq!(natural_cmp("2", "A"), Ordering::Less);
    assert_eq!(natural_cmp("B", "A"), Ordering::Greater);
}
