//! 双通道归并
//!
//! 把聚合通道或平铺通道归并为单一规范测量点列表：
//! - 聚合通道非空时权威，平铺通道整体忽略（避免双通道重复计入）
//! - 同一身份键的条目合并为一个测量点，每个指标保留首值
//! - 畸形数值原样透传（录入表单允许自由文本，校验在上游）

use crate::key::{Metric, derive_flat_key};
use domain::{AggregatedReading, MeasurementKey, MeasurementPoint, RawMeasurementWire};
use std::cmp::Ordering;
use std::collections::HashMap;

/// 两通道便捷入口：应用优先级后归并。
pub fn reconcile_channels(
    aggregated: Vec<AggregatedReading>,
    flat: Vec<(String, String)>,
    roster: &[String],
) -> Vec<MeasurementPoint> {
    if !aggregated.is_empty() {
        if !flat.is_empty() {
            pvsr_telemetry::record_flat_channel_ignored();
        }
        return reconcile(&RawMeasurementWire::Aggregated(aggregated), roster);
    }
    reconcile(&RawMeasurementWire::FlatFields(flat), roster)
}

/// 归并单一线格式为规范列表。
///
/// 输出按 `(逆变器序号, MPPT, 组串号)` 自然序稳定升序，
/// 同键并列时保持输入顺序。
pub fn reconcile(wire: &RawMeasurementWire, roster: &[String]) -> Vec<MeasurementPoint> {
    let mut points = match wire {
        RawMeasurementWire::Aggregated(items) => from_aggregated(items, roster),
        RawMeasurementWire::FlatFields(fields) => from_flat(fields, roster),
    };
    sort_points(&mut points);
    pvsr_telemetry::record_reconciled_points(points.len() as u64);
    points
}

/// 自然比较：两边都是非负整数文本时按数值比较（"2" < "10"），
/// 数字排在非数字之前，其余按字典序。
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(left), Ok(right)) => left.cmp(&right),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// 按身份键稳定升序排序。
pub fn sort_points(points: &mut [MeasurementPoint]) {
    points.sort_by(|a, b| {
        a.inverter_index
            .cmp(&b.inverter_index)
            .then_with(|| natural_cmp(&a.mppt, &b.mppt))
            .then_with(|| natural_cmp(&a.string_num, &b.string_num))
    });
}

fn from_aggregated(items: &[AggregatedReading], roster: &[String]) -> Vec<MeasurementPoint> {
    let mut points: Vec<MeasurementPoint> = Vec::new();
    let mut index_by_key: HashMap<MeasurementKey, usize> = HashMap::new();

    for item in items {
        let inverter_index = item.inverter_index.unwrap_or(0);
        let key = MeasurementKey {
            inverter_index,
            mppt: item.mppt.clone(),
            string_num: item.string_num.clone(),
        };
        let idx = *index_by_key.entry(key).or_insert_with(|| {
            let label = item
                .inverter_id
                .as_deref()
                .filter(|label| !label.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| resolve_label(roster, inverter_index));
            points.push(MeasurementPoint {
                inverter_index,
                inverter_label: label,
                mppt: item.mppt.clone(),
                string_num: item.string_num.clone(),
                ..MeasurementPoint::default()
            });
            points.len() - 1
        });

        let point = &mut points[idx];
        assign(point, Metric::Voc, item.voc.as_deref());
        // isc 缺失时接受 current 别名
        assign(point, Metric::Isc, item.isc.as_deref().or(item.current.as_deref()));
        assign(point, Metric::Vmp, item.vmp.as_deref());
        assign(point, Metric::Imp, item.imp.as_deref());
        assign(point, Metric::Rins, item.rins.as_deref());
        assign(point, Metric::Irr, item.irr.as_deref());
        assign(point, Metric::Temp, item.temp.as_deref());
        assign(point, Metric::Rlo, item.rlo.as_deref());
        assign(point, Metric::Notes, item.notes.as_deref());
    }

    points
}

fn from_flat(fields: &[(String, String)], roster: &[String]) -> Vec<MeasurementPoint> {
    let mut points: Vec<MeasurementPoint> = Vec::new();
    let mut index_by_key: HashMap<MeasurementKey, usize> = HashMap::new();

    for (name, value) in fields {
        let Some((metric, key)) = derive_flat_key(name) else {
            pvsr_telemetry::record_dropped_unmatched_field();
            continue;
        };
        if value.trim().is_empty() {
            continue;
        }
        let idx = *index_by_key.entry(key.clone()).or_insert_with(|| {
            points.push(MeasurementPoint {
                inverter_index: key.inverter_index,
                inverter_label: resolve_label(roster, key.inverter_index),
                mppt: key.mppt.clone(),
                string_num: key.string_num.clone(),
                ..MeasurementPoint::default()
            });
            points.len() - 1
        });
        assign(&mut points[idx], metric, Some(value.as_str()));
    }

    points
}

/// 逆变器标签解析：按序号查花名册，缺位时合成 `INVnn`。
fn resolve_label(roster: &[String], inverter_index: u32) -> String {
    roster
        .get(inverter_index as usize)
        .filter(|label| !label.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| format!("INV{:02}", inverter_index + 1))
}

/// 指标赋值：保留首值，后到的重复值丢弃并计数。
fn assign(point: &mut MeasurementPoint, metric: Metric, value: Option<&str>) {
    let Some(value) = value else { return };
    if value.trim().is_empty() {
        return;
    }
    let slot = match metric {
        Metric::Voc => &mut point.voc,
        Metric::Isc => &mut point.isc,
        Metric::Vmp => &mut point.vmp,
        Metric::Imp => &mut point.imp,
        Metric::Rins => &mut point.rins,
        Metric::Irr => &mut point.irr,
        Metric::Temp => &mut point.temp,
        Metric::Rlo => &mut point.rlo,
        Metric::Notes => &mut point.notes,
    };
    if slot.is_some() {
        pvsr_telemetry::record_dropped_duplicate_metric();
        return;
    }
    *slot = Some(value.to_string());
}
