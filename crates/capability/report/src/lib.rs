//! 报告装配能力
//!
//! 把解码后的设备记录与归并后的测量点装配成报告模型：
//! - 按类别分入声明的报告分区；未出现的类别保留空分区，
//!   是否隐藏由渲染方决定
//! - 计算派生聚合（组件功率小计、总装机功率、逆变器数等）
//!
//! 纯转换，无状态：相同输入必得相同输出。

use domain::{AttributeBag, EquipmentRecord, MeasurementPoint};
use pvsr_codec::decode;
use pvsr_measure::sort_points;
use pvsr_schema::schemas;

/// 报告中的一条设备条目：一等列 + 解码后的属性包。
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub record_id: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub quantity: Option<i64>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub attributes: AttributeBag,
    /// 仅光伏组件组：单件功率 × 数量（Wp）
    pub group_power_wp: Option<f64>,
}

/// 报告分区。
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub key: &'static str,
    pub title: &'static str,
    pub entries: Vec<ReportEntry>,
}

/// 报告级聚合。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportTotals {
    /// 组件总数（各组数量之和）
    pub module_count: i64,
    /// 总装机功率（Wp），各组件组小计之和
    pub total_power_wp: f64,
    pub inverter_count: usize,
    /// 未关闭的缺陷项数量
    pub open_punch_items: usize,
    pub measurement_count: usize,
}

/// 装配完成的报告模型，交由外部渲染方呈现。
#[derive(Debug, Clone, PartialEq)]
pub struct ReportModel {
    /// 全部声明分区，按目录顺序，未命中的类别为空分区
    pub sections: Vec<ReportSection>,
    /// 测量表，按身份键自然序
    pub measurements: Vec<MeasurementPoint>,
    pub totals: ReportTotals,
}

/// 装配报告模型。
///
/// 类别未注册的记录跳过并计数；其余任何数据形状问题都降级处理，
/// 不中断装配。
pub fn assemble(records: &[EquipmentRecord], points: &[MeasurementPoint]) -> ReportModel {
    let mut sections: Vec<ReportSection> = schemas()
        .iter()
        .map(|schema| ReportSection {
            key: schema.section,
            title: schema.title,
            entries: Vec::new(),
        })
        .collect();
    let mut totals = ReportTotals::default();

    for record in records {
        let Some(position) = schemas()
            .iter()
            .position(|schema| schema.category == record.category)
        else {
            pvsr_telemetry::record_dropped_unknown_category();
            continue;
        };

        let attributes = decode(&record.category, &record.characteristics);
        let mut entry = ReportEntry {
            record_id: record.record_id.clone(),
            brand: record.brand.clone(),
            model: record.model.clone(),
            quantity: record.quantity,
            status: record.status.clone(),
            location: record.location.clone(),
            attributes,
            group_power_wp: None,
        };

        match record.category.as_str() {
            "pv_module" => {
                let quantity = record.quantity.unwrap_or(0);
                totals.module_count += quantity;
                if let Some(power) = entry.attributes.get("power_wp").and_then(parse_number) {
                    let group = power * quantity as f64;
                    entry.group_power_wp = Some(group);
                    totals.total_power_wp += group;
                }
            }
            "inverter" => totals.inverter_count += 1,
            "punch_item" => {
                if is_open(record.status.as_deref()) {
                    totals.open_punch_items += 1;
                }
            }
            _ => {}
        }

        sections[position].entries.push(entry);
    }

    let mut measurements = points.to_vec();
    sort_points(&mut measurements);
    totals.measurement_count = measurements.len();

    ReportModel {
        sections,
        measurements,
        totals,
    }
}

/// 容错数值解析（接受逗号小数分隔符）；解析失败返回 None，
/// 该组不计入功率聚合。
fn parse_number(value: &String) -> Option<f64> {
    let normalized = value.trim().replace(',', ".");
    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// 缺陷项是否仍未关闭。状态缺失按未关闭处理。
fn is_open(status: Option<&str>) -> bool {
    match status {
        Some(status) => {
            let status = status.trim();
            !status.eq_ignore_ascii_case("closed")
                && !status.eq_ignore_ascii_case("resolved")
                && !status.eq_ignore_ascii_case("done")
        }
        None => true,
    }
}
