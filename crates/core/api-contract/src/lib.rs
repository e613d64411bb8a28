//! 稳定的 DTO 与 API 响应契约。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 保存勘察数据请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSurveyRequest {
    /// 设备分组（按类别各提交一组，表单一页一组）
    #[serde(default)]
    pub groups: Vec<EquipmentGroupDto>,
    #[serde(default)]
    pub measurements: Option<MeasurementsDto>,
}

/// 一个类别的设备提交组。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentGroupDto {
    pub category: String,
    #[serde(default)]
    pub entries: Vec<EquipmentEntryDto>,
}

/// 单条设备提交：一等列 + 属性包。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentEntryDto {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub quantity: Option<i64>,
    pub status: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// 测量提交：两种通道最多一种非空。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementsDto {
    /// 结构化聚合通道
    #[serde(default)]
    pub aggregated: Vec<AggregatedReadingDto>,
    /// 历史平铺通道（`string_{metric}_...` 字段名 -> 值）
    #[serde(default)]
    pub flat_fields: BTreeMap<String, String>,
}

/// 聚合通道的单条读数。
///
/// 键名沿用线上既有格式（snake_case），勿与其余 DTO 的
/// camelCase 约定混同。
#[derive(Debug, Deserialize)]
pub struct AggregatedReadingDto {
    #[serde(default)]
    pub inverter_id: Option<String>,
    #[serde(default)]
    pub inverter_index: Option<u32>,
    pub mppt: String,
    pub string_num: String,
    #[serde(default)]
    pub voc: Option<String>,
    #[serde(default)]
    pub isc: Option<String>,
    #[serde(default)]
    pub current: Option<String>,
    #[serde(default)]
    pub vmp: Option<String>,
    #[serde(default)]
    pub imp: Option<String>,
    #[serde(default)]
    pub rins: Option<String>,
    #[serde(default)]
    pub irr: Option<String>,
    #[serde(default)]
    pub temp: Option<String>,
    #[serde(default)]
    pub rlo: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// 保存结果返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSurveyResponse {
    pub report_id: String,
    pub equipment_written: usize,
    pub measurements_written: usize,
}

/// 报告模型返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportModelDto {
    pub report_id: String,
    pub sections: Vec<ReportSectionDto>,
    pub measurements: Vec<MeasurementPointDto>,
    pub totals: ReportTotalsDto,
}

/// 报告分区返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSectionDto {
    pub key: String,
    pub title: String,
    pub entries: Vec<ReportEntryDto>,
}

/// 报告条目返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntryDto {
    pub record_id: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub quantity: Option<i64>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_power_wp: Option<f64>,
}

/// 测量点返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementPointDto {
    pub inverter_index: u32,
    pub inverter_label: String,
    pub mppt: String,
    pub string_num: String,
    pub voc: Option<String>,
    pub isc: Option<String>,
    pub vmp: Option<String>,
    pub imp: Option<String>,
    pub rins: Option<String>,
    pub irr: Option<String>,
    pub temp: Option<String>,
    pub rlo: Option<String>,
    pub notes: Option<String>,
}

/// 报告聚合返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotalsDto {
    pub module_count: i64,
    pub total_power_wp: f64,
    pub inverter_count: usize,
    pub open_punch_items: usize,
    pub measurement_count: usize,
}

/// 诊断计数返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDto {
    pub encoded_records: u64,
    pub decoded_records: u64,
    pub reconciled_points: u64,
    pub dropped_unknown_attribute: u64,
    pub dropped_unknown_category: u64,
    pub dropped_unmatched_field: u64,
    pub dropped_duplicate_metric: u64,
    pub dropped_unknown_token: u64,
    pub sanitized_values: u64,
    pub flat_channel_ignored: u64,
}
