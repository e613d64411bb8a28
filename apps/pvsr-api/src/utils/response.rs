//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：bad_request_error, storage_error
//! - DTO 转换：report_to_dto, point_to_dto, snapshot_to_dto
//!
//! 设计原则：
//! - 所有错误返回统一的 ApiResponse 格式
//! - HTTP 状态码与错误码对应
//! - DTO 转换保持模型与 DTO 字段一致

use api_contract::{
    ApiResponse, MeasurementPointDto, MetricsDto, ReportEntryDto, ReportModelDto,
    ReportSectionDto, ReportTotalsDto,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::MeasurementPoint;
use pvsr_report::ReportModel;
use pvsr_storage::StorageError;
use pvsr_telemetry::MetricsSnapshot;

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 存储错误响应
pub fn storage_error(err: StorageError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// 报告模型转 DTO
pub fn report_to_dto(report_id: String, model: ReportModel) -> ReportModelDto {
    ReportModelDto {
        report_id,
        sections: model
            .sections
            .into_iter()
            .map(|section| ReportSectionDto {
                key: section.key.to_string(),
                title: section.title.to_string(),
                entries: section
                    .entries
                    .into_iter()
                    .map(|entry| ReportEntryDto {
                        record_id: entry.record_id,
                        brand: entry.brand,
                        model: entry.model,
                        quantity: entry.quantity,
                        status: entry.status,
                        location: entry.location,
                        attributes: entry.attributes,
                        group_power_wp: entry.group_power_wp,
                    })
                    .collect(),
            })
            .collect(),
        measurements: model.measurements.into_iter().map(point_to_dto).collect(),
        totals: ReportTotalsDto {
            module_count: model.totals.module_count,
            total_power_wp: model.totals.total_power_wp,
            inverter_count: model.totals.inverter_count,
            open_punch_items: model.totals.open_punch_items,
            measurement_count: model.totals.measurement_count,
        },
    }
}

/// 测量点转 DTO
pub fn point_to_dto(point: MeasurementPoint) -> MeasurementPointDto {
    MeasurementPointDto {
        inverter_index: point.inverter_index,
        inverter_label: point.inverter_label,
        mppt: point.mppt,
        string_num: point.string_num,
        voc: point.voc,
        isc: point.isc,
        vmp: point.vmp,
        imp: point.imp,
        rins: point.rins,
        irr: point.irr,
        temp: point.temp,
        rlo: point.rlo,
        notes: point.notes,
    }
}

/// 诊断计数快照转 DTO
pub fn snapshot_to_dto(snapshot: MetricsSnapshot) -> MetricsDto {
    MetricsDto {
        encoded_records: snapshot.encoded_records,
        decoded_records: snapshot.decoded_records,
        reconciled_points: snapshot.reconciled_points,
        dropped_unknown_attribute: snapshot.dropped_unknown_attribute,
        dropped_unknown_category: snapshot.dropped_unknown_category,
        dropped_unmatched_field: snapshot.dropped_unmatched_field,
        dropped_duplicate_metric: snapshot.dropped_duplicate_metric,
        dropped_unknown_token: snapshot.dropped_unknown_token,
        sanitized_values: snapshot.sanitized_values,
        flat_channel_ignored: snapshot.flat_channel_ignored,
    }
}
