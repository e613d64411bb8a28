//! 勘察保存与报告装配 handlers
//!
//! - PUT /reports/{id}/survey - 保存勘察提交（设备分组 + 测量）
//! - GET /reports/{id}/report - 取回存量数据并装配报告模型
//!
//! 保存语义：
//! - 每个提交的类别组整体替换该 `(报告, 类别)` 的存量记录
//! - 测量点按报告整体替换；请求未携带测量即清空
//! - 未注册类别的组跳过并计数，不中断保存

use crate::AppState;
use crate::utils::response::{bad_request_error, report_to_dto, storage_error};
use crate::utils::{normalize_optional, survey_context};
use api_contract::{
    AggregatedReadingDto, ApiResponse, SaveSurveyRequest, SaveSurveyResponse,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use domain::{AggregatedReading, EquipmentRecord};
use pvsr_codec::{encode, ensure_no_delimiter};
use pvsr_measure::reconcile_channels;
use pvsr_report::assemble;
use pvsr_schema::schema_for;
use tracing::warn;
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct ReportPath {
    report_id: String,
}

/// 保存勘察提交
///
/// 把多页表单的一次提交写入存储：每个设备组编码为特征串记录，
/// 测量双通道归并为规范测量点列表。
///
/// # 参数
///
/// - `state`: 应用状态，包含存储接口与运行配置
/// - `path`: 路径参数，包含 `report_id`
/// - `headers`: HTTP 请求头，用于提取租户标识
/// - `req`: 请求体，设备分组 + 测量通道
///
/// # 返回
///
/// 成功时返回 `200 OK` 和写入条数统计，失败时返回相应的错误响应。
///
/// # 流程
///
/// 1. 构造勘察上下文（租户 + 报告作用域）
/// 2. 校验提交规模与严格模式下的分隔符冲突（任何写入发生之前）
/// 3. 逐组编码属性包并整体替换该类别的存量记录
/// 4. 替换完成后取逆变器花名册（序号与本次保存对齐）
/// 5. 归并测量双通道并整体替换测量点
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 提交超限，或严格模式下特征值含分隔符
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn save_survey(
    State(state): State<AppState>,
    Path(path): Path<ReportPath>,
    headers: HeaderMap,
    Json(req): Json<SaveSurveyRequest>,
) -> Response {
    let ctx = survey_context(&headers, &path.report_id);

    let total_entries: usize = req.groups.iter().map(|group| group.entries.len()).sum();
    if total_entries > state.config.max_records_per_save {
        return bad_request_error("too many records in one save");
    }
    if state.config.strict_characteristics {
        for group in &req.groups {
            for entry in &group.entries {
                if let Err(err) = ensure_no_delimiter(&entry.attributes) {
                    return bad_request_error(err.to_string());
                }
            }
        }
    }

    let mut equipment_written = 0usize;
    for group in req.groups {
        if schema_for(&group.category).is_none() {
            warn!(category = %group.category, "unknown equipment category skipped");
            pvsr_telemetry::record_dropped_unknown_category();
            continue;
        }

        let mut records = Vec::new();
        for entry in group.entries {
            let brand = normalize_optional(entry.brand);
            let model = normalize_optional(entry.model);
            let status = normalize_optional(entry.status);
            let location = normalize_optional(entry.location);
            let characteristics = encode(&group.category, &entry.attributes);
            // 全空条目不落库
            if brand.is_none()
                && model.is_none()
                && entry.quantity.is_none()
                && status.is_none()
                && location.is_none()
                && characteristics.is_empty()
            {
                continue;
            }
            records.push(EquipmentRecord {
                record_id: Uuid::new_v4().to_string(),
                tenant_id: ctx.tenant_id.clone(),
                report_id: path.report_id.clone(),
                category: group.category.clone(),
                brand,
                model,
                quantity: entry.quantity,
                status,
                location,
                characteristics,
            });
        }

        match state
            .equipment_store
            .replace_equipment(&ctx, &path.report_id, &group.category, records)
            .await
        {
            Ok(written) => equipment_written += written,
            Err(err) => return storage_error(err),
        }
    }

    // 花名册在设备替换之后取，序号对应本次保存的逆变器清单
    let roster = match state
        .roster_store
        .inverter_roster(&ctx, &path.report_id)
        .await
    {
        Ok(roster) => roster,
        Err(err) => return storage_error(err),
    };

    let (aggregated, flat) = match req.measurements {
        Some(measurements) => (
            measurements
                .aggregated
                .into_iter()
                .map(reading_from_dto)
                .collect(),
            measurements.flat_fields.into_iter().collect(),
        ),
        None => (Vec::new(), Vec::new()),
    };
    let points = reconcile_channels(aggregated, flat, &roster);

    let measurements_written = match state
        .measurement_store
        .replace_measurements(&ctx, &path.report_id, points)
        .await
    {
        Ok(written) => written,
        Err(err) => return storage_error(err),
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(SaveSurveyResponse {
            report_id: path.report_id,
            equipment_written,
            measurements_written,
        })),
    )
        .into_response()
}

/// 装配报告
///
/// 取回报告的存量设备记录与测量点，解码并装配为报告模型。
/// 渲染（HTML/PDF）由外部负责。
pub async fn get_report(
    State(state): State<AppState>,
    Path(path): Path<ReportPath>,
    headers: HeaderMap,
) -> Response {
    let ctx = survey_context(&headers, &path.report_id);

    let records = match state
        .equipment_store
        .fetch_equipment(&ctx, &path.report_id)
        .await
    {
        Ok(records) => records,
        Err(err) => return storage_error(err),
    };
    let points = match state
        .measurement_store
        .fetch_measurements(&ctx, &path.report_id)
        .await
    {
        Ok(points) => points,
        Err(err) => return storage_error(err),
    };

    let model = assemble(&records, &points);
    (
        StatusCode::OK,
        Json(ApiResponse::success(report_to_dto(path.report_id, model))),
    )
        .into_response()
}

fn reading_from_dto(dto: AggregatedReadingDto) -> AggregatedReading {
    AggregatedReading {
        inverter_id: dto.inverter_id,
        inverter_index: dto.inverter_index,
        mppt: dto.mppt,
        string_num: dto.string_num,
        voc: dto.voc,
        isc: dto.isc,
        current: dto.current,
        vmp: dto.vmp,
        imp: dto.imp,
        rins: dto.rins,
        irr: dto.irr,
        temp: dto.temp,
        rlo: dto.rlo,
        notes: dto.notes,
    }
}
