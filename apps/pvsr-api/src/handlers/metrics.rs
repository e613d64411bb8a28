//! 诊断计数 handler
//!
//! 静默降级（丢弃未知键、净化分隔符、忽略平铺通道等）的累计
//! 次数快照，供运维核对数据质量。

use crate::utils::response::snapshot_to_dto;
use api_contract::ApiResponse;
use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};

/// 读取诊断计数快照
pub async fn get_metrics() -> Response {
    let snapshot = pvsr_telemetry::metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(snapshot_to_dto(snapshot))),
    )
        .into_response()
}
