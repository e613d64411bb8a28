//! Handler 模块汇总。

mod metrics;
mod reports;

pub use metrics::get_metrics;
pub use reports::{get_report, save_survey};

use axum::response::IntoResponse;

/// 健康检查
pub async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({ "ok": true }))
}
