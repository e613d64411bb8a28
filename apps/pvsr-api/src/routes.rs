//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 勘察保存：PUT /reports/{id}/survey
//! - 报告装配：GET /reports/{id}/report
//! - 诊断计数：GET /metrics

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, put},
};

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/reports/:report_id/survey", put(save_survey))
        .route("/reports/:report_id/report", get(get_report))
        .route("/metrics", get(get_metrics))
}
