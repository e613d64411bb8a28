//! 勘察报告 HTTP API（保存/装配/诊断）与请求追踪 ID。

mod handlers;
mod routes;
mod utils;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::{self, Next},
    response::Response,
};
use pvsr_config::AppConfig;
use pvsr_storage::{
    EquipmentStore, InMemoryEquipmentStore, InMemoryMeasurementStore, InverterRosterStore,
    MeasurementStore,
};
use pvsr_telemetry::{init_tracing, new_request_ids};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

/// 应用状态：配置 + 存储接口。
///
/// 存储为外部协作方；此处以内存实现接线，便于本地演示与测试。
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub equipment_store: Arc<dyn EquipmentStore>,
    pub roster_store: Arc<dyn InverterRosterStore>,
    pub measurement_store: Arc<dyn MeasurementStore>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 内存存储接线（设备存储同时提供花名册查询）
    let equipment = Arc::new(InMemoryEquipmentStore::new());
    let state = AppState {
        config: config.clone(),
        equipment_store: equipment.clone(),
        roster_store: equipment,
        measurement_store: Arc::new(InMemoryMeasurementStore::new()),
    };

    let app = routes::create_api_router().with_state(state).layer(
        ServiceBuilder::new()
            // HTTP 层访问日志
            .layer(TraceLayer::new_for_http())
            // 注入 request_id/trace_id
            .layer(middleware::from_fn(request_context)),
    );

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    // 生成 request_id 与 trace_id，并注入请求扩展与日志
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());

    let span = tracing::info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let mut response = next.run(req).instrument(span).await;
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response
}
