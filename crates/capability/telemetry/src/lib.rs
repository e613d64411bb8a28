//! 追踪、请求 ID 与丢弃计数。
//!
//! 编解码与归并遵循"宁可降级不中断"的策略：未知键、无法识别的
//! 字段名、分隔符冲突都静默处理。此处的计数器让静默处理可审计。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 丢弃/降级计数快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
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

/// 丢弃/降级计数器。
pub struct TelemetryMetrics {
    encoded_records: AtomicU64,
    decoded_records: AtomicU64,
    reconciled_points: AtomicU64,
    dropped_unknown_attribute: AtomicU64,
    dropped_unknown_category: AtomicU64,
    dropped_unmatched_field: AtomicU64,
    dropped_duplicate_metric: AtomicU64,
    dropped_unknown_token: AtomicU64,
    sanitized_values: AtomicU64,
    flat_channel_ignored: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            encoded_records: AtomicU64::new(0),
            decoded_records: AtomicU64::new(0),
            reconciled_points: AtomicU64::new(0),
            dropped_unknown_attribute: AtomicU64::new(0),
            dropped_unknown_category: AtomicU64::new(0),
            dropped_unmatched_field: AtomicU64::new(0),
            dropped_duplicate_metric: AtomicU64::new(0),
            dropped_unknown_token: AtomicU64::new(0),
            sanitized_values: AtomicU64::new(0),
            flat_channel_ignored: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            encoded_records: self.encoded_records.load(Ordering::Relaxed),
            decoded_records: self.decoded_records.load(Ordering::Relaxed),
            reconciled_points: self.reconciled_points.load(Ordering::Relaxed),
            dropped_unknown_attribute: self.dropped_unknown_attribute.load(Ordering::Relaxed),
            dropped_unknown_category: self.dropped_unknown_category.load(Ordering::Relaxed),
            dropped_unmatched_field: self.dropped_unmatched_field.load(Ordering::Relaxed),
            dropped_duplicate_metric: self.dropped_duplicate_metric.load(Ordering::Relaxed),
            dropped_unknown_token: self.dropped_unknown_token.load(Ordering::Relaxed),
            sanitized_values: self.sanitized_values.load(Ordering::Relaxed),
            flat_channel_ignored: self.flat_channel_ignored.load(Ordering::Relaxed),
        }
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录特征串编码次数。
pub fn record_encoded_record() {
    metrics().encoded_records.fetch_add(1, Ordering::Relaxed);
}

/// 记录特征串解码次数。
pub fn record_decoded_record() {
    metrics().decoded_records.fetch_add(1, Ordering::Relaxed);
}

/// 记录归并输出的测量点数量。
pub fn record_reconciled_points(count: u64) {
    metrics()
        .reconciled_points
        .fetch_add(count, Ordering::Relaxed);
}

/// 记录编码时丢弃的未声明属性键。
pub fn record_dropped_unknown_attribute() {
    metrics()
        .dropped_unknown_attribute
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录未注册类别的编解码请求（配置缺口）。
pub fn record_dropped_unknown_category() {
    metrics()
        .dropped_unknown_category
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录平铺通道中无法识别的字段名。
pub fn record_dropped_unmatched_field() {
    metrics()
        .dropped_unmatched_field
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录同一身份键下重复出现的指标（保留首值）。
pub fn record_dropped_duplicate_metric() {
    metrics()
        .dropped_duplicate_metric
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录解码时跳过的未声明令牌。
pub fn record_dropped_unknown_token() {
    metrics()
        .dropped_unknown_token
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录编码时被净化的分隔符冲突值。
pub fn record_sanitized_value() {
    metrics().sanitized_values.fetch_add(1, Ordering::Relaxed);
}

/// 记录因聚合通道优先而整体忽略平铺通道的次数。
pub fn record_flat_channel_ignored() {
    metrics()
        .flat_channel_ignored
        .fetch_add(1, Ordering::Relaxed);
}
