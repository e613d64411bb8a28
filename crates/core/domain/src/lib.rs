pub mod data;

pub use data::{
    AggregatedReading, AttributeBag, EquipmentRecord, MeasurementKey, MeasurementPoint,
    RawMeasurementWire,
};

/// 勘察上下文：所有模块共享的执行上下文。
#[derive(Debug, Clone)]
pub struct SurveyContext {
    pub tenant_id: String,
    pub user_id: String,
    pub report_scope: Option<String>,
}

impl SurveyContext {
    /// 构造显式身份与报告范围的勘察上下文。
    pub fn new(
        tenant_id: impl Into<String>,
        user_id: impl Into<String>,
        report_scope: Option<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            user_id: user_id.into(),
            report_scope,
        }
    }
}

impl Default for SurveyContext {
    /// 空上下文（仅用于测试或占位）。
    fn default() -> Self {
        Self {
            tenant_id: "".to_string(),
            user_id: "".to_string(),
            report_scope: None,
        }
    }
}
