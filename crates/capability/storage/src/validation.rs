//! 验证辅助函数
//!
//! 提供统一的验证逻辑，确保数据一致性：
//! - ensure_tenant：验证租户 ID 非空
//! - ensure_report_scope：验证报告归属（租户 + 报告作用域）

use crate::error::StorageError;
use domain::SurveyContext;

/// 验证租户 ID 非空
///
/// 确保所有数据访问都有有效的勘察上下文。
pub fn ensure_tenant(ctx: &SurveyContext) -> Result<(), StorageError> {
    if ctx.tenant_id.is_empty() {
        return Err(StorageError::new("tenant_id required"));
    }
    Ok(())
}

/// 验证报告归属
///
/// 确保在正确的报告作用域内访问报告资源。
pub fn ensure_report_scope(ctx: &SurveyContext, report_id: &str) -> Result<(), StorageError> {
    ensure_tenant(ctx)?;
    if let Some(scope) = ctx.report_scope.as_deref() {
        if scope != report_id {
            return Err(StorageError::new("report scope mismatch"));
        }
    }
    Ok(())
}
