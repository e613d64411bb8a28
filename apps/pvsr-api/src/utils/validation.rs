//! 输入验证辅助函数
//!
//! 提供统一的输入验证函数：
//! - normalize_optional：可选字段去除空格，空串折叠为 None
//! - survey_context：从请求头构造勘察上下文
//!
//! 认证/会话是外部协作方；租户标识由上游网关注入
//! `x-tenant-id` 请求头，缺失时使用演示租户。

use axum::http::HeaderMap;
use domain::SurveyContext;

const TENANT_HEADER: &str = "x-tenant-id";
const DEFAULT_TENANT: &str = "tenant-default";

/// 可选字段归一：去除首尾空格，空串折叠为 None。
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// 从请求头构造勘察上下文，作用域限定到当前报告。
pub fn survey_context(headers: &HeaderMap, report_id: &str) -> SurveyContext {
    let tenant_id = headers
        .get(TENANT_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_TENANT);
    SurveyContext::new(tenant_id, "field-app", Some(report_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn optional_folds_blank_to_none() {
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" SMA ".to_string())).as_deref(),
            Some("SMA")
        );
        assert_eq!(normalize_optional(None), None);
    }

    #[test]
    fn context_reads_tenant_header() {
        let mut headers = HeaderMap::new();
        headers.insert(TENANT_HEADER, HeaderValue::from_static("tenant-7"));
        let ctx = survey_context(&headers, "report-1");
        assert_eq!(ctx.tenant_id, "tenant-7");
        assert_eq!(ctx.report_scope.as_deref(), Some("report-1"));
    }

    #[test]
    fn context_falls_back_to_default_tenant() {
        let ctx = survey_context(&HeaderMap::new(), "report-1");
        assert_eq!(ctx.tenant_id, DEFAULT_TENANT);
    }
}
