//! 特征串编码
//!
//! 按类别模式的声明顺序把属性包压成令牌串。未声明的键静默丢弃
//! 并计数（前向兼容的有损写入，不是错误）。

use crate::text::{is_bare_number, normalize_decimal};
use crate::{CodecError, DELIMITER};
use domain::AttributeBag;
use pvsr_schema::{CompositeSpec, FieldShape, ValueKind, schema_for};
use std::collections::HashSet;

/// 把属性包编码为令牌串。
///
/// - 空值跳过；整包为空返回空串（是否落库由调用方决定）
/// - `Number` 字段且值为裸数值时补单位后缀，预格式化值原样透传
/// - 复合字段按类别声明的装配规则产出子句
/// - 值内出现分隔符序列时净化为 `" / "` 并计数
pub fn encode(category: &str, bag: &AttributeBag) -> String {
    let Some(schema) = schema_for(category) else {
        pvsr_telemetry::record_dropped_unknown_category();
        return String::new();
    };

    let mut accepted: HashSet<&str> = HashSet::new();
    let mut clauses: Vec<String> = Vec::new();
    for field in schema.fields {
        match &field.shape {
            FieldShape::Scalar(kind) => {
                accepted.insert(field.key);
                if let Some(value) = non_empty(bag, field.key) {
                    clauses.push(format!("{}: {}", field.label, render_scalar(kind, &value)));
                }
            }
            FieldShape::Composite(spec) => {
                accepted.insert(spec.base_key);
                accepted.insert(spec.sub_key);
                accepted.extend(spec.alias_keys.iter().copied());
                if let Some(clause) = composite_clause(field.label, spec, bag) {
                    clauses.push(clause);
                }
            }
        }
    }

    for key in bag.keys() {
        if !accepted.contains(key.as_str()) {
            pvsr_telemetry::record_dropped_unknown_attribute();
        }
    }

    pvsr_telemetry::record_encoded_record();
    clauses.join(DELIMITER)
}

/// 严格校验：任一值含分隔符序列即拒绝。
///
/// 默认编码路径净化冲突值；需要硬失败的调用方（如开启严格模式的
/// 保存接口）在编码前先过这一层。
pub fn ensure_no_delimiter(bag: &AttributeBag) -> Result<(), CodecError> {
    for (key, value) in bag {
        if value.contains(DELIMITER) {
            return Err(CodecError::DelimiterCollision(key.clone()));
        }
    }
    Ok(())
}

fn non_empty(bag: &AttributeBag, key: &str) -> Option<String> {
    let value = bag.get(key)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(sanitize(value))
    }
}

fn sanitize(value: &str) -> String {
    if value.contains(DELIMITER) {
        pvsr_telemetry::record_sanitized_value();
        value.replace(DELIMITER, " / ")
    } else {
        value.to_string()
    }
}

fn render_scalar(kind: &ValueKind, value: &str) -> String {
    match kind {
        ValueKind::Number { unit: Some(unit) } if is_bare_number(value) => {
            format!("{}{}", value, unit)
        }
        _ => value.to_string(),
    }
}

/// 复合子句装配：`"Label: {base} (SubLabel: {n}{unit})"`。
///
/// 主干取 base_key；缺失时按序拼接别名键（历史表单的 brand/model
/// 拆分输入）。主干与子值都缺失则整条跳过。
fn composite_clause(label: &str, spec: &CompositeSpec, bag: &AttributeBag) -> Option<String> {
    let base = non_empty(bag, spec.base_key).unwrap_or_else(|| {
        spec.alias_keys
            .iter()
            .filter_map(|key| non_empty(bag, key))
            .collect::<Vec<_>>()
            .join(" ")
    });
    let sub = non_empty(bag, spec.sub_key).map(|value| {
        if is_bare_number(&value) {
            format!("{}{}", normalize_decimal(&value), spec.sub_unit)
        } else {
            value
        }
    });

    match (base.is_empty(), sub) {
        (true, None) => None,
        (false, None) => Some(format!("{}: {}", label, base)),
        (true, Some(sub)) => Some(format!("{}: ({}: {})", label, spec.sub_label, sub)),
        (false, Some(sub)) => Some(format!("{}: {} ({}: {})", label, base, spec.sub_label, sub)),
    }
}
