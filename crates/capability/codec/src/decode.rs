//! 特征串解码
//!
//! 按模式键提取，顺序无关；对截断、乱序、未知令牌全部容错。
//! 解码永不失败：提取不到就是缺失，不是错误。

use crate::DELIMITER;
use crate::text::{
    collapse_spaces, find_ascii_ci, is_bare_number, normalize_decimal, normalize_units,
    strip_label_prefix, strip_unit_suffix,
};
use domain::AttributeBag;
use pvsr_schema::{CompositeSpec, FieldShape, ValueKind, schema_for};

/// 把令牌串解码为属性包。
///
/// - 标签匹配大小写无关，值延伸到下一分隔符或串尾
/// - `Number` 字段剥离已知单位后缀（剩余为裸数值时）
/// - 复合字段二次提取内嵌 `"(SubLabel: Xunit)"` 子值
/// - 未匹配任何声明键的令牌跳过并计数
pub fn decode(category: &str, input: &str) -> AttributeBag {
    let mut bag = AttributeBag::new();
    let Some(schema) = schema_for(category) else {
        pvsr_telemetry::record_dropped_unknown_category();
        return bag;
    };

    let clauses: Vec<&str> = input
        .split(DELIMITER)
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect();
    let mut matched = vec![false; clauses.len()];

    for field in schema.fields {
        for (idx, clause) in clauses.iter().enumerate() {
            let Some(value) = strip_label_prefix(clause, field.label) else {
                continue;
            };
            matched[idx] = true;
            match &field.shape {
                FieldShape::Scalar(kind) => {
                    let value = decode_scalar(kind, value);
                    if !value.is_empty() {
                        bag.insert(field.key.to_string(), value);
                    }
                }
                FieldShape::Composite(spec) => decode_composite(spec, value, &mut bag),
            }
            break;
        }
    }

    for (idx, _) in clauses.iter().enumerate() {
        if !matched[idx] {
            pvsr_telemetry::record_dropped_unknown_token();
        }
    }

    pvsr_telemetry::record_decoded_record();
    bag
}

fn decode_scalar(kind: &ValueKind, value: &str) -> String {
    let value = normalize_units(value);
    match kind {
        ValueKind::Number { unit: Some(unit) } => {
            strip_unit_suffix(&value, unit).unwrap_or(value)
        }
        _ => value,
    }
}

/// 复合子句的二次提取。
///
/// 从外层值中剥出 `"(SubLabel: Xunit)"` 段：剩余文本为主干，
/// 括号内为子值。括号未闭合（截断串）时剩余全部按子值处理。
/// 子值容忍 `.`/`,` 小数分隔符，统一成 `.`；畸形数值原样透传。
fn decode_composite(spec: &CompositeSpec, outer: &str, bag: &mut AttributeBag) {
    let needle = format!("({}:", spec.sub_label);
    let (base, sub) = match find_ascii_ci(outer, &needle) {
        Some(start) => match outer[start..].find(')') {
            Some(rel_end) => {
                let end = start + rel_end;
                let inner = &outer[start + needle.len()..end];
                let mut cleaned = String::new();
                cleaned.push_str(&outer[..start]);
                cleaned.push(' ');
                cleaned.push_str(&outer[end + 1..]);
                (
                    collapse_spaces(&cleaned),
                    Some(normalize_sub_value(inner, spec.sub_unit)),
                )
            }
            None => {
                let inner = &outer[start + needle.len()..];
                (
                    collapse_spaces(&outer[..start]),
                    Some(normalize_sub_value(inner, spec.sub_unit)),
                )
            }
        },
        None => (collapse_spaces(outer), None),
    };

    let base = normalize_units(&base);
    if !base.is_empty() {
        bag.insert(spec.base_key.to_string(), base);
    }
    if let Some(sub) = sub {
        if !sub.is_empty() {
            bag.insert(spec.sub_key.to_string(), sub);
        }
    }
}

fn normalize_sub_value(inner: &str, unit: &str) -> String {
    let inner = inner.trim();
    if let Some(stripped) = strip_unit_suffix(inner, unit) {
        normalize_decimal(&stripped)
    } else if is_bare_number(inner) {
        normalize_decimal(inner)
    } else {
        inner.to_string()
    }
}
