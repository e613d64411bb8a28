//! 测量身份键派生
//!
//! 平铺通道的字段名约定（ASCII，下划线分隔）：
//! - `string_{metric}_{mppt}_{string}`：4 段，逆变器序号隐含为 0
//! - `string_{metric}_{index}_{mppt}_{string}`：5 段及以上，
//!   第 3 段必须是非负整数序号，多余的段折入组串号
//!
//! 不符合任一形状的字段名返回 None（无关字段可能恰好共享
//! `string_` 前缀，忽略而非报错）。

use domain::MeasurementKey;

/// 测量指标。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Voc,
    Isc,
    Vmp,
    Imp,
    Rins,
    Irr,
    Temp,
    Rlo,
    Notes,
}

impl Metric {
    /// 按字段名中的指标段解析（大小写敏感）。
    ///
    /// `current` 是 `isc` 的历史别名通道。
    pub fn from_field_segment(segment: &str) -> Option<Self> {
        match segment {
            "voc" => Some(Metric::Voc),
            "isc" | "current" => Some(Metric::Isc),
            "vmp" => Some(Metric::Vmp),
            "imp" => Some(Metric::Imp),
            "rins" => Some(Metric::Rins),
            "irr" => Some(Metric::Irr),
            "temp" => Some(Metric::Temp),
            "rlo" => Some(Metric::Rlo),
            "notes" => Some(Metric::Notes),
            _ => None,
        }
    }
}

/// 从平铺字段名派生 `(指标, 身份键)`。
pub fn derive_flat_key(field_name: &str) -> Option<(Metric, MeasurementKey)> {
    let mut parts = field_name.splitn(5, '_');
    if parts.next()? != "string" {
        return None;
    }
    let metric = Metric::from_field_segment(parts.next()?)?;
    let third = parts.next()?;
    let fourth = parts.next()?;
    match parts.next() {
        // 4 段：逆变器序号隐含为 0
        None => Some((
            metric,
            MeasurementKey {
                inverter_index: 0,
                mppt: third.to_string(),
                string_num: fourth.to_string(),
            },
        )),
        // 5 段及以上：第 3 段是序号，余下折入组串号
        Some(rest) => {
            let inverter_index = third.parse::<u32>().ok()?;
            Some((
                metric,
                MeasurementKey {
                    inverter_index,
                    mppt: fourth.to_string(),
                    string_num: rest.to_string(),
                },
            ))
        }
    }
}
