//! 属性模式注册表
//!
//! 按设备类别声明有序属性清单（键、渲染标签、值类型）：
//! - 编码器按声明顺序写出令牌
//! - 解码器按键提取，不依赖顺序
//! - 两端共用同一份声明，避免读写拼写漂移
//!
//! 注册表为纯静态数据，进程内只读，可被多线程无锁并发访问。

mod catalog;

pub use catalog::{SCHEMAS, schema_for, schemas};

/// 标量值类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// 自由文本
    Text,
    /// 数值（以文本保存）；`unit` 存在时编码器为裸数值补单位后缀
    Number { unit: Option<&'static str> },
    /// 枚举（选项仅供表单渲染，解码端不校验）
    Enum { options: &'static [&'static str] },
}

/// 复合子组声明。
///
/// 复合字段编码为 `"Label: {base} (SubLabel: {n}{unit})"` 形式的子句，
/// 解码时二次提取内嵌子值。`alias_keys` 接受历史拆分键
/// （如 brand/model），编码时按序拼入主干文本。
#[derive(Debug, Clone, Copy)]
pub struct CompositeSpec {
    /// 主干自由文本键
    pub base_key: &'static str,
    /// 主干缺失时按序拼接的别名键
    pub alias_keys: &'static [&'static str],
    /// 内嵌数值子键
    pub sub_key: &'static str,
    /// 子值标签，如 "Rated"
    pub sub_label: &'static str,
    /// 子值单位后缀，如 "A"
    pub sub_unit: &'static str,
}

/// 字段形态。
#[derive(Debug, Clone, Copy)]
pub enum FieldShape {
    Scalar(ValueKind),
    Composite(CompositeSpec),
}

/// 单个属性字段声明。
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// 属性键（复合字段此处等于 base_key）
    pub key: &'static str,
    /// 令牌标签，如 "Serial Number"
    pub label: &'static str,
    pub shape: FieldShape,
}

impl FieldSpec {
    /// 字段声明的全部属性键（复合字段含子键）。
    pub fn declared_keys(&self) -> Vec<&'static str> {
        match &self.shape {
            FieldShape::Scalar(_) => vec![self.key],
            FieldShape::Composite(spec) => vec![spec.base_key, spec.sub_key],
        }
    }
}

/// 一个设备类别的属性模式。
#[derive(Debug, Clone, Copy)]
pub struct AttributeSchema {
    /// 类别标识，如 "inverter"
    pub category: &'static str,
    /// 报告分区键，如 "inverters"
    pub section: &'static str,
    /// 分区渲染标题
    pub title: &'static str,
    /// 有序字段清单（声明顺序即编码顺序）
    pub fields: &'static [FieldSpec],
}

impl AttributeSchema {
    /// 该类别声明的全部属性键（含复合子键），按声明顺序。
    pub fn declared_keys(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .flat_map(|field| field.declared_keys())
            .collect()
    }
}
