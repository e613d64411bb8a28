use std::collections::BTreeMap;

/// 属性包：键 -> 文本值。
///
/// 数值属性也以文本保存（保留用户原始输入，聚合计算时再解析）。
pub type AttributeBag = BTreeMap<String, String>;

/// 设备记录。
///
/// 一等列（品牌/型号/数量/部署状态/位置）覆盖大多数类别；
/// 其余属性折叠进 `characteristics` 令牌串，由 codec 能力编解码。
/// 记录随所属报告整体替换（删除后重插），从不部分更新。
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentRecord {
    pub record_id: String,
    pub tenant_id: String,
    pub report_id: String,
    /// 设备类别: pv_module | inverter | protection | energy_meter
    ///           | telemetry | punch_item | note
    pub category: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub quantity: Option<i64>,
    pub status: Option<String>,
    pub location: Option<String>,
    /// 特征令牌串（`"Label: value | ..."` 格式）
    pub characteristics: String,
}

/// 测量身份键：`(逆变器序号, MPPT, 组串号)`。
///
/// 归并完成后在单份报告内唯一。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeasurementKey {
    pub inverter_index: u32,
    pub mppt: String,
    pub string_num: String,
}

/// 规范化后的组串测量点。
///
/// 数值字段保留用户输入原文（不强制重排版式）。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasurementPoint {
    pub inverter_index: u32,
    pub inverter_label: String,
    pub mppt: String,
    pub string_num: String,
    pub voc: Option<String>,
    pub isc: Option<String>,
    pub vmp: Option<String>,
    pub imp: Option<String>,
    pub rins: Option<String>,
    pub irr: Option<String>,
    pub temp: Option<String>,
    pub rlo: Option<String>,
    pub notes: Option<String>,
}

impl MeasurementPoint {
    /// 当前测量点的身份键。
    pub fn key(&self) -> MeasurementKey {
        MeasurementKey {
            inverter_index: self.inverter_index,
            mppt: self.mppt.clone(),
            string_num: self.string_num.clone(),
        }
    }
}

/// 聚合通道的单条读数（结构化 JSON 形状）。
#[derive(Debug, Clone, Default)]
pub struct AggregatedReading {
    /// 显式逆变器标识（存在时优先于序号查表）
    pub inverter_id: Option<String>,
    /// 逆变器序号，缺省按 0 处理
    pub inverter_index: Option<u32>,
    pub mppt: String,
    pub string_num: String,
    pub voc: Option<String>,
    pub isc: Option<String>,
    /// `isc` 的别名通道，`isc` 缺失时生效
    pub current: Option<String>,
    pub vmp: Option<String>,
    pub imp: Option<String>,
    pub rins: Option<String>,
    pub irr: Option<String>,
    pub temp: Option<String>,
    pub rlo: Option<String>,
    pub notes: Option<String>,
}

/// 测量数据的两种入站线格式。
///
/// 每次提交最多只有一种通道非空；在边界处一次性判定，
/// 避免在各调用点零散检查空值。
#[derive(Debug, Clone)]
pub enum RawMeasurementWire {
    /// 结构化聚合载荷（已接近规范形状）
    Aggregated(Vec<AggregatedReading>),
    /// 平铺字段映射（`string_{metric}_...` 命名约定），保留提交顺序
    FlatFields(Vec<(String, String)>),
}

impl RawMeasurementWire {
    /// 通道是否不含任何条目。
    pub fn is_empty(&self) -> bool {
        match self {
            RawMeasurementWire::Aggregated(items) => items.is_empty(),
            RawMeasurementWire::FlatFields(fields) => fields.is_empty(),
        }
    }
}
