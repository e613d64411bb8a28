//! 组串测量能力
//!
//! 每串电气测量（Voc/Isc/绝缘电阻等）有两种互不兼容的入站形状：
//! 结构化聚合载荷，或 `string_{metric}_...` 命名的平铺字段集。
//! 本 crate 负责：
//! - 从两种形状派生同一身份键 `(逆变器序号, MPPT, 组串号)`
//! - 把双通道归并为单一规范列表（聚合通道优先）
//! - 稳定的自然序输出（数字样标识按数值比较）

mod key;
mod reconcile;

pub use key::{Metric, derive_flat_key};
pub use reconcile::{natural_cmp, reconcile, reconcile_channels, sort_points};
