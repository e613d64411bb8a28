//! 存储能力
//!
//! 持久化本身是外部协作方，按报告原子地先删后插由上游保证。
//! 本 crate 只定义契约与测试/演示用的内存实现：
//! - `EquipmentStore`：设备记录的整体替换与读取
//! - `MeasurementStore`：测量点的整体替换与读取
//! - `InverterRosterStore`：报告的逆变器花名册（有序标签）
//!
//! 设计原则：
//! - 所有接口显式接收 SurveyContext
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发

mod error;
mod in_memory;
mod traits;
mod validation;

pub use error::StorageError;
pub use in_memory::{InMemoryEquipmentStore, InMemoryMeasurementStore};
pub use traits::{EquipmentStore, InverterRosterStore, MeasurementStore};
pub use validation::{ensure_report_scope, ensure_tenant};
