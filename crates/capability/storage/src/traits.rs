//! 存储接口 Trait 定义
//!
//! 定义报告聚合内各资源存储的异步接口：
//! - EquipmentStore：设备记录存储
//! - MeasurementStore：测量点存储
//! - InverterRosterStore：逆变器花名册查询
//!
//! 保存语义是整体替换（先删后插），从不部分更新；
//! 报告删除时的级联由外部负责。

use crate::error::StorageError;
use async_trait::async_trait;
use domain::{EquipmentRecord, MeasurementPoint, SurveyContext};

/// 设备记录存储接口
///
/// 记录按 `(报告, 类别)` 整体替换，读取按保存顺序返回。
#[async_trait]
pub trait EquipmentStore: Send + Sync {
    /// 替换某报告某类别的全部设备记录，返回写入条数
    async fn replace_equipment(
        &self,
        ctx: &SurveyContext,
        report_id: &str,
        category: &str,
        records: Vec<EquipmentRecord>,
    ) -> Result<usize, StorageError>;

    /// 读取报告的全部设备记录（保存顺序）
    async fn fetch_equipment(
        &self,
        ctx: &SurveyContext,
        report_id: &str,
    ) -> Result<Vec<EquipmentRecord>, StorageError>;

    /// 读取报告内指定类别的设备记录
    async fn fetch_equipment_by_category(
        &self,
        ctx: &SurveyContext,
        report_id: &str,
        category: &str,
    ) -> Result<Vec<EquipmentRecord>, StorageError>;
}

/// 测量点存储接口
#[async_trait]
pub trait MeasurementStore: Send + Sync {
    /// 替换某报告的全部测量点，返回写入条数
    async fn replace_measurements(
        &self,
        ctx: &SurveyContext,
        report_id: &str,
        points: Vec<MeasurementPoint>,
    ) -> Result<usize, StorageError>;

    /// 读取报告的全部测量点
    async fn fetch_measurements(
        &self,
        ctx: &SurveyContext,
        report_id: &str,
    ) -> Result<Vec<MeasurementPoint>, StorageError>;
}

/// 逆变器花名册查询接口
///
/// 归并器按序号查表解析人类可读的逆变器标签。
#[async_trait]
pub trait InverterRosterStore: Send + Sync {
    /// 报告已配置的逆变器标签，按保存顺序
    async fn inverter_roster(
        &self,
        ctx: &SurveyContext,
        report_id: &str,
    ) -> Result<Vec<String>, StorageError>;
}
