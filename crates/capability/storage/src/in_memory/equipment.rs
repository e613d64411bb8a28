//! 设备记录内存存储实现
//!
//! 功能：
//! - 按 `(报告, 类别)` 整体替换（先删后插）
//! - 报告级读取，保持保存顺序
//! - 租户隔离验证
//! - 由存量逆变器记录派生花名册

use crate::error::StorageError;
use crate::traits::{EquipmentStore, InverterRosterStore};
use crate::validation::ensure_report_scope;
use domain::{EquipmentRecord, SurveyContext};
use std::sync::RwLock;

/// 设备记录内存存储
///
/// 使用 RwLock + Vec 保持保存顺序（顺序参与花名册的序号语义）。
pub struct InMemoryEquipmentStore {
    records: RwLock<Vec<EquipmentRecord>>,
}

impl InMemoryEquipmentStore {
    /// 创建新的设备记录存储
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// 当前累计的记录数量（用于测试）
    pub fn len(&self) -> usize {
        self.records.read().map(|items| items.len()).unwrap_or(0)
    }
}

impl Default for InMemoryEquipmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EquipmentStore for InMemoryEquipmentStore {
    async fn replace_equipment(
        &self,
        ctx: &SurveyContext,
        report_id: &str,
        category: &str,
        records: Vec<EquipmentRecord>,
    ) -> Result<usize, StorageError> {
        ensure_report_scope(ctx, report_id)?;
        for record in &records {
            if record.tenant_id != ctx.tenant_id {
                return Err(StorageError::new("tenant mismatch"));
            }
            if record.report_id != report_id {
                return Err(StorageError::new("report mismatch"));
            }
            if record.category != category {
                return Err(StorageError::new("category mismatch"));
            }
        }
        let mut store = self
            .records
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        store.retain(|item| {
            !(item.tenant_id == ctx.tenant_id
                && item.report_id == report_id
                && item.category == category)
        });
        let written = records.len();
        store.extend(records);
        Ok(written)
    }

    async fn fetch_equipment(
        &self,
        ctx: &SurveyContext,
        report_id: &str,
    ) -> Result<Vec<EquipmentRecord>, StorageError> {
        ensure_report_scope(ctx, report_id)?;
        let items = self
            .records
            .read()
            .map(|store| {
                store
                    .iter()
                    .filter(|item| {
                        item.tenant_id == ctx.tenant_id && item.report_id == report_id
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(items)
    }

    async fn fetch_equipment_by_category(
        &self,
        ctx: &SurveyContext,
        report_id: &str,
        category: &str,
    ) -> Result<Vec<EquipmentRecord>, StorageError> {
        let items = self
            .fetch_equipment(ctx, report_id)
            .await?
            .into_iter()
            .filter(|item| item.category == category)
            .collect();
        Ok(items)
    }
}

#[async_trait::async_trait]
impl InverterRosterStore for InMemoryEquipmentStore {
    /// 花名册 = 报告内逆变器记录的 `品牌 型号` 标签，按保存顺序。
    /// 两者都缺失时留空串，交由归并器合成 `INVnn`。
    async fn inverter_roster(
        &self,
        ctx: &SurveyContext,
        report_id: &str,
    ) -> Result<Vec<String>, StorageError> {
        let labels = self
            .fetch_equipment_by_category(ctx, report_id, "inverter")
            .await?
            .into_iter()
            .map(|record| {
                let mut label = String::new();
                if let Some(brand) = record.brand.as_deref() {
                    label.push_str(brand.trim());
                }
                if let Some(model) = record.model.as_deref() {
                    if !label.is_empty() {
                        label.push(' ');
                    }
                    label.push_str(model.trim());
                }
                label
            })
            .collect();
        Ok(labels)
    }
}
