//! 测量点内存存储实现
//!
//! 仅用于本地测试和占位。

use crate::error::StorageError;
use crate::traits::MeasurementStore;
use crate::validation::ensure_report_scope;
use domain::{MeasurementPoint, SurveyContext};
use std::collections::HashMap;
use std::sync::RwLock;

/// 测量点内存存储
pub struct InMemoryMeasurementStore {
    points: RwLock<HashMap<(String, String), Vec<MeasurementPoint>>>,
}

impl InMemoryMeasurementStore {
    /// 创建新的测量点存储
    pub fn new() -> Self {
        Self {
            points: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryMeasurementStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MeasurementStore for InMemoryMeasurementStore {
    async fn replace_measurements(
        &self,
        ctx: &SurveyContext,
        report_id: &str,
        points: Vec<MeasurementPoint>,
    ) -> Result<usize, StorageError> {
        ensure_report_scope(ctx, report_id)?;
        let mut store = self
            .points
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let written = points.len();
        store.insert((ctx.tenant_id.clone(), report_id.to_string()), points);
        Ok(written)
    }

    async fn fetch_measurements(
        &self,
        ctx: &SurveyContext,
        report_id: &str,
    ) -> Result<Vec<MeasurementPoint>, StorageError> {
        ensure_report_scope(ctx, report_id)?;
        let items = self
            .points
            .read()
            .ok()
            .and_then(|store| {
                store
                    .get(&(ctx.tenant_id.clone(), report_id.to_string()))
                    .cloned()
            })
            .unwrap_or_default();
        Ok(items)
    }
}
