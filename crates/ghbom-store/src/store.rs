//! 明細行存儲
//!
//! 以 (專案, 類別) 為單位整批替換；舊明細在同一次寫入中刪除。

use chrono::{DateTime, Utc};
use ghbom_core::{Category, GhError, OutputLine, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// 明細行存儲介面
pub trait LineStore: Send + Sync {
    /// 以新明細整批替換 (專案, 類別) 的舊明細，回傳寫入行數
    fn replace(&self, project_id: &str, category: Category, lines: Vec<OutputLine>) -> Result<usize>;

    /// 讀取 (專案, 類別) 的明細
    fn lines(&self, project_id: &str, category: Category) -> Result<Vec<OutputLine>>;

    /// 最後替換時間
    fn replaced_at(&self, project_id: &str, category: Category) -> Result<Option<DateTime<Utc>>>;
}

#[derive(Debug, Clone)]
struct StoredBatch {
    lines: Vec<OutputLine>,
    replaced_at: DateTime<Utc>,
}

/// 記憶體存儲
#[derive(Debug, Default)]
pub struct MemoryLineStore {
    batches: RwLock<HashMap<(String, Category), StoredBatch>>,
}

impl MemoryLineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已有明細的專案（排序）
    pub fn projects(&self) -> Result<Vec<String>> {
        let batches = self
            .batches
            .read()
            .map_err(|e| GhError::Store(format!("讀取鎖失敗: {e}")))?;

        let mut projects: Vec<String> = batches.keys().map(|(project, _)| project.clone()).collect();
        projects.sort();
        projects.dedup();
        Ok(projects)
    }

    fn check_batch(project_id: &str, category: Category, lines: &[OutputLine]) -> Result<()> {
        for line in lines {
            if line.project_id != project_id || line.category != category {
                return Err(GhError::Store(format!(
                    "明細 {} 不屬於 {}/{}",
                    line.name,
                    project_id,
                    category.as_str()
                )));
            }
            if line.quantity == 0 {
                return Err(GhError::InvalidParameter(format!("明細 {} 數量為 0", line.name)));
            }
        }
        Ok(())
    }
}

impl LineStore for MemoryLineStore {
    fn replace(&self, project_id: &str, category: Category, lines: Vec<OutputLine>) -> Result<usize> {
        Self::check_batch(project_id, category, &lines)?;

        let mut batches = self
            .batches
            .write()
            .map_err(|e| GhError::Store(format!("寫入鎖失敗: {e}")))?;

        let count = lines.len();
        let previous = batches.insert(
            (project_id.to_string(), category),
            StoredBatch {
                lines,
                replaced_at: Utc::now(),
            },
        );

        tracing::debug!(
            "{}/{}: 刪除 {} 行，寫入 {} 行",
            project_id,
            category.as_str(),
            previous.map_or(0, |b| b.lines.len()),
            count
        );
        Ok(count)
    }

    fn lines(&self, project_id: &str, category: Category) -> Result<Vec<OutputLine>> {
        let batches = self
            .batches
            .read()
            .map_err(|e| GhError::Store(format!("讀取鎖失敗: {e}")))?;

        Ok(batches
            .get(&(project_id.to_string(), category))
            .map(|b| b.lines.clone())
            .unwrap_or_default())
    }

    fn replaced_at(&self, project_id: &str, category: Category) -> Result<Option<DateTime<Utc>>> {
        let batches = self
            .batches
            .read()
            .map_err(|e| GhError::Store(format!("讀取鎖失敗: {e}")))?;

        Ok(batches.get(&(project_id.to_string(), category)).map(|b| b.replaced_at))
    }
}
