//! 髒標記追蹤
//!
//! 結構參數或構件變更後標記專案，批次重算時只處理被標記者。

use std::collections::HashSet;

/// 專案髒標記追蹤器
#[derive(Debug, Clone)]
pub struct DirtyTracker {
    dirty_projects: HashSet<String>,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self {
            dirty_projects: HashSet::new(),
        }
    }

    /// 標記專案需要重算
    pub fn mark_dirty(&mut self, project_id: impl Into<String>) {
        self.dirty_projects.insert(project_id.into());
    }

    pub fn is_dirty(&self, project_id: &str) -> bool {
        self.dirty_projects.contains(project_id)
    }

    /// 清除單一專案的標記
    pub fn clear_project(&mut self, project_id: &str) -> bool {
        self.dirty_projects.remove(project_id)
    }

    /// 清除所有髒標記
    pub fn clear(&mut self) {
        self.dirty_projects.clear();
    }

    /// 所有待重算專案（排序）
    pub fn get_dirty_projects(&self) -> Vec<String> {
        let mut projects: Vec<String> = self.dirty_projects.iter().cloned().collect();
        projects.sort();
        projects
    }

    pub fn len(&self) -> usize {
        self.dirty_projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirty_projects.is_empty()
    }
}

impl Default for DirtyTracker {
    fn default() -> Self {
        Self::new()
    }
}
