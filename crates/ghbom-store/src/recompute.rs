//! 重算驅動
//!
//! 驗證 → 計算 → 輸出明細 → 整批替換。任何一步失敗時該專案的既有明細保持不變。

use ghbom_calc::{ClampCalculator, ClampWarning, ComponentIndex, Materializer};
use ghbom_core::{ComponentRecord, GhError, RateTable, Result, StructuralParameters};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::dirty_tracking::DirtyTracker;
use crate::store::LineStore;

/// 單一專案的重算輸入
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInput {
    pub project_id: String,
    pub params: StructuralParameters,

    #[serde(default)]
    pub components: Vec<ComponentRecord>,
}

impl ProjectInput {
    pub fn new(project_id: impl Into<String>, params: StructuralParameters, components: Vec<ComponentRecord>) -> Self {
        Self {
            project_id: project_id.into(),
            params,
            components,
        }
    }
}

/// 重算結果
#[derive(Debug, Clone)]
pub struct RecomputeOutcome {
    pub project_id: String,

    /// 寫入行數
    pub lines_written: usize,

    pub total_quantity: u64,
    pub warnings: Vec<ClampWarning>,
    pub calculation_time_ms: Option<u128>,
}

/// 重算驅動
pub struct Recomputer<S: LineStore> {
    calculator: ClampCalculator,
    rates: RateTable,
    store: S,
}

impl<S: LineStore> Recomputer<S> {
    pub fn new(calculator: ClampCalculator, rates: RateTable, store: S) -> Self {
        Self {
            calculator,
            rates,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 重算單一專案；配置無效時不計算
    pub fn recompute(&self, input: &ProjectInput) -> Result<RecomputeOutcome> {
        input.params.validate().map_err(|e| {
            tracing::warn!("{}: 配置無效，保留既有明細: {}", input.project_id, e);
            e
        })?;

        let config = self.calculator.config();
        let index = ComponentIndex::from_records(input.components.iter().cloned());

        let result = self.calculator.calculate(&input.params, &index).map_err(|e| {
            tracing::warn!("{}: 計算失敗，保留既有明細: {}", input.project_id, e);
            e
        })?;

        let lines = Materializer::materialize(&input.project_id, &result.accumulator, &self.rates, config);
        let lines_written = self.store.replace(&input.project_id, config.category, lines)?;

        tracing::info!(
            "{}: 重算完成，{} 行，共 {} 個",
            input.project_id,
            lines_written,
            result.total_quantity()
        );

        Ok(RecomputeOutcome {
            project_id: input.project_id.clone(),
            lines_written,
            total_quantity: result.total_quantity(),
            warnings: result.warnings,
            calculation_time_ms: result.calculation_time_ms,
        })
    }

    /// 並行重算所有髒專案；成功者清除標記，失敗者保留以便下次重試
    pub fn recompute_dirty(
        &self,
        tracker: &mut DirtyTracker,
        inputs: &HashMap<String, ProjectInput>,
    ) -> Vec<(String, Result<RecomputeOutcome>)> {
        let dirty = tracker.get_dirty_projects();
        tracing::info!("批次重算 {} 個專案", dirty.len());

        let results: Vec<(String, Result<RecomputeOutcome>)> = dirty
            .par_iter()
            .map(|project_id| {
                let outcome = match inputs.get(project_id) {
                    Some(input) => self.recompute(input),
                    None => Err(GhError::InvalidParameter(format!("專案 {project_id} 無重算輸入"))),
                };
                (project_id.clone(), outcome)
            })
            .collect();

        for (project_id, outcome) in &results {
            if outcome.is_ok() {
                tracker.clear_project(project_id);
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryLineStore;
    use ghbom_core::{
        ArchSupportType, Category, ClampConfig, ComponentSection, FrameConfig, PurlinFirstType,
        TrussConfig,
    };

    fn w_house() -> ProjectInput {
        ProjectInput::new(
            "GH-001",
            StructuralParameters::new(FrameConfig::new(3, 5), TrussConfig::new(ArchSupportType::W)),
            vec![
                ComponentRecord::new(ComponentSection::Truss, "Bottom Chord", 10).with_size_mm(50.0),
                ComponentRecord::new(ComponentSection::Truss, "V Support Bottom Chord", 4).with_size_mm(25.0),
                ComponentRecord::new(ComponentSection::Frame, "Main Columns", 24).with_size_mm(60.0),
            ],
        )
    }

    fn invalid(project_id: &str) -> ProjectInput {
        let mut input = w_house();
        input.project_id = project_id.to_string();
        input.params = input
            .params
            .with_clamps(ClampConfig::default().with_big_purlin(PurlinFirstType::FullClamp, None));
        input
    }

    fn recomputer() -> Recomputer<MemoryLineStore> {
        Recomputer::new(ClampCalculator::default(), RateTable::new(), MemoryLineStore::new())
    }

    #[test]
    fn test_recompute_writes_lines() {
        let recomputer = recomputer();
        let outcome = recomputer.recompute(&w_house()).unwrap();

        assert_eq!(outcome.total_quantity, 34);
        let lines = recomputer.store().lines("GH-001", Category::Clamps).unwrap();
        assert_eq!(lines.len(), outcome.lines_written);
        assert_eq!(lines[0].name, "Full Clamp - 50mm");
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let recomputer = recomputer();
        recomputer.recompute(&w_house()).unwrap();
        let first = recomputer.store().lines("GH-001", Category::Clamps).unwrap();
        recomputer.recompute(&w_house()).unwrap();
        let second = recomputer.store().lines("GH-001", Category::Clamps).unwrap();

        let shape = |lines: &[ghbom_core::OutputLine]| -> Vec<(String, u64)> {
            lines.iter().map(|l| (l.name.clone(), l.quantity)).collect()
        };
        assert_eq!(shape(&first), shape(&second));
    }

    #[test]
    fn test_failed_recompute_keeps_lines() {
        let recomputer = recomputer();
        recomputer.recompute(&w_house()).unwrap();

        let err = recomputer.recompute(&invalid("GH-001")).unwrap_err();
        assert!(matches!(err, GhError::InvalidConfiguration(_)));
        assert_eq!(recomputer.store().lines("GH-001", Category::Clamps).unwrap().len(), 1);
    }

    #[test]
    fn test_recompute_dirty_clears_successes_only() {
        let recomputer = recomputer();
        let mut tracker = DirtyTracker::new();
        tracker.mark_dirty("GH-001");
        tracker.mark_dirty("GH-002");
        tracker.mark_dirty("GH-003");

        let mut inputs = HashMap::new();
        inputs.insert("GH-001".to_string(), w_house());
        inputs.insert("GH-002".to_string(), invalid("GH-002"));

        let results = recomputer.recompute_dirty(&mut tracker, &inputs);

        assert_eq!(results.len(), 3);
        assert!(results[0].1.is_ok());
        assert!(results[1].1.is_err());
        assert!(results[2].1.is_err());
        assert_eq!(tracker.get_dirty_projects(), vec!["GH-002", "GH-003"]);
    }
}
