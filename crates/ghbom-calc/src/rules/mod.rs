//! 夾具推導規則
//!
//! 每條規則是 `(參數, 構件查詢) → 寫入累加器` 的純函數，互不依賴，
//! 執行順序不影響最終結果。規則從不報錯：前提不成立或查無管徑時只是不產生該筆。

pub mod arch_middle_purlin;
pub mod arch_support;
pub mod asc;
pub mod asc_support;
pub mod border_purlin;
pub mod cross_bracing;
pub mod gable_purlin;
pub mod purlin;
pub mod truss_type;
pub mod v_support;
pub mod vent_support;

use ghbom_core::{EngineConfig, StructuralParameters};
use std::cell::RefCell;

use crate::accumulator::{ClampAccumulator, ClampKind};
use crate::lookup::StructureView;
use crate::ClampWarning;

/// 規則執行環境
pub struct RuleContext<'a> {
    pub params: &'a StructuralParameters,
    pub view: StructureView<'a>,
    warnings: RefCell<Vec<ClampWarning>>,
}

impl<'a> RuleContext<'a> {
    pub fn new(params: &'a StructuralParameters, view: StructureView<'a>) -> Self {
        Self {
            params,
            view,
            warnings: RefCell::new(Vec::new()),
        }
    }

    /// 記錄警告（不中斷計算）
    pub fn warn(&self, rule: &str, message: String) {
        tracing::warn!("[{}] {}", rule, message);
        self.warnings
            .borrow_mut()
            .push(ClampWarning::warning(rule.to_string(), message));
    }

    pub fn into_warnings(self) -> Vec<ClampWarning> {
        self.warnings.into_inner()
    }
}

/// 夾具規則
pub trait ClampRule: Send + Sync {
    /// 明細區段標題，例如 "W TYPE CLAMPS"
    fn section(&self) -> &'static str;

    /// 是否啟用
    fn applies(&self, _params: &StructuralParameters) -> bool {
        true
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator);
}

/// 標準規則集（固定順序）
pub fn default_rules(config: &EngineConfig) -> Vec<Box<dyn ClampRule>> {
    let mut rules: Vec<Box<dyn ClampRule>> = vec![
        Box::new(truss_type::WTypeRule),
        Box::new(truss_type::MTypeRule),
        Box::new(arch_support::ArchToBottomRule),
        Box::new(arch_support::ArchToStraightRule),
        Box::new(purlin::PurlinRule),
        Box::new(v_support::VSupportRule),
        Box::new(vent_support::VentSupportRule),
        Box::new(cross_bracing::CrossBracingRule),
        Box::new(border_purlin::BorderPurlinRule),
        Box::new(asc::AscClampRule),
    ];

    if config.include_asc_support_pipe {
        rules.push(Box::new(asc_support::AscSupportPipeRule));
    }
    if config.include_arch_middle_purlin {
        rules.push(Box::new(arch_middle_purlin::ArchMiddlePurlinRule));
    }
    rules.push(Box::new(gable_purlin::GablePurlinRule));

    rules
}

/// 有管徑才累加
pub(crate) fn put(acc: &mut ClampAccumulator, kind: ClampKind, size: Option<&str>, quantity: i64, label: &str) {
    let Some(size) = size else {
        tracing::debug!("{} 無管徑，略過 {} × {}", label, quantity, kind);
        return;
    };
    if quantity > 0 {
        tracing::debug!("  {} × {} - {} ({})", quantity, kind, size, label);
    }
    acc.add(kind, size, quantity);
}

/// 各類柱管徑（一次解析）
#[derive(Debug, Clone, Default)]
pub(crate) struct ColumnSizes {
    pub main: Option<String>,
    pub af: Option<String>,
    pub thick: Option<String>,
    pub middle: Option<String>,
}

impl ColumnSizes {
    pub fn resolve(view: &StructureView<'_>) -> Self {
        Self {
            main: view.main_column_size(),
            af: view.af_column_size(),
            thick: view.thick_column_size(),
            middle: view.middle_column_size(),
        }
    }

    pub fn main(&self) -> Option<&str> {
        self.main.as_deref()
    }

    pub fn af(&self) -> Option<&str> {
        self.af.as_deref()
    }

    pub fn thick(&self) -> Option<&str> {
        self.thick.as_deref()
    }

    pub fn middle(&self) -> Option<&str> {
        self.middle.as_deref()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! 規則測試共用構件

    use ghbom_core::{ComponentRecord, ComponentSection, StructuralParameters};

    use super::{ClampRule, RuleContext};
    use crate::accumulator::ClampAccumulator;
    use crate::lookup::{ComponentIndex, StructureView};
    use crate::ClampWarning;

    /// 單獨執行一條規則
    pub fn run(rule: &dyn ClampRule, params: &StructuralParameters, index: &ComponentIndex) -> ClampAccumulator {
        run_with_warnings(rule, params, index).0
    }

    pub fn run_with_warnings(
        rule: &dyn ClampRule,
        params: &StructuralParameters,
        index: &ComponentIndex,
    ) -> (ClampAccumulator, Vec<ClampWarning>) {
        let ctx = RuleContext::new(params, StructureView::new(index));
        let mut acc = ClampAccumulator::new();
        rule.accumulate(&ctx, &mut acc);
        (acc, ctx.into_warnings())
    }

    pub fn truss(name: &str, nos: i64, mm: f64) -> ComponentRecord {
        ComponentRecord::new(ComponentSection::Truss, name, nos).with_size_mm(mm)
    }

    pub fn frame(name: &str, nos: i64, mm: f64) -> ComponentRecord {
        ComponentRecord::new(ComponentSection::Frame, name, nos).with_size_mm(mm)
    }

    pub fn lower(name: &str, nos: i64) -> ComponentRecord {
        ComponentRecord::new(ComponentSection::Lower, name, nos)
    }

    pub fn asc(name: &str, nos: i64) -> ComponentRecord {
        ComponentRecord::new(ComponentSection::Asc, name, nos)
    }

    /// 主柱 60、AF 主柱 76、粗柱 89、中柱 48
    pub fn columns() -> ComponentIndex {
        ComponentIndex::from_records(vec![
            frame("Main Columns", 24, 60.0),
            frame("AF Main Columns", 8, 76.0),
            frame("Thick Columns", 4, 89.0),
            frame("Middle Columns", 6, 48.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_respect_config() {
        let all = default_rules(&EngineConfig::default());
        assert_eq!(all.len(), 13);

        let trimmed = default_rules(
            &EngineConfig::default()
                .with_arch_middle_purlin(false)
                .with_asc_support_pipe(false),
        );
        assert_eq!(trimmed.len(), 11);
        assert!(trimmed.iter().all(|r| r.section() != "ASC SUPPORT PIPE CLAMPS"));
    }

    #[test]
    fn test_put_requires_size() {
        let mut acc = ClampAccumulator::new();
        put(&mut acc, ClampKind::FullClamp, None, 5, "Main");
        assert!(acc.is_empty());

        put(&mut acc, ClampKind::FullClamp, Some("60mm"), 5, "Main");
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 5);
    }
}
