//! # Greenhouse Clamp Calculation Engine
//!
//! 從結構參數與已生成構件推導夾具數量

use serde::Serialize;

pub mod accumulator;
pub mod calculator;
pub mod details;
pub mod lookup;
pub mod materializer;
pub mod report;
pub mod rules;
pub mod summary;

// Re-export 主要類型
pub use accumulator::{ClampAccumulator, ClampKey, ClampKind, ClampPurpose};
pub use calculator::ClampCalculator;
pub use details::{CalculationDetail, DetailBuilder};
pub use lookup::{ComponentIndex, ComponentLookup, StructureView};
pub use materializer::Materializer;
pub use report::{RenderedSection, Report, ReportBuilder, ReportSection};
pub use rules::{ClampRule, RuleContext};
pub use summary::{border_purlin_summary, clamps_size_summary};

/// 夾具計算結果
#[derive(Debug, Clone, Default)]
pub struct ClampResult {
    /// 全部夾具（跨區段合併）
    pub accumulator: ClampAccumulator,

    /// 各區段的貢獻，依規則執行順序
    pub sections: Vec<ClampSection>,

    /// 警告信息
    pub warnings: Vec<ClampWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ClampResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self::default()
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: ClampWarning) {
        self.warnings.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.accumulator.is_empty()
    }

    pub fn total_quantity(&self) -> u64 {
        self.accumulator.total_quantity()
    }
}

/// 單一區段的夾具
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClampSection {
    /// 區段標題，例如 "PURLIN CLAMPS"
    pub label: &'static str,
    pub entries: ClampAccumulator,
}

/// 計算警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClampWarning {
    pub rule: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl ClampWarning {
    pub fn new(rule: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            rule,
            message,
            severity,
        }
    }

    pub fn info(rule: String, message: String) -> Self {
        Self::new(rule, message, WarningSeverity::Info)
    }

    pub fn warning(rule: String, message: String) -> Self {
        Self::new(rule, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    Info,
    Warning,
}
