//! 夾具主計算器

use ghbom_core::{ArchSupportType, EngineConfig, StructuralParameters};

use crate::accumulator::ClampAccumulator;
use crate::lookup::{ComponentLookup, StructureView};
use crate::rules::{default_rules, ClampRule, RuleContext};
use crate::{ClampResult, ClampSection, ClampWarning};

/// 夾具計算器
pub struct ClampCalculator {
    /// 引擎配置
    config: EngineConfig,

    /// 規則集（依序執行）
    rules: Vec<Box<dyn ClampRule>>,
}

impl ClampCalculator {
    /// 以標準規則集創建
    pub fn new(config: EngineConfig) -> Self {
        let rules = default_rules(&config);
        Self { config, rules }
    }

    /// 以自訂規則集創建
    pub fn with_rules(config: EngineConfig, rules: Vec<Box<dyn ClampRule>>) -> Self {
        Self { config, rules }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 規則的區段標題，依執行順序
    pub fn sections(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.section()).collect()
    }

    /// 無任何夾具來源時直接跳過
    fn nothing_to_do(params: &StructuralParameters) -> bool {
        params.truss.arch_support_type == ArchSupportType::None
            && params.bay_side_border_purlin() <= 0
            && params.span_side_border_purlin() <= 0
            && !params.is_side_corridors()
            && !params.truss.is_bottom_chord
    }

    /// 主計算入口
    ///
    /// 不做配置驗證（由呼叫端在建立參數時處理）。構件缺失、查無管徑只會少產生對應夾具；
    /// 數量欄位先截斷至 `MAX_COUNT` 再計算。
    pub fn calculate(
        &self,
        params: &StructuralParameters,
        lookup: &dyn ComponentLookup,
    ) -> ghbom_core::Result<ClampResult> {
        let params = &params.bounded();
        let start_time = std::time::Instant::now();

        if Self::nothing_to_do(params) {
            tracing::info!("無拱支撐、邊檁條、側走廊與下弦，跳過夾具計算");
            let mut result = ClampResult::empty();
            result.calculation_time_ms = Some(start_time.elapsed().as_millis());
            return Ok(result);
        }

        tracing::info!(
            "開始夾具計算：{} 跨 × {} 間，拱支撐 {:?}，粗柱 {}",
            params.frame.no_of_spans,
            params.frame.no_of_bays,
            params.truss.arch_support_type,
            params.frame.thick_column.code()
        );

        let view = StructureView::new(lookup);
        let ctx = RuleContext::new(params, view);

        let mut total = ClampAccumulator::new();
        let mut sections = Vec::new();

        for rule in self.rules.iter().filter(|rule| rule.applies(params)) {
            let mut entries = ClampAccumulator::new();
            rule.accumulate(&ctx, &mut entries);

            if entries.is_empty() {
                tracing::debug!("{}: 無夾具", rule.section());
                continue;
            }

            if !self.config.separate_tagged_lines {
                entries = entries.without_tags();
            }

            tracing::debug!(
                "{}: {} 種，共 {} 個",
                rule.section(),
                entries.len(),
                entries.total_quantity()
            );
            total.merge(&entries);
            sections.push(ClampSection {
                label: rule.section(),
                entries,
            });
        }

        let mut warnings = ctx.into_warnings();
        if !total.is_empty() && view.column_pipe_size().is_none() {
            warnings.push(ClampWarning::info(
                "FRAME".to_string(),
                "查無任何柱管徑，柱端夾具未計入".to_string(),
            ));
        }

        let mut result = ClampResult::empty();
        result.accumulator = total;
        result.sections = sections;
        result.warnings = warnings;
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("夾具計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "夾具種類: {}，總數: {}，警告: {}",
            result.accumulator.len(),
            result.total_quantity(),
            result.warnings.len()
        );

        Ok(result)
    }
}

impl Default for ClampCalculator {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
