//! 側走廊支撐管夾具
//!
//! A 部分：四側支撐管總數，每支一個 ASC 管徑全夾。
//! B 部分：每個存在的側走廊邊依柱配置計算，再乘上每支曲棍支撐數。

use ghbom_core::StructuralParameters;

use super::asc::{accumulate_side, AscSide};
use super::{ClampRule, ColumnSizes, RuleContext};
use crate::accumulator::{ClampAccumulator, ClampKind};

pub struct AscSupportPipeRule;

impl ClampRule for AscSupportPipeRule {
    fn section(&self) -> &'static str {
        "ASC SUPPORT PIPE CLAMPS"
    }

    fn applies(&self, params: &StructuralParameters) -> bool {
        params.is_side_corridors() && params.support_hockeys() > 0
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let params = ctx.params;
        let total_supports = ctx.view.asc_support_total();
        let any_side = params.corridors.as_ref().is_some_and(|c| c.any_side());
        if total_supports <= 0 && !any_side {
            return;
        }

        let per_hockey = params.support_hockeys().max(1);
        tracing::debug!("支撐管 {} 支，每支曲棍 {} 個", total_supports, per_hockey);

        // A：支撐管數量已含每支曲棍倍數
        if total_supports > 0 {
            if let Some(size) = ctx.view.asc_pipe_size() {
                acc.add(ClampKind::FullClamp, &size, total_supports);
            }
        }

        // B
        let sizes = ColumnSizes::resolve(&ctx.view);
        let mut per_side = ClampAccumulator::new();
        for side in [AscSide::FrontSpan, AscSide::BackSpan, AscSide::FrontBay, AscSide::BackBay] {
            if side.is_present(params) {
                accumulate_side(ctx, &sizes, &mut per_side, side);
            }
        }
        acc.merge_scaled(&per_side, per_hockey as u64);
    }
}
