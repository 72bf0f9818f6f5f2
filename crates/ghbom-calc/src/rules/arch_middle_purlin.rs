//! 拱中檁條夾具

use ghbom_core::{ArchMiddlePurlinConfig, ArchMiddlePurlinLayout};

use super::{ClampRule, RuleContext};
use crate::accumulator::{ClampAccumulator, ClampKind, ClampPurpose};
use crate::lookup::ArchSize;

pub struct ArchMiddlePurlinRule;

/// 依佈置計算 (全夾, 半夾)
pub(crate) fn layout_quantities(
    layout: ArchMiddlePurlinLayout,
    pcs: i64,
    purlin_count: i64,
    spans: i64,
    bays: i64,
) -> (i64, i64) {
    match layout {
        ArchMiddlePurlinLayout::None => (0, 0),
        ArchMiddlePurlinLayout::FourCorners | ArchMiddlePurlinLayout::FrontBack => (purlin_count * 2, 0),
        ArchMiddlePurlinLayout::BothSide => (4 * pcs, (bays - 1) * pcs * 2),
        ArchMiddlePurlinLayout::FourSide => (((spans - 2) * 4 + 4) * pcs, (bays - 1) * pcs * 2),
        ArchMiddlePurlinLayout::All => (spans * 2 * pcs, spans * (bays - 1) * pcs),
    }
}

impl ArchMiddlePurlinRule {
    fn accumulate_arch(ctx: &RuleContext<'_>, acc: &mut ClampAccumulator, arch: ArchSize, config: ArchMiddlePurlinConfig) {
        if !config.is_enabled() {
            return;
        }
        let Some(size) = ctx.view.arch(arch).size else {
            return;
        };
        let purlin_count = ctx.view.arch_middle_purlin_count(arch);
        if purlin_count <= 0 {
            return;
        }

        let frame = &ctx.params.frame;
        let (full, half) = layout_quantities(config.layout, config.pcs, purlin_count, frame.no_of_spans, frame.no_of_bays);
        tracing::debug!("  {} 拱中檁條 ({:?}): 全夾 {}, 半夾 {}", arch.label(), config.layout, full, half);

        let purpose = match arch {
            ArchSize::Big => ClampPurpose::ArchMiddlePurlinBigArch,
            ArchSize::Small => ClampPurpose::ArchMiddlePurlinSmallArch,
        };
        acc.add_tagged(ClampKind::FullClamp, purpose, &size, full);
        acc.add_tagged(ClampKind::HalfClamp, purpose, &size, half);
    }
}

impl ClampRule for ArchMiddlePurlinRule {
    fn section(&self) -> &'static str {
        "ARCH MIDDLE PURLIN CLAMPS"
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let clamps = ctx.params.clamp_config();
        Self::accumulate_arch(ctx, acc, ArchSize::Big, clamps.arch_middle_purlin_big);
        Self::accumulate_arch(ctx, acc, ArchSize::Small, clamps.arch_middle_purlin_small);
    }
}
