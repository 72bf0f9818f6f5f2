//! 拱到下弦 / 拱到直撐夾具

use ghbom_core::{ArchSupportType, StructuralParameters};

use super::{put, ClampRule, RuleContext};
use crate::accumulator::{ClampAccumulator, ClampKind};

/// 拱支撐數量在下弦、大拱、小拱之間分配：下弦全數，大小拱各半
fn split_population(ctx: &RuleContext<'_>, acc: &mut ClampAccumulator, population: i64) {
    if population <= 0 {
        return;
    }
    let view = &ctx.view;
    let half = population / 2;

    put(acc, ClampKind::FullClamp, view.bottom_chord().size.as_deref(), population, "Bottom Chord");
    put(acc, ClampKind::FullClamp, view.big_arch().size.as_deref(), half, "Big Arch");
    put(acc, ClampKind::FullClamp, view.small_arch().size.as_deref(), half, "Small Arch");
}

/// 拱到下弦：以小拱支撐數計
pub struct ArchToBottomRule;

impl ClampRule for ArchToBottomRule {
    fn section(&self) -> &'static str {
        "ARCH TO BOTTOM CLAMPS"
    }

    fn applies(&self, params: &StructuralParameters) -> bool {
        params.truss.arch_support_type == ArchSupportType::ArchToBottom
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let view = &ctx.view;
        split_population(ctx, acc, view.small_arch_support_count());

        let straight = view.arch_support_straight_middle();
        if straight.count > 0 {
            put(acc, ClampKind::FullClamp, view.bottom_chord().size.as_deref(), straight.count, "Bottom Chord");
            put(acc, ClampKind::FullClamp, view.big_arch().size.as_deref(), straight.count, "Big Arch");
        }
    }
}

/// 拱到直撐：以大拱支撐數計
pub struct ArchToStraightRule;

impl ClampRule for ArchToStraightRule {
    fn section(&self) -> &'static str {
        "ARCH TO STRAIGHT CLAMPS"
    }

    fn applies(&self, params: &StructuralParameters) -> bool {
        params.truss.arch_support_type == ArchSupportType::ArchToStraight
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let view = &ctx.view;
        split_population(ctx, acc, view.big_arch_support_count());

        let straight = view.arch_support_straight_middle();
        if straight.count > 0 {
            put(acc, ClampKind::FullClamp, view.big_arch().size.as_deref(), straight.count, "Big Arch");
        }
    }
}
