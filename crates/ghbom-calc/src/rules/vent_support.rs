//! 小拱通風撐夾具

use super::{put, ClampRule, RuleContext};
use crate::accumulator::{ClampAccumulator, ClampKind};

pub struct VentSupportRule;

impl ClampRule for VentSupportRule {
    fn section(&self) -> &'static str {
        "VENT SUPPORT CLAMPS"
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let vent = ctx.view.vent_small_support_count();
        if vent <= 0 {
            return;
        }

        put(acc, ClampKind::FullClamp, ctx.view.bottom_chord().size.as_deref(), vent / 2, "Bottom Chord");
        put(
            acc,
            ClampKind::FullClamp,
            ctx.view.small_arch_purlin_size().as_deref(),
            vent,
            "Small Arch Purlin",
        );
    }
}
