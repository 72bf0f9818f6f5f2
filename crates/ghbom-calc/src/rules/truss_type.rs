//! W / M 型桁架夾具

use ghbom_core::{ClampType, StructuralParameters};

use super::{ClampRule, RuleContext};
use crate::accumulator::{ClampAccumulator, ClampKind};

/// W 型桁架
pub struct WTypeRule;

impl ClampRule for WTypeRule {
    fn section(&self) -> &'static str {
        "W TYPE CLAMPS"
    }

    fn applies(&self, params: &StructuralParameters) -> bool {
        params.clamp_type() == ClampType::WType
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let view = &ctx.view;

        // 下弦固定每支 3 個，另加 V 撐
        if let Some((count, size)) = view.bottom_chord().usable() {
            acc.add(ClampKind::FullClamp, size, count * 3 + view.v_support_count());
        }

        add_arches(ctx, acc);

        let straight = view.arch_support_straight_middle();
        if let Some((count, size)) = straight.usable() {
            acc.add(ClampKind::FullClamp, size, count);
            acc.add(ClampKind::HalfClamp, size, count);
        }

        add_middle_columns(ctx, acc);
    }
}

/// M 型桁架
pub struct MTypeRule;

impl ClampRule for MTypeRule {
    fn section(&self) -> &'static str {
        "M TYPE CLAMPS"
    }

    fn applies(&self, params: &StructuralParameters) -> bool {
        params.clamp_type() == ClampType::MType
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let view = &ctx.view;
        let v_support_for_af = ctx.params.truss.v_support_for_af;
        let multiplier = ctx.params.clamp_config().bottom_chord_clamp_type.multiplier();

        let v_support = view.v_support_count();
        let anchor = view.bottom_chord_anchor();

        if let Some((count, size)) = view.bottom_chord().usable() {
            // 錨框線不裝 V 撐時，扣掉錨框的兩支
            let adjusted = if v_support_for_af {
                (v_support - anchor.count * 2).max(0)
            } else {
                v_support
            };
            tracing::debug!("M 型下弦: {} × {} + V 撐 {}", count, multiplier, adjusted);
            acc.add(ClampKind::FullClamp, size, count * multiplier + adjusted);
        }

        if let Some((count, size)) = anchor.usable() {
            let per_anchor = if v_support_for_af { 4 } else { 2 };
            acc.add(ClampKind::FullClamp, size, count * per_anchor);
        }

        add_arches(ctx, acc);
        add_middle_columns(ctx, acc);
    }
}

/// 大拱每支 2 個另加大拱通風撐；小拱每支 1 個
fn add_arches(ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
    let view = &ctx.view;

    if let Some((count, size)) = view.big_arch().usable() {
        acc.add(ClampKind::FullClamp, size, count * 2 + view.vent_big_support_count());
    }

    if let Some((count, size)) = view.small_arch().usable() {
        acc.add(ClampKind::FullClamp, size, count);
    }
}

fn add_middle_columns(ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
    if let Some((count, size)) = ctx.view.middle_columns().usable() {
        acc.add(ClampKind::FullClamp, size, count);
        acc.add(ClampKind::HalfClamp, size, count);
    }
}
