//! 剪刀撐夾具
//!
//! 四種剪刀撐各自計算：前後柱間、內部柱間、柱到拱、柱到下弦。
//! 柱端夾具依粗柱配置與 AFX 線數分配到粗柱、AF 柱、主柱。

use super::{put, ClampRule, ColumnSizes, RuleContext};
use crate::accumulator::{ClampAccumulator, ClampKind};

const FRONT_BACK: &str = "Front & Back Column to Column Cross Bracing X";
const INTERNAL_CC: &str = "Internal CC Cross Bracing X";
const COLUMN_TO_ARCH: &str = "Cross Bracing Column to Arch";
const COLUMN_TO_BOTTOM: &str = "Cross Bracing Column to Bottom Chord";

/// 粗柱位於開間邊（2 / 4）時每種柱端剪刀撐固定的粗柱夾具數
const FRONT_BACK_THICK: i64 = 16;
const COLUMN_END_THICK: i64 = 4;

pub struct CrossBracingRule;

impl CrossBracingRule {
    /// 前後柱間剪刀撐
    fn front_back(ctx: &RuleContext<'_>, sizes: &ColumnSizes, acc: &mut ClampAccumulator) {
        let count = ctx.view.lower_count(FRONT_BACK);
        if count <= 0 {
            return;
        }

        let frame = &ctx.params.frame;
        let af_lines = frame.no_anchor_frame_lines;
        let afx = if af_lines > 2 { (af_lines - 2).min(4) } else { 0 };
        let af_qty = afx * 2 * (frame.no_of_spans + 1);
        tracing::debug!("前後剪刀撐 {} 組，AFX {}", count, afx);

        if frame.thick_column.covers_bay_sides() {
            put(acc, ClampKind::FullClamp, sizes.thick(), FRONT_BACK_THICK, "Thick");
            if afx > 0 {
                put(acc, ClampKind::FullClamp, sizes.af(), af_qty, "AF");
            }
            put(acc, ClampKind::FullClamp, sizes.main(), count * 2 - af_qty - FRONT_BACK_THICK, "Main");
        } else if afx == 0 {
            put(acc, ClampKind::FullClamp, sizes.main(), count * 2, "Main");
        } else {
            put(acc, ClampKind::FullClamp, sizes.af(), af_qty, "AF");
            put(acc, ClampKind::FullClamp, sizes.main(), count * 2 - af_qty, "Main");
        }
    }

    /// 內部柱間剪刀撐
    fn internal_cc(ctx: &RuleContext<'_>, sizes: &ColumnSizes, acc: &mut ClampAccumulator) {
        let count = ctx.view.lower_count(INTERNAL_CC);
        if count <= 0 {
            return;
        }

        let frame = &ctx.params.frame;
        let afx2 = ctx.params.clamp_config().afx2_internal_cc_lines;
        let thick_on_bays = frame.thick_column.covers_bay_sides();
        tracing::debug!("內部剪刀撐 {} 組，AFX2 {}", count, afx2);

        let mut thick_qty = 0;
        if thick_on_bays && sizes.thick().is_some() {
            thick_qty = 8 * count;
            put(acc, ClampKind::FullClamp, sizes.thick(), thick_qty, "Thick");
        }

        if frame.no_anchor_frame_lines > 2 && afx2 > 0 {
            let mut af_qty = 0;
            if sizes.af().is_some() {
                af_qty = afx2 * (frame.no_of_spans + 1) * 2;
                put(acc, ClampKind::FullClamp, sizes.af(), af_qty, "AF");
            }
            put(acc, ClampKind::FullClamp, sizes.main(), count * 2 - thick_qty - af_qty, "Main");
        } else if !thick_on_bays {
            put(acc, ClampKind::FullClamp, sizes.main(), count * 2, "Main");
        }
    }

    /// 柱到拱 / 柱到下弦共用的柱端分配
    fn column_end(ctx: &RuleContext<'_>, sizes: &ColumnSizes, acc: &mut ClampAccumulator, count: i64, afx_lines: i64) {
        let frame = &ctx.params.frame;
        let afx = if frame.no_anchor_frame_lines > 2 { afx_lines } else { 0 };
        let spans = frame.no_of_spans;

        let mut thick_qty = 0;
        let af_qty = if frame.thick_column.covers_bay_sides() {
            if sizes.thick().is_some() {
                thick_qty = COLUMN_END_THICK;
                put(acc, ClampKind::FullClamp, sizes.thick(), thick_qty, "Thick");
            }
            afx * (spans * 2 - 2)
        } else {
            afx * spans * 2
        };

        let af_qty = if afx > 0 && sizes.af().is_some() {
            put(acc, ClampKind::FullClamp, sizes.af(), af_qty, "AF");
            af_qty
        } else {
            0
        };

        put(acc, ClampKind::FullClamp, sizes.main(), count - af_qty - thick_qty, "Main");
    }

    /// 柱到拱剪刀撐
    fn column_to_arch(ctx: &RuleContext<'_>, sizes: &ColumnSizes, acc: &mut ClampAccumulator) {
        let count = ctx.view.lower_count(COLUMN_TO_ARCH);
        if count <= 0 {
            return;
        }
        tracing::debug!("柱到拱剪刀撐 {} 組", count);

        put(acc, ClampKind::FullClamp, ctx.view.big_arch().size.as_deref(), count / 2, "Big Arch");
        put(acc, ClampKind::FullClamp, ctx.view.small_arch().size.as_deref(), count / 2, "Small Arch");

        let afx3 = ctx.params.clamp_config().afx3_column_arch_lines;
        Self::column_end(ctx, sizes, acc, count, afx3);
    }

    /// 柱到下弦剪刀撐
    fn column_to_bottom(ctx: &RuleContext<'_>, sizes: &ColumnSizes, acc: &mut ClampAccumulator) {
        let count = ctx.view.lower_count(COLUMN_TO_BOTTOM);
        if count <= 0 {
            return;
        }
        tracing::debug!("柱到下弦剪刀撐 {} 組", count);

        put(acc, ClampKind::FullClamp, ctx.view.bottom_chord().size.as_deref(), count, "Bottom Chord");

        let afx4 = ctx.params.clamp_config().afx4_column_bottom_lines;
        Self::column_end(ctx, sizes, acc, count, afx4);
    }
}

impl ClampRule for CrossBracingRule {
    fn section(&self) -> &'static str {
        "CROSS BRACING CLAMPS"
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let sizes = ColumnSizes::resolve(&ctx.view);

        Self::front_back(ctx, &sizes, acc);
        Self::internal_cc(ctx, &sizes, acc);
        Self::column_to_arch(ctx, &sizes, acc);
        Self::column_to_bottom(ctx, &sizes, acc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::ComponentIndex;
    use crate::rules::fixtures::{columns, lower, run, truss};
    use ghbom_core::{ArchSupportType, ClampConfig, FrameConfig, StructuralParameters, ThickColumn, TrussConfig};

    fn params(thick: ThickColumn, af_lines: i64) -> StructuralParameters {
        StructuralParameters::new(
            FrameConfig::new(3, 5).with_thick_column(thick).with_anchor_frame_lines(af_lines),
            TrussConfig::new(ArchSupportType::W),
        )
    }

    fn with_bracing(name: &str, nos: i64) -> ComponentIndex {
        columns().with(lower(name, nos))
    }

    #[test]
    fn test_front_back_plain() {
        let acc = run(&CrossBracingRule, &params(ThickColumn::None, 0), &with_bracing(FRONT_BACK, 8));
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 16);
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_front_back_with_af_lines() {
        // AF 5 條 → AFX 3；AF 夾具 3 × 2 × 4 = 24
        let acc = run(&CrossBracingRule, &params(ThickColumn::FourCorner, 5), &with_bracing(FRONT_BACK, 20));
        assert_eq!(acc.get(ClampKind::FullClamp, "76mm"), 24);
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 16);
    }

    #[test]
    fn test_front_back_afx_capped_at_four() {
        let acc = run(&CrossBracingRule, &params(ThickColumn::None, 10), &with_bracing(FRONT_BACK, 40));
        assert_eq!(acc.get(ClampKind::FullClamp, "76mm"), 32);
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 48);
    }

    #[test]
    fn test_front_back_thick_bay_side() {
        let acc = run(&CrossBracingRule, &params(ThickColumn::BothBaySide, 0), &with_bracing(FRONT_BACK, 12));
        assert_eq!(acc.get(ClampKind::FullClamp, "89mm"), 16);
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 8);
    }

    #[test]
    fn test_internal_cc() {
        let acc = run(&CrossBracingRule, &params(ThickColumn::None, 0), &with_bracing(INTERNAL_CC, 6));
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 12);

        // 粗柱在開間邊且無 AFX2：只有粗柱夾具
        let acc = run(&CrossBracingRule, &params(ThickColumn::AllFourSide, 0), &with_bracing(INTERNAL_CC, 6));
        assert_eq!(acc.get(ClampKind::FullClamp, "89mm"), 48);
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 0);
    }

    #[test]
    fn test_internal_cc_with_afx2() {
        let params = params(ThickColumn::None, 4).with_clamps(ClampConfig::default().with_afx_lines(1, 0, 0));
        let acc = run(&CrossBracingRule, &params, &with_bracing(INTERNAL_CC, 10));
        assert_eq!(acc.get(ClampKind::FullClamp, "76mm"), 8);
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 12);
    }

    #[test]
    fn test_column_to_arch() {
        let index = with_bracing(COLUMN_TO_ARCH, 12)
            .with(truss("Big Arch", 18, 42.0))
            .with(truss("Small Arch", 12, 33.0));
        let params = params(ThickColumn::BothBaySide, 3).with_clamps(ClampConfig::default().with_afx_lines(0, 1, 0));

        let acc = run(&CrossBracingRule, &params, &index);
        assert_eq!(acc.get(ClampKind::FullClamp, "42mm"), 6);
        assert_eq!(acc.get(ClampKind::FullClamp, "33mm"), 6);
        assert_eq!(acc.get(ClampKind::FullClamp, "89mm"), 4);
        // AF 1 × (3×2 - 2) = 4；主柱 12 - 4 - 4
        assert_eq!(acc.get(ClampKind::FullClamp, "76mm"), 4);
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 4);
    }

    #[test]
    fn test_column_to_bottom_ignores_afx_without_enough_af_lines() {
        let index = with_bracing(COLUMN_TO_BOTTOM, 10).with(truss("Bottom Chord", 10, 50.0));
        let params = params(ThickColumn::None, 2).with_clamps(ClampConfig::default().with_afx_lines(0, 0, 2));

        let acc = run(&CrossBracingRule, &params, &index);
        assert_eq!(acc.get(ClampKind::FullClamp, "50mm"), 10);
        assert_eq!(acc.get(ClampKind::FullClamp, "76mm"), 0);
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 10);
    }

    #[test]
    fn test_all_four_kinds_run() {
        let index = columns()
            .with(lower(FRONT_BACK, 4))
            .with(lower(INTERNAL_CC, 3))
            .with(lower(COLUMN_TO_ARCH, 2))
            .with(lower(COLUMN_TO_BOTTOM, 5));

        let acc = run(&CrossBracingRule, &params(ThickColumn::None, 0), &index);
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 8 + 6 + 2 + 5);
    }
}
