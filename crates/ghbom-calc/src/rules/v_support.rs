//! V 撐柱夾具
//!
//! V 撐在每條框線的柱上各需一個夾具。跨內柱用半夾，邊柱用全夾；
//! 依粗柱配置與錨框線數分配到主柱、AF 柱、粗柱三種管徑。

use ghbom_core::{StructuralParameters, ThickColumn};

use super::{ClampRule, RuleContext};
use crate::accumulator::{ClampAccumulator, ClampKind};

/// 單一柱型的全夾 / 半夾數
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClampSplit {
    pub full: i64,
    pub half: i64,
}

impl ClampSplit {
    pub fn total(&self) -> i64 {
        self.full + self.half
    }
}

/// 三種柱型的分配結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnDistribution {
    pub main: ClampSplit,
    pub af: ClampSplit,
    pub thick: ClampSplit,
}

/// 計算 V 撐夾具分配
///
/// `spans`、`bays` 為跨數與開間數，`af` 為錨框線數。
pub fn distribute(thick_column: ThickColumn, af: i64, spans: i64, bays: i64, v_support_for_af: bool) -> ColumnDistribution {
    let inner = spans - 1;
    let lines = bays + 1;
    let half_total = inner * lines;
    let full_total = 2 * lines;

    let mut d = ColumnDistribution::default();

    match thick_column {
        ThickColumn::None => {
            if af == 0 {
                d.main.half = half_total;
                d.main.full = full_total;
            } else {
                d.af.half = af * inner;
                d.af.full = 2 * af;
                d.main.half = half_total - d.af.half;
                d.main.full = full_total - d.af.full;
            }
        }
        ThickColumn::FourCorner => {
            d.thick.full = 4;
            match af {
                0 => {
                    d.main.half = half_total;
                    d.main.full = full_total - 4;
                }
                // 單條錨框線時 AF 柱沒有全夾
                1 => {
                    d.af.half = inner;
                    d.main.half = half_total - d.af.half;
                    d.main.full = full_total - 4;
                }
                _ => {
                    d.af.half = af * inner;
                    d.af.full = 2 * af - 4;
                    d.main.half = half_total - d.af.half;
                    d.main.full = full_total - d.af.full - 4;
                }
            }
        }
        ThickColumn::BothBaySide => {
            d.thick.full = full_total;
            if af == 0 {
                d.main.half = half_total;
            } else {
                d.af.half = af * inner;
                d.main.half = half_total - d.af.half;
            }
        }
        ThickColumn::AllFourSide => {
            d.thick.half = inner * 2;
            d.thick.full = full_total;
            if af < 3 {
                d.main.half = half_total - d.thick.half;
            } else {
                d.af.half = (af - 2) * inner;
                d.main.half = half_total - d.af.half - d.thick.half;
            }
        }
        ThickColumn::BothSpanSide => {
            if af == 0 {
                d.thick.half = inner * 2;
                d.thick.full = 4;
                d.main.half = half_total - d.thick.half;
                d.main.full = full_total - 4;
            } else if af > 2 {
                d.thick.half = inner * 2;
                d.thick.full = 4;
                d.af.half = (af - 2) * inner;
                d.af.full = 2 * af - 4;
                d.main.half = half_total - d.af.half - d.thick.half;
                d.main.full = full_total - d.af.full - 4;
            } else {
                d.thick.half = inner * af;
                d.thick.full = 2 * af;
                d.main.half = half_total - d.thick.half;
                d.main.full = full_total - d.thick.full;
            }
        }
    }

    if !v_support_for_af {
        d.af = ClampSplit::default();

        match thick_column {
            ThickColumn::FourCorner if af < 3 => {
                d.thick.full -= 2 * af;
            }
            ThickColumn::BothBaySide if af > 0 => {
                d.thick.full -= 2 * af;
            }
            ThickColumn::AllFourSide | ThickColumn::BothSpanSide if af < 3 => {
                d.thick.half -= inner * af;
                d.thick.full -= 2 * af;
            }
            _ => {}
        }
    }

    d
}

pub struct VSupportRule;

impl ClampRule for VSupportRule {
    fn section(&self) -> &'static str {
        "V SUPPORT CLAMPS"
    }

    fn applies(&self, params: &StructuralParameters) -> bool {
        params.truss.is_bottom_chord
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let v_support = ctx.view.v_support_count();
        if v_support <= 0 {
            return;
        }

        let per_frame = ctx.params.truss.v_support_bottom_chord_frame;
        let frames = if per_frame > 0 { v_support / per_frame } else { 0 };
        if frames == 0 {
            ctx.warn(
                self.section(),
                format!("V 撐數量為 {}，但每框 V 撐數為 {}，無法推算框數", v_support, per_frame),
            );
            return;
        }

        let frame = &ctx.params.frame;
        tracing::debug!(
            "V 撐 {} 支 / {} 框，粗柱 {}，錨框線 {}",
            v_support,
            frames,
            frame.thick_column.code(),
            frame.no_anchor_frame_lines
        );

        let distribution = distribute(
            frame.thick_column,
            frame.no_anchor_frame_lines,
            frame.no_of_spans,
            frame.no_of_bays,
            ctx.params.truss.v_support_for_af,
        );

        let columns = [
            ("MAIN", distribution.main, ctx.view.main_column_size()),
            ("AF", distribution.af, ctx.view.af_support_column_size()),
            ("THICK", distribution.thick, ctx.view.thick_column_size()),
        ];

        for (label, split, size) in columns {
            let Some(size) = size else {
                continue;
            };
            if split.total() == 0 {
                continue;
            }
            tracing::debug!("  {}: 全夾 {}, 半夾 {} - {}", label, split.full, split.half, size);
            acc.add(ClampKind::FullClamp, &size, split.full);
            acc.add(ClampKind::HalfClamp, &size, split.half);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{columns, run_with_warnings, truss};
    use ghbom_core::{ArchSupportType, FrameConfig, TrussConfig};
    use rstest::rstest;

    fn split(full: i64, half: i64) -> ClampSplit {
        ClampSplit { full, half }
    }

    #[test]
    fn test_no_thick_no_af() {
        // 4 跨 5 間：內柱 3 × 6 框線 = 18 半夾；邊柱 12 全夾
        let d = distribute(ThickColumn::None, 0, 4, 5, true);
        assert_eq!(d.main, split(12, 18));
        assert_eq!(d.af, ClampSplit::default());
        assert_eq!(d.thick, ClampSplit::default());
    }

    #[test]
    fn test_no_thick_with_af() {
        let d = distribute(ThickColumn::None, 2, 4, 5, true);
        assert_eq!(d.af, split(4, 6));
        assert_eq!(d.main, split(8, 12));
    }

    #[rstest]
    #[case(0, split(8, 18), split(0, 0), split(4, 0))]
    #[case(1, split(8, 15), split(0, 3), split(4, 0))]
    #[case(3, split(6, 9), split(2, 9), split(4, 0))]
    fn test_four_corner(
        #[case] af: i64,
        #[case] main: ClampSplit,
        #[case] af_split: ClampSplit,
        #[case] thick: ClampSplit,
    ) {
        let d = distribute(ThickColumn::FourCorner, af, 4, 5, true);
        assert_eq!(d.main, main);
        assert_eq!(d.af, af_split);
        assert_eq!(d.thick, thick);
    }

    #[test]
    fn test_both_bay_side() {
        let d = distribute(ThickColumn::BothBaySide, 2, 4, 5, true);
        assert_eq!(d.thick, split(12, 0));
        assert_eq!(d.af, split(0, 6));
        assert_eq!(d.main, split(0, 12));
    }

    #[test]
    fn test_all_four_side() {
        let d = distribute(ThickColumn::AllFourSide, 1, 4, 5, true);
        assert_eq!(d.thick, split(12, 6));
        assert_eq!(d.main, split(0, 12));

        let d = distribute(ThickColumn::AllFourSide, 4, 4, 5, true);
        assert_eq!(d.af, split(0, 6));
        assert_eq!(d.main, split(0, 6));
    }

    #[rstest]
    #[case(0, split(8, 12), split(0, 0), split(4, 6))]
    #[case(2, split(8, 12), split(0, 0), split(4, 6))]
    #[case(1, split(10, 15), split(0, 0), split(2, 3))]
    #[case(4, split(4, 6), split(4, 6), split(4, 6))]
    fn test_both_span_side(
        #[case] af: i64,
        #[case] main: ClampSplit,
        #[case] af_split: ClampSplit,
        #[case] thick: ClampSplit,
    ) {
        let d = distribute(ThickColumn::BothSpanSide, af, 4, 5, true);
        assert_eq!(d.main, main);
        assert_eq!(d.af, af_split);
        assert_eq!(d.thick, thick);
    }

    #[test]
    fn test_without_af_v_support() {
        let d = distribute(ThickColumn::None, 2, 4, 5, false);
        assert_eq!(d.af, ClampSplit::default());
        assert_eq!(d.main, split(8, 12));

        let d = distribute(ThickColumn::BothBaySide, 2, 4, 5, false);
        assert_eq!(d.thick, split(8, 0));

        let d = distribute(ThickColumn::FourCorner, 1, 4, 5, false);
        assert_eq!(d.thick, split(2, 0));

        let d = distribute(ThickColumn::BothSpanSide, 1, 4, 5, false);
        assert_eq!(d.thick, split(0, 0));

        // 錨框線 > 2 時粗柱不扣減
        let d = distribute(ThickColumn::FourCorner, 3, 4, 5, false);
        assert_eq!(d.thick, split(4, 0));
    }

    #[test]
    fn test_rule_emits_per_column_size() {
        let params = StructuralParameters::new(
            FrameConfig::new(4, 5).with_thick_column(ThickColumn::FourCorner),
            TrussConfig::new(ArchSupportType::W).with_bottom_chord(2),
        );
        let index = columns().with(truss("V Support Bottom Chord", 12, 25.0));

        let (acc, warnings) = run_with_warnings(&VSupportRule, &params, &index);
        assert!(warnings.is_empty());
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 8);
        assert_eq!(acc.get(ClampKind::HalfClamp, "60mm"), 18);
        assert_eq!(acc.get(ClampKind::FullClamp, "89mm"), 4);
        assert_eq!(acc.get(ClampKind::HalfClamp, "89mm"), 0);
    }

    #[test]
    fn test_zero_per_frame_warns() {
        let params = StructuralParameters::new(
            FrameConfig::new(4, 5),
            TrussConfig::new(ArchSupportType::W).with_bottom_chord(0),
        );
        let index = columns().with(truss("V Support Bottom Chord", 12, 25.0));

        let (acc, warnings) = run_with_warnings(&VSupportRule, &params, &index);
        assert!(acc.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_no_v_support_is_silent() {
        let params = StructuralParameters::new(
            FrameConfig::new(4, 5),
            TrussConfig::new(ArchSupportType::W).with_bottom_chord(2),
        );
        let (acc, warnings) = run_with_warnings(&VSupportRule, &params, &columns());
        assert!(acc.is_empty());
        assert!(warnings.is_empty());
    }
}
