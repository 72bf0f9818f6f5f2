//! 側走廊（ASC）夾具
//!
//! 側走廊管接到該側柱列：跨度側接 跨數±1 根柱，開間側接 開間數+1 根柱。
//! 依天溝支架類型決定計算哪幾側；跨度 / 開間分配也供支撐管規則使用。

use ghbom_core::{GutterBracketType, StructuralParameters, ThickColumn};

use super::{put, ClampRule, ColumnSizes, RuleContext};
use crate::accumulator::{ClampAccumulator, ClampKind};

/// 側走廊所在邊
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AscSide {
    FrontSpan,
    BackSpan,
    FrontBay,
    BackBay,
}

impl AscSide {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FrontSpan => "Front Span",
            Self::BackSpan => "Back Span",
            Self::FrontBay => "Front Bay",
            Self::BackBay => "Back Bay",
        }
    }

    pub fn is_present(&self, params: &StructuralParameters) -> bool {
        match self {
            Self::FrontSpan => params.front_span_asc(),
            Self::BackSpan => params.back_span_asc(),
            Self::FrontBay => params.front_bay_asc(),
            Self::BackBay => params.back_bay_asc(),
        }
    }
}

/// 依天溝支架類型要計算的邊
pub fn active_sides(params: &StructuralParameters) -> Vec<AscSide> {
    let all = [AscSide::FrontSpan, AscSide::BackSpan, AscSide::FrontBay, AscSide::BackBay];
    let bay_side_required = params.corridors.as_ref().is_some_and(|c| c.bay_side_clamp_required);

    all.into_iter()
        .filter(|side| side.is_present(params))
        .filter(|side| match params.truss.gutter_bracket_type {
            GutterBracketType::Arch => {
                matches!(side, AscSide::FrontSpan | AscSide::BackSpan) || bay_side_required
            }
            GutterBracketType::FBracket | GutterBracketType::None => true,
        })
        .collect()
}

/// 單側的柱端夾具（全夾）
pub(crate) fn accumulate_side(ctx: &RuleContext<'_>, sizes: &ColumnSizes, acc: &mut ClampAccumulator, side: AscSide) {
    tracing::debug!("側走廊 {}", side.label());
    match side {
        AscSide::FrontSpan => span_side(ctx, sizes, acc, 1),
        AscSide::BackSpan => span_side(ctx, sizes, acc, 2),
        AscSide::FrontBay | AscSide::BackBay => bay_side(ctx, sizes, acc),
    }
}

/// 跨度側；錨框線數 ≥ `af_check` 時跨內有中柱
fn span_side(ctx: &RuleContext<'_>, sizes: &ColumnSizes, acc: &mut ClampAccumulator, af_check: i64) {
    let frame = &ctx.params.frame;
    let spans = frame.no_of_spans;
    let has_middle = frame.no_anchor_frame_lines >= af_check;
    let middle_per_af = frame.no_column_big_frame;

    let add_middle = |acc: &mut ClampAccumulator| {
        if middle_per_af > 0 {
            put(acc, ClampKind::FullClamp, sizes.middle(), spans * middle_per_af, "Middle");
        }
    };

    match frame.thick_column {
        ThickColumn::FourCorner | ThickColumn::BothBaySide => {
            put(acc, ClampKind::FullClamp, sizes.thick(), 2, "Thick");
            if has_middle {
                add_middle(acc);
                put(acc, ClampKind::FullClamp, sizes.af(), spans - 1, "AF");
            } else {
                put(acc, ClampKind::FullClamp, sizes.main(), spans - 1, "Main");
            }
        }
        ThickColumn::BothSpanSide | ThickColumn::AllFourSide => {
            put(acc, ClampKind::FullClamp, sizes.thick(), spans + 1, "Thick");
            if has_middle {
                add_middle(acc);
            }
        }
        ThickColumn::None => {
            if has_middle {
                add_middle(acc);
                put(acc, ClampKind::FullClamp, sizes.af(), spans + 1, "AF");
            } else {
                put(acc, ClampKind::FullClamp, sizes.main(), spans + 1, "Main");
            }
        }
    }
}

/// 開間側
fn bay_side(ctx: &RuleContext<'_>, sizes: &ColumnSizes, acc: &mut ClampAccumulator) {
    let frame = &ctx.params.frame;
    let bays = frame.no_of_bays;
    let af = frame.no_anchor_frame_lines;

    match frame.thick_column {
        ThickColumn::FourCorner | ThickColumn::BothSpanSide => {
            put(acc, ClampKind::FullClamp, sizes.thick(), 2, "Thick");
            if af < 3 {
                put(acc, ClampKind::FullClamp, sizes.main(), bays - 1, "Main");
            } else {
                put(acc, ClampKind::FullClamp, sizes.af(), af - 2, "AF");
                put(acc, ClampKind::FullClamp, sizes.main(), bays + 1 - af, "Main");
            }
        }
        ThickColumn::BothBaySide | ThickColumn::AllFourSide => {
            put(acc, ClampKind::FullClamp, sizes.thick(), bays + 1, "Thick");
        }
        ThickColumn::None => {
            if af == 0 {
                put(acc, ClampKind::FullClamp, sizes.main(), bays + 1, "Main");
            } else {
                put(acc, ClampKind::FullClamp, sizes.af(), af, "AF");
                put(acc, ClampKind::FullClamp, sizes.main(), bays + 1 - af, "Main");
            }
        }
    }
}

pub struct AscClampRule;

impl ClampRule for AscClampRule {
    fn section(&self) -> &'static str {
        "ASC CLAMPS"
    }

    fn applies(&self, params: &StructuralParameters) -> bool {
        params.is_side_corridors()
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let params = ctx.params;
        let sides = active_sides(params);
        if sides.is_empty() {
            return;
        }

        if params.truss.gutter_bracket_type == GutterBracketType::None {
            ctx.warn(self.section(), "已啟用側走廊但未選天溝支架類型，所有側走廊邊依 F 型支架計算".to_string());
        }

        let sizes = ColumnSizes::resolve(&ctx.view);
        for side in sides {
            accumulate_side(ctx, &sizes, acc, side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{columns, run, run_with_warnings};
    use ghbom_core::{ArchSupportType, CorridorConfig, FrameConfig, TrussConfig};

    fn params(thick: ThickColumn, af: i64, bracket: GutterBracketType, corridors: CorridorConfig) -> StructuralParameters {
        StructuralParameters::new(
            FrameConfig::new(3, 5)
                .with_thick_column(thick)
                .with_anchor_frame_lines(af)
                .with_middle_columns_per_af(2),
            TrussConfig::new(ArchSupportType::W).with_gutter_bracket(bracket),
        )
        .with_corridors(corridors)
    }

    fn all_sides() -> CorridorConfig {
        CorridorConfig::default().with_widths(3.0, 3.0, 3.0, 3.0)
    }

    #[test]
    fn test_active_sides_by_bracket() {
        let p = params(ThickColumn::None, 0, GutterBracketType::FBracket, all_sides());
        assert_eq!(active_sides(&p).len(), 4);

        let p = params(ThickColumn::None, 0, GutterBracketType::Arch, all_sides());
        assert_eq!(active_sides(&p), vec![AscSide::FrontSpan, AscSide::BackSpan]);

        let p = params(ThickColumn::None, 0, GutterBracketType::Arch, all_sides().with_bay_side_clamps(true));
        assert_eq!(active_sides(&p).len(), 4);
    }

    #[test]
    fn test_front_span_no_thick() {
        let corridors = CorridorConfig::default().with_widths(3.0, 0.0, 0.0, 0.0);
        let acc = run(&AscClampRule, &params(ThickColumn::None, 0, GutterBracketType::FBracket, corridors), &columns());
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 4);
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_span_side_af_checks() {
        // 錨框線 1：前跨度有中柱、後跨度沒有
        let corridors = CorridorConfig::default().with_widths(3.0, 3.0, 0.0, 0.0);
        let acc = run(&AscClampRule, &params(ThickColumn::None, 1, GutterBracketType::FBracket, corridors), &columns());
        assert_eq!(acc.get(ClampKind::FullClamp, "48mm"), 6);
        assert_eq!(acc.get(ClampKind::FullClamp, "76mm"), 4);
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 4);
    }

    #[test]
    fn test_span_side_four_corner() {
        let corridors = CorridorConfig::default().with_widths(3.0, 0.0, 0.0, 0.0);
        let acc = run(&AscClampRule, &params(ThickColumn::FourCorner, 2, GutterBracketType::FBracket, corridors), &columns());
        assert_eq!(acc.get(ClampKind::FullClamp, "89mm"), 2);
        assert_eq!(acc.get(ClampKind::FullClamp, "48mm"), 6);
        assert_eq!(acc.get(ClampKind::FullClamp, "76mm"), 2);
    }

    #[test]
    fn test_bay_sides() {
        let corridors = CorridorConfig::default().with_widths(0.0, 0.0, 3.0, 3.0);
        let acc = run(&AscClampRule, &params(ThickColumn::None, 2, GutterBracketType::FBracket, corridors.clone()), &columns());
        assert_eq!(acc.get(ClampKind::FullClamp, "76mm"), 4);
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 8);

        let acc = run(&AscClampRule, &params(ThickColumn::BothSpanSide, 4, GutterBracketType::FBracket, corridors), &columns());
        assert_eq!(acc.get(ClampKind::FullClamp, "89mm"), 4);
        assert_eq!(acc.get(ClampKind::FullClamp, "76mm"), 4);
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 4);
    }

    #[test]
    fn test_no_bracket_warns_and_uses_all_sides() {
        let (acc, warnings) = run_with_warnings(
            &AscClampRule,
            &params(ThickColumn::AllFourSide, 0, GutterBracketType::None, all_sides()),
            &columns(),
        );
        assert_eq!(warnings.len(), 1);
        // 跨度側各 4、開間側各 6
        assert_eq!(acc.get(ClampKind::FullClamp, "89mm"), 4 + 4 + 6 + 6);
    }
}
