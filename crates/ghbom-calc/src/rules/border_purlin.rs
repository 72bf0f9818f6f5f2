//! 邊檁條夾具
//!
//! 開間側（前 / 後）與跨度側（前 / 後）分別計算。該側有側走廊時改用 ASC 管徑。

use ghbom_core::ThickColumn;

use super::{put, ClampRule, ColumnSizes, RuleContext};
use crate::accumulator::{ClampAccumulator, ClampKind};

/// 邊
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    FrontBay,
    BackBay,
    FrontSpan,
    BackSpan,
}

impl Side {
    fn label(&self) -> &'static str {
        match self {
            Self::FrontBay => "Front Bay",
            Self::BackBay => "Back Bay",
            Self::FrontSpan => "Front Span",
            Self::BackSpan => "Back Span",
        }
    }

    /// 跨度側出現中柱所需的錨框線門檻：前側 0、後側 1
    fn af_threshold(&self) -> i64 {
        match self {
            Self::FrontSpan | Self::FrontBay => 0,
            Self::BackSpan | Self::BackBay => 1,
        }
    }
}

pub struct BorderPurlinRule;

impl BorderPurlinRule {
    fn has_asc(ctx: &RuleContext<'_>, side: Side) -> bool {
        let params = ctx.params;
        match side {
            Side::FrontBay => params.front_bay_asc(),
            Side::BackBay => params.back_bay_asc(),
            Side::FrontSpan => params.front_span_asc(),
            Side::BackSpan => params.back_span_asc(),
        }
    }

    /// 有側走廊時取 ASC 管徑；查無時記錄警告並略過此側
    fn asc_size(ctx: &RuleContext<'_>, side: Side) -> Option<String> {
        let size = ctx.view.asc_pipe_size();
        if size.is_none() {
            ctx.warn("BORDER PURLIN CLAMPS", format!("{} 有側走廊但查無 ASC 管徑", side.label()));
        }
        size
    }

    fn bay_side(ctx: &RuleContext<'_>, sizes: &ColumnSizes, acc: &mut ClampAccumulator, side: Side, count: i64) {
        let frame = &ctx.params.frame;
        let bays = frame.no_of_bays;
        let af = frame.no_anchor_frame_lines;

        if Self::has_asc(ctx, side) {
            if let Some(asc) = Self::asc_size(ctx, side) {
                put(acc, ClampKind::HalfClamp, Some(&asc), (bays - 1) * count, "ASC");
                put(acc, ClampKind::FullClamp, Some(&asc), 2 * count, "ASC");
            }
            return;
        }

        tracing::debug!("{}: 粗柱 {}，錨框線 {}", side.label(), frame.thick_column.code(), af);

        match frame.thick_column {
            ThickColumn::FourCorner | ThickColumn::BothSpanSide => {
                if (0..=2).contains(&af) {
                    put(acc, ClampKind::HalfClamp, sizes.main(), (bays - 1) * count, "Main");
                } else {
                    put(acc, ClampKind::HalfClamp, sizes.af(), (af - 2) * count, "AF");
                    put(acc, ClampKind::HalfClamp, sizes.main(), (bays - 1 - (af - 2)) * count, "Main");
                }
                put(acc, ClampKind::FullClamp, sizes.thick(), 2 * count, "Thick");
            }
            ThickColumn::BothBaySide | ThickColumn::AllFourSide => {
                put(acc, ClampKind::HalfClamp, sizes.thick(), (bays - 1) * count, "Thick");
                put(acc, ClampKind::FullClamp, sizes.thick(), 2 * count, "Thick");
            }
            ThickColumn::None => match af {
                0 => {
                    put(acc, ClampKind::HalfClamp, sizes.main(), (bays - 1) * count, "Main");
                    put(acc, ClampKind::FullClamp, sizes.main(), 2 * count, "Main");
                }
                1 => {
                    put(acc, ClampKind::HalfClamp, sizes.main(), (bays - 1) * count, "Main");
                    put(acc, ClampKind::FullClamp, sizes.af(), count, "AF");
                    put(acc, ClampKind::FullClamp, sizes.main(), count, "Main");
                }
                2 => {
                    put(acc, ClampKind::HalfClamp, sizes.main(), (bays - 1) * count, "Main");
                    put(acc, ClampKind::FullClamp, sizes.af(), 2 * count, "AF");
                }
                _ => {
                    put(acc, ClampKind::HalfClamp, sizes.af(), (af - 2) * count, "AF");
                    put(acc, ClampKind::HalfClamp, sizes.main(), (bays - af + 1) * count, "Main");
                    put(acc, ClampKind::FullClamp, sizes.af(), 2 * count, "AF");
                }
            },
        }
    }

    fn span_side(ctx: &RuleContext<'_>, sizes: &ColumnSizes, acc: &mut ClampAccumulator, side: Side, count: i64) {
        let frame = &ctx.params.frame;
        let spans = frame.no_of_spans;
        let af = frame.no_anchor_frame_lines;
        let has_middle = af > side.af_threshold();

        if Self::has_asc(ctx, side) {
            if let Some(asc) = Self::asc_size(ctx, side) {
                put(acc, ClampKind::HalfClamp, Some(&asc), (spans - 1) * count, "ASC");
                if has_middle {
                    put(acc, ClampKind::HalfClamp, sizes.middle(), spans * count, "Middle");
                }
                put(acc, ClampKind::FullClamp, Some(&asc), 2 * count, "ASC");
            }
            return;
        }

        tracing::debug!("{}: 粗柱 {}，錨框線 {}", side.label(), frame.thick_column.code(), af);

        match frame.thick_column {
            ThickColumn::FourCorner | ThickColumn::BothBaySide => {
                if has_middle {
                    put(acc, ClampKind::HalfClamp, sizes.af(), (spans - 1) * count, "AF");
                    put(acc, ClampKind::HalfClamp, sizes.middle(), spans * count, "Middle");
                } else {
                    put(acc, ClampKind::HalfClamp, sizes.main(), (spans - 1) * count, "Main");
                }
                put(acc, ClampKind::FullClamp, sizes.thick(), 2 * count, "Thick");
            }
            ThickColumn::BothSpanSide | ThickColumn::AllFourSide => {
                put(acc, ClampKind::HalfClamp, sizes.thick(), (spans - 1) * count, "Thick");
                put(acc, ClampKind::FullClamp, sizes.thick(), 2 * count, "Thick");
                if has_middle {
                    put(acc, ClampKind::HalfClamp, sizes.middle(), spans * count, "Middle");
                }
            }
            ThickColumn::None => {
                if has_middle {
                    put(acc, ClampKind::HalfClamp, sizes.af(), (spans - 1) * count, "AF");
                    put(acc, ClampKind::HalfClamp, sizes.middle(), spans * count, "Middle");
                    put(acc, ClampKind::FullClamp, sizes.af(), 2 * count, "AF");
                } else {
                    put(acc, ClampKind::HalfClamp, sizes.main(), (spans - 1) * count, "Main");
                    put(acc, ClampKind::FullClamp, sizes.main(), 2 * count, "Main");
                }
            }
        }
    }
}

impl ClampRule for BorderPurlinRule {
    fn section(&self) -> &'static str {
        "BORDER PURLIN CLAMPS"
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let sizes = ColumnSizes::resolve(&ctx.view);

        let bay_count = ctx.params.bay_side_border_purlin();
        if bay_count > 0 {
            tracing::debug!("開間側邊檁條 {} 條", bay_count);
            Self::bay_side(ctx, &sizes, acc, Side::FrontBay, bay_count);
            Self::bay_side(ctx, &sizes, acc, Side::BackBay, bay_count);
        }

        let span_count = ctx.params.span_side_border_purlin();
        if span_count > 0 {
            tracing::debug!("跨度側邊檁條 {} 條", span_count);
            Self::span_side(ctx, &sizes, acc, Side::FrontSpan, span_count);
            Self::span_side(ctx, &sizes, acc, Side::BackSpan, span_count);
        }
    }
}
