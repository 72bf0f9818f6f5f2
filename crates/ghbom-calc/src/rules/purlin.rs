//! 拱檁條夾具
//!
//! 每跨兩端用第一段夾具（全夾或 L 接頭），其餘用第二段夾具（半夾或 T 接頭）。
//! 結果帶用途標籤，不與同尺寸的一般夾具合併。

use ghbom_core::{PurlinFirstType, PurlinSecondType};

use super::{ClampRule, RuleContext};
use crate::accumulator::{ClampAccumulator, ClampKind, ClampPurpose};
use crate::lookup::ArchSize;

pub struct PurlinRule;

impl PurlinRule {
    fn first_kind(first: PurlinFirstType) -> ClampKind {
        match first {
            PurlinFirstType::FullClamp => ClampKind::FullClamp,
            PurlinFirstType::LJoint => ClampKind::LJoint,
        }
    }

    fn second_kind(second: PurlinSecondType) -> ClampKind {
        match second {
            PurlinSecondType::HalfClamp => ClampKind::HalfClamp,
            PurlinSecondType::TJoint => ClampKind::TJoint,
        }
    }

    fn accumulate_arch(
        ctx: &RuleContext<'_>,
        acc: &mut ClampAccumulator,
        arch: ArchSize,
        first: Option<PurlinFirstType>,
        second: Option<PurlinSecondType>,
    ) {
        let data = ctx.view.arch(arch);
        let Some((count, size)) = data.usable() else {
            return;
        };
        let Some(first) = first else {
            return;
        };

        let purpose = match arch {
            ArchSize::Big => ClampPurpose::BigArchPurlin,
            ArchSize::Small => ClampPurpose::SmallArchPurlin,
        };

        let qty_first = ctx.params.frame.no_of_spans * 2;
        let first_kind = Self::first_kind(first);
        acc.add_tagged(first_kind, purpose, size, qty_first);
        tracing::debug!("  {} × {} - {} ({})", qty_first, first_kind, size, purpose.label());

        if let Some(second) = second {
            let qty_second = count - qty_first;
            if qty_second > 0 {
                let second_kind = Self::second_kind(second);
                acc.add_tagged(second_kind, purpose, size, qty_second);
                tracing::debug!("  {} × {} - {} ({})", qty_second, second_kind, size, purpose.label());
            }
        }
    }
}

impl ClampRule for PurlinRule {
    fn section(&self) -> &'static str {
        "PURLIN CLAMPS"
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let clamps = ctx.params.clamp_config();

        Self::accumulate_arch(ctx, acc, ArchSize::Big, clamps.big_purlin_first, clamps.big_purlin_second);
        Self::accumulate_arch(
            ctx,
            acc,
            ArchSize::Small,
            clamps.small_purlin_first,
            clamps.small_purlin_second,
        );
    }
}
