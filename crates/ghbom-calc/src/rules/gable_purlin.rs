//! 山牆檁條夾具（僅 F 型天溝支架）

use ghbom_core::GutterBracketType;

use super::{ClampRule, RuleContext};
use crate::accumulator::{ClampAccumulator, ClampKind};

pub struct GablePurlinRule;

impl ClampRule for GablePurlinRule {
    fn section(&self) -> &'static str {
        "GABLE PURLIN CLAMPS"
    }

    fn accumulate(&self, ctx: &RuleContext<'_>, acc: &mut ClampAccumulator) {
        let count = ctx.view.gable_purlin_count();
        if count <= 0 {
            return;
        }

        if ctx.params.truss.gutter_bracket_type != GutterBracketType::FBracket {
            tracing::debug!("有山牆檁條但非 F 型天溝支架，略過");
            return;
        }

        let Some(size) = ctx.view.big_arch().size else {
            return;
        };

        // 四角全夾，每開間兩側半夾
        acc.add(ClampKind::FullClamp, &size, 4);
        acc.add(ClampKind::HalfClamp, &size, (ctx.params.frame.no_of_bays - 1) * 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::ComponentIndex;
    use crate::rules::fixtures::{run, truss};
    use ghbom_core::{ArchSupportType, FrameConfig, StructuralParameters, TrussConfig};

    fn index() -> ComponentIndex {
        ComponentIndex::from_records(vec![truss("Big Arch", 18, 60.0), truss("Gable Purlin", 2, 32.0)])
    }

    #[test]
    fn test_f_bracket_gable_purlin() {
        let params = StructuralParameters::new(
            FrameConfig::new(3, 5),
            TrussConfig::new(ArchSupportType::W).with_gutter_bracket(GutterBracketType::FBracket),
        );

        let acc = run(&GablePurlinRule, &params, &index());
        assert_eq!(acc.get(ClampKind::FullClamp, "60mm"), 4);
        assert_eq!(acc.get(ClampKind::HalfClamp, "60mm"), 8);
    }

    #[test]
    fn test_other_brackets_skip() {
        let params = StructuralParameters::new(
            FrameConfig::new(3, 5),
            TrussConfig::new(ArchSupportType::W).with_gutter_bracket(GutterBracketType::Arch),
        );
        assert!(run(&GablePurlinRule, &params, &index()).is_empty());
    }
}
