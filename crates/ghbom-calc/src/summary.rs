//! 摘要字串

use std::collections::BTreeMap;

use ghbom_core::{OutputLine, StructuralParameters, ThickColumn};

/// 依尺寸彙總數量，例如 "50mm: 34 pcs | 60mm: 12 pcs"；無明細時為空字串
pub fn clamps_size_summary(lines: &[OutputLine]) -> String {
    let mut by_size: BTreeMap<&str, u64> = BTreeMap::new();
    for line in lines {
        let size = if line.size.is_empty() { "Unknown" } else { line.size.as_str() };
        *by_size.entry(size).or_insert(0) += line.quantity;
    }

    by_size
        .iter()
        .map(|(size, quantity)| format!("{size}: {quantity} pcs"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// 邊檁條配置摘要；兩側皆為 0 時為空字串
pub fn border_purlin_summary(params: &StructuralParameters) -> String {
    let bay_side = params.bay_side_border_purlin();
    let span_side = params.span_side_border_purlin();
    if bay_side == 0 && span_side == 0 {
        return String::new();
    }

    let mut parts = Vec::new();

    if bay_side > 0 {
        parts.push(format!(
            "Bay Side: {bay_side}{}",
            asc_suffix(params.front_bay_asc(), params.back_bay_asc())
        ));
    }
    if span_side > 0 {
        parts.push(format!(
            "Span Side: {span_side}{}",
            asc_suffix(params.front_span_asc(), params.back_span_asc())
        ));
    }

    let thick = params.frame.thick_column;
    if thick != ThickColumn::None {
        parts.push(format!("Thick: {}", thick.label()));
    }

    let af = params.frame.no_anchor_frame_lines;
    if af > 0 {
        parts.push(format!("AF Lines: {af}"));
    }

    parts.join(" | ")
}

fn asc_suffix(front: bool, back: bool) -> String {
    let mut suffix = String::new();
    if front {
        suffix.push_str(" (Front ASC)");
    }
    if back {
        suffix.push_str(" (Back ASC)");
    }
    suffix
}
