//! 計算明細
//!
//! 依區段列出每筆夾具的來源，供審核使用。區段內序號每筆 +10，每個區段起點 +100。

use ghbom_core::{EngineConfig, RateTable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ClampSection;

/// 單筆計算明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationDetail {
    pub sequence: u32,

    /// 區段標題，例如 "W TYPE CLAMPS"
    pub section: String,

    /// 夾具識別名稱，例如 "Full Clamp (Big Arch Purlin)"
    pub component: String,

    /// 基礎種類，例如 "Full Clamp"
    pub kind: String,

    pub size: String,
    pub quantity: u64,
    pub formula: String,
    pub unit_price: Decimal,
}

/// 明細建構器
pub struct DetailBuilder;

impl DetailBuilder {
    const FIRST_SEQUENCE: u32 = 10;
    const ROW_STEP: u32 = 10;
    const SECTION_STEP: u32 = 100;

    /// 從計算結果的各區段建立明細
    pub fn build(sections: &[ClampSection], rates: &RateTable, config: &EngineConfig) -> Vec<CalculationDetail> {
        let mut details = Vec::new();
        let mut section_start = Self::FIRST_SEQUENCE;

        for section in sections {
            if section.entries.is_empty() {
                continue;
            }

            let formula = format!("Calculated from {}", section.label.to_lowercase());
            let mut sequence = section_start;

            for (key, quantity) in section.entries.iter() {
                let kind = key.kind.label();
                details.push(CalculationDetail {
                    sequence,
                    section: section.label.to_string(),
                    component: key.identifier(),
                    kind: kind.to_string(),
                    size: key.size.clone(),
                    quantity,
                    formula: formula.clone(),
                    unit_price: rates.unit_price_or(kind, config.category, &key.size, config.default_unit_price),
                });
                sequence += Self::ROW_STEP;
            }

            section_start += Self::SECTION_STEP;
        }

        details
    }
}
