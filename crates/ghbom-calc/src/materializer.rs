//! 明細行輸出
//!
//! 每個夾具鍵產生一行，依基礎種類查價。

use ghbom_core::{EngineConfig, OutputLine, RateTable};

use crate::accumulator::ClampAccumulator;

pub struct Materializer;

impl Materializer {
    /// 將累加器轉成已定價的明細行（順序與累加器一致）
    pub fn materialize(
        project_id: &str,
        accumulator: &ClampAccumulator,
        rates: &RateTable,
        config: &EngineConfig,
    ) -> Vec<OutputLine> {
        let lines: Vec<OutputLine> = accumulator
            .iter()
            .map(|(key, quantity)| {
                let kind = key.kind.label();
                let unit_price =
                    rates.unit_price_or(kind, config.category, &key.size, config.default_unit_price);

                OutputLine::new(
                    project_id,
                    config.category,
                    key.display_name(),
                    kind,
                    key.size.clone(),
                    quantity,
                    unit_price,
                )
                .with_description(format!("Auto-calculated {}", key.identifier()))
            })
            .collect();

        tracing::debug!("{}: 產生 {} 行 {}", project_id, lines.len(), config.category.as_str());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::{ClampKind, ClampPurpose};
    use ghbom_core::{Category, RateEntry};
    use rust_decimal::Decimal;

    fn accumulator() -> ClampAccumulator {
        let mut acc = ClampAccumulator::new();
        acc.add(ClampKind::FullClamp, "50mm", 34);
        acc.add(ClampKind::HalfClamp, "60mm", 8);
        acc.add_tagged(ClampKind::HalfClamp, ClampPurpose::BigArchPurlin, "60mm", 14);
        acc
    }

    #[test]
    fn test_one_line_per_key() {
        let lines = Materializer::materialize("GH-001", &accumulator(), &RateTable::new(), &EngineConfig::default());

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.quantity > 0 && l.project_id == "GH-001"));

        let names: Vec<_> = lines.iter().map(|l| l.name.as_str()).collect();
        assert!(names.contains(&"Full Clamp - 50mm"));
        assert!(names.contains(&"Half Clamp (Big Arch Purlin) - 60mm"));
    }

    #[test]
    fn test_prices_by_base_kind() {
        let rates = RateTable::from_entries(vec![RateEntry::new(
            "Half Clamp",
            Category::Clamps,
            "60mm",
            Decimal::new(750, 2),
        )]);
        let lines = Materializer::materialize("GH-001", &accumulator(), &rates, &EngineConfig::default());

        let tagged = lines
            .iter()
            .find(|l| l.name == "Half Clamp (Big Arch Purlin) - 60mm")
            .unwrap();
        assert_eq!(tagged.kind, "Half Clamp");
        assert_eq!(tagged.total, Decimal::from(105));
        assert_eq!(tagged.description, "Auto-calculated Half Clamp (Big Arch Purlin)");

        let unpriced = lines.iter().find(|l| l.name == "Full Clamp - 50mm").unwrap();
        assert_eq!(unpriced.unit_price, Decimal::ZERO);
        assert_eq!(unpriced.total, Decimal::ZERO);
    }

    #[test]
    fn test_default_unit_price() {
        let config = EngineConfig::default().with_default_unit_price(Decimal::from(2));
        let lines = Materializer::materialize("GH-001", &accumulator(), &RateTable::new(), &config);

        let full = lines.iter().find(|l| l.name == "Full Clamp - 50mm").unwrap();
        assert_eq!(full.total, Decimal::from(68));
    }
}
