//! 報表區段
//!
//! 區段描述由呼叫端明確傳入，依優先序排列；只做分組與合計，不處理檔案輸出。

use ghbom_core::{Category, OutputLine};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 報表區段描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub key: String,
    pub title: String,

    /// 歸入此區段的類別
    pub categories: Vec<Category>,

    /// 越小越前面
    pub priority: u32,
}

impl ReportSection {
    pub fn new(key: impl Into<String>, title: impl Into<String>, categories: Vec<Category>, priority: u32) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            categories,
            priority,
        }
    }

    /// 配件類標準區段
    pub fn standard() -> Vec<Self> {
        vec![
            Self::new("profiles", "Profiles Components", vec![Category::Profiles], 10),
            Self::new("brackets", "Brackets Components", vec![Category::Brackets], 20),
            Self::new("wires_connectors", "Wires & Connectors", vec![Category::Wires], 30),
            Self::new("clamps", "Clamps Components", vec![Category::Clamps], 40),
            Self::new("nutbolts", "Nut & Bolts", vec![Category::Nutbolts], 50),
            Self::new("covering", "Covering", vec![Category::Covering], 60),
        ]
    }
}

/// 已分組的區段
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub key: String,
    pub title: String,
    pub lines: Vec<OutputLine>,
    pub quantity_total: u64,
    pub amount_total: Decimal,
}

/// 報表
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub sections: Vec<RenderedSection>,

    /// 未歸入任何區段的明細
    pub unassigned: Vec<OutputLine>,

    pub grand_total: Decimal,
}

impl Report {
    pub fn section(&self, key: &str) -> Option<&RenderedSection> {
        self.sections.iter().find(|s| s.key == key)
    }
}

/// 報表建構器
pub struct ReportBuilder {
    sections: Vec<ReportSection>,
}

impl ReportBuilder {
    pub fn new(mut sections: Vec<ReportSection>) -> Self {
        sections.sort_by_key(|s| s.priority);
        Self { sections }
    }

    /// 將明細行分入區段；一個類別只歸入第一個符合的區段，空區段省略
    pub fn build(&self, lines: &[OutputLine]) -> Report {
        let mut assigned = vec![false; lines.len()];
        let mut sections = Vec::new();

        for section in &self.sections {
            let mut grouped = Vec::new();
            for (i, line) in lines.iter().enumerate() {
                if !assigned[i] && section.categories.contains(&line.category) {
                    assigned[i] = true;
                    grouped.push(line.clone());
                }
            }

            if grouped.is_empty() {
                continue;
            }

            sections.push(RenderedSection {
                key: section.key.clone(),
                title: section.title.clone(),
                quantity_total: grouped.iter().map(|l| l.quantity).sum(),
                amount_total: grouped.iter().map(|l| l.total).sum(),
                lines: grouped,
            });
        }

        let unassigned: Vec<OutputLine> = lines
            .iter()
            .zip(assigned)
            .filter(|(_, done)| !done)
            .map(|(line, _)| line.clone())
            .collect();

        let grand_total = sections.iter().map(|s| s.amount_total).sum::<Decimal>()
            + unassigned.iter().map(|l| l.total).sum::<Decimal>();

        tracing::debug!("報表 {} 個區段，未歸類 {} 行", sections.len(), unassigned.len());

        Report {
            sections,
            unassigned,
            grand_total,
        }
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(ReportSection::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(category: Category, quantity: u64, price: i64) -> OutputLine {
        OutputLine::new("GH-001", category, "x", "x", "50mm", quantity, Decimal::from(price))
    }

    #[test]
    fn test_groups_by_category_in_priority_order() {
        let lines = vec![
            line(Category::Clamps, 10, 2),
            line(Category::Profiles, 3, 5),
            line(Category::Clamps, 4, 1),
        ];
        let report = ReportBuilder::default().build(&lines);

        let keys: Vec<_> = report.sections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["profiles", "clamps"]);

        let clamps = report.section("clamps").unwrap();
        assert_eq!(clamps.lines.len(), 2);
        assert_eq!(clamps.quantity_total, 14);
        assert_eq!(clamps.amount_total, Decimal::from(24));
        assert_eq!(report.grand_total, Decimal::from(39));
    }

    #[test]
    fn test_unlisted_categories_unassigned() {
        let builder = ReportBuilder::new(vec![ReportSection::new(
            "hardware",
            "Hardware",
            vec![Category::Clamps, Category::Nutbolts],
            1,
        )]);
        let lines = vec![
            line(Category::Nutbolts, 2, 3),
            line(Category::Wires, 1, 7),
        ];
        let report = builder.build(&lines);

        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.unassigned.len(), 1);
        assert_eq!(report.grand_total, Decimal::from(13));
    }
}
