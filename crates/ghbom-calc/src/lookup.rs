//! 構件查詢
//!
//! 從已生成的結構構件讀取數量與管徑。查無構件時數量為 0、尺寸為 `None`，從不報錯。

use ghbom_core::ComponentSection::{Asc, Frame, Lower, Truss};
use ghbom_core::{ComponentRecord, ComponentSection};
use std::collections::HashMap;

/// 唯讀構件來源
pub trait ComponentLookup {
    /// 指定區段的全部構件
    fn components(&self, section: ComponentSection) -> &[ComponentRecord];

    /// 名稱完全相符的第一個構件
    fn find(&self, section: ComponentSection, name: &str) -> Option<&ComponentRecord> {
        self.components(section).iter().find(|c| c.name == name)
    }

    fn count(&self, section: ComponentSection, name: &str) -> i64 {
        self.find(section, name).map_or(0, ComponentRecord::count)
    }

    fn size(&self, section: ComponentSection, name: &str) -> Option<String> {
        self.find(section, name).and_then(ComponentRecord::size_label)
    }
}

/// 記憶體構件索引
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex {
    sections: HashMap<ComponentSection, Vec<ComponentRecord>>,
}

impl ComponentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = ComponentRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record);
        }
        index
    }

    pub fn insert(&mut self, record: ComponentRecord) {
        self.sections.entry(record.section).or_default().push(record);
    }

    /// 建構器模式：加入構件
    pub fn with(mut self, record: ComponentRecord) -> Self {
        self.insert(record);
        self
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ComponentLookup for ComponentIndex {
    fn components(&self, section: ComponentSection) -> &[ComponentRecord] {
        self.sections.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// 數量與管徑
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SizedCount {
    pub count: i64,
    pub size: Option<String>,
}

impl SizedCount {
    /// 數量 > 0 且有管徑時回傳 (數量, 尺寸)
    pub fn usable(&self) -> Option<(i64, &str)> {
        match &self.size {
            Some(size) if self.count > 0 => Some((self.count, size.as_str())),
            _ => None,
        }
    }
}

/// 大拱 / 小拱
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchSize {
    Big,
    Small,
}

impl ArchSize {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Big => "Big Arch",
            Self::Small => "Small Arch",
        }
    }
}

/// 結構構件的具名查詢
#[derive(Clone, Copy)]
pub struct StructureView<'a> {
    lookup: &'a dyn ComponentLookup,
}

impl<'a> StructureView<'a> {
    pub fn new(lookup: &'a dyn ComponentLookup) -> Self {
        Self { lookup }
    }

    fn sized(&self, section: ComponentSection, name: &str) -> SizedCount {
        SizedCount {
            count: self.lookup.count(section, name),
            size: self.lookup.size(section, name),
        }
    }

    // ---- 桁架 ----

    /// 下弦：名稱含 "Bottom Chord"，排除 Female 與 V Support；數量加總，尺寸取第一個有管材者
    pub fn bottom_chord(&self) -> SizedCount {
        let members = self.lookup.components(Truss).iter().filter(|c| {
            c.name.contains("Bottom Chord") && !c.name.contains("Female") && !c.name.contains("V Support")
        });

        let mut data = SizedCount::default();
        for member in members {
            data.count = data.count.saturating_add(member.count());
            if data.size.is_none() {
                data.size = member.size_label();
            }
        }
        data
    }

    pub fn bottom_chord_anchor(&self) -> SizedCount {
        self.sized(Truss, "Bottom Chord Anchor Frame Singular")
    }

    /// V 撐數量；舊資料分成一般與 AF 兩個構件
    pub fn v_support_count(&self) -> i64 {
        if let Some(merged) = self.lookup.find(Truss, "V Support Bottom Chord") {
            return merged.count();
        }
        self.lookup.count(Truss, "V Support Bottom Chord (AF)")
    }

    pub fn arch(&self, arch: ArchSize) -> SizedCount {
        self.sized(Truss, arch.label())
    }

    pub fn big_arch(&self) -> SizedCount {
        self.arch(ArchSize::Big)
    }

    pub fn small_arch(&self) -> SizedCount {
        self.arch(ArchSize::Small)
    }

    pub fn vent_big_support_count(&self) -> i64 {
        self.lookup.count(Truss, "Vent Support for Big Arch")
    }

    pub fn vent_small_support_count(&self) -> i64 {
        self.lookup.count(Truss, "Vent Support for Small Arch")
    }

    pub fn small_arch_support_count(&self) -> i64 {
        self.lookup.count(Truss, "Arch Support Small for Big Arch")
            + self.lookup.count(Truss, "Arch Support Small for Small Arch")
    }

    pub fn big_arch_support_count(&self) -> i64 {
        self.lookup.count(Truss, "Arch Support Big (Big Arch)")
            + self.lookup.count(Truss, "Arch Support Big (Small Arch)")
    }

    pub fn arch_support_straight_middle(&self) -> SizedCount {
        self.sized(Truss, "Arch Support Straight Middle")
    }

    /// 小拱檁條管徑，查無時退回小拱管徑
    pub fn small_arch_purlin_size(&self) -> Option<String> {
        self.lookup
            .components(Truss)
            .iter()
            .find(|c| c.name.contains("Small Arch Purlin") || c.name.contains("Small Purlin"))
            .and_then(ComponentRecord::size_label)
            .or_else(|| self.small_arch().size)
    }

    pub fn arch_middle_purlin_count(&self, arch: ArchSize) -> i64 {
        let name = match arch {
            ArchSize::Big => "Arch Middle Purlin Big Arch",
            ArchSize::Small => "Arch Middle Purlin Small Arch",
        };
        self.lookup.count(Truss, name)
    }

    pub fn gable_purlin_count(&self) -> i64 {
        self.lookup.count(Truss, "Gable Purlin")
    }

    // ---- 框架 ----

    pub fn middle_columns(&self) -> SizedCount {
        self.sized(Frame, "Middle Columns")
    }

    pub fn middle_column_size(&self) -> Option<String> {
        self.lookup.size(Frame, "Middle Columns")
    }

    /// 主柱管徑，查無時退回 AF 主柱
    pub fn main_column_size(&self) -> Option<String> {
        self.lookup
            .size(Frame, "Main Columns")
            .or_else(|| self.lookup.size(Frame, "AF Main Columns"))
    }

    pub fn af_column_size(&self) -> Option<String> {
        self.lookup.size(Frame, "AF Main Columns")
    }

    pub fn thick_column_size(&self) -> Option<String> {
        self.lookup.size(Frame, "Thick Columns")
    }

    /// V 撐 AF 柱管徑：AF 主柱 → 粗柱 → 主柱
    pub fn af_support_column_size(&self) -> Option<String> {
        self.lookup
            .size(Frame, "AF Main Columns")
            .or_else(|| self.lookup.size(Frame, "Thick Columns"))
            .or_else(|| self.lookup.size(Frame, "Main Columns"))
    }

    /// 柱管徑優先序：粗柱 → AF 主柱 → 主柱，全部查無時為 `None`
    pub fn column_pipe_size(&self) -> Option<String> {
        self.lookup
            .size(Frame, "Thick Columns")
            .or_else(|| self.lookup.size(Frame, "AF Main Columns"))
            .or_else(|| self.lookup.size(Frame, "Main Columns"))
    }

    // ---- 側走廊 ----

    pub fn asc_pipe_size(&self) -> Option<String> {
        self.lookup
            .components(Asc)
            .iter()
            .find(|c| c.name.contains("ASC Pipes"))
            .and_then(ComponentRecord::size_label)
    }

    /// 四側支撐管總數
    pub fn asc_support_total(&self) -> i64 {
        self.lookup
            .components(Asc)
            .iter()
            .filter(|c| c.name.contains("ASC Support") || c.name.contains("ASC Pipe Support"))
            .map(ComponentRecord::count)
            .sum()
    }

    // ---- 下部 ----

    pub fn lower_count(&self, name: &str) -> i64 {
        self.lookup.count(Lower, name)
    }
}
