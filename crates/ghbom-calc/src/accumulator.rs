//! 夾具累加器
//!
//! (種類, 尺寸) → 數量。只增不減，數量恆為正。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 夾具種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClampKind {
    FullClamp,
    HalfClamp,
    LJoint,
    TJoint,
}

impl ClampKind {
    /// 主檔中的名稱
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullClamp => "Full Clamp",
            Self::HalfClamp => "Half Clamp",
            Self::LJoint => "L Joint",
            Self::TJoint => "T Joint",
        }
    }
}

impl fmt::Display for ClampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 用途標籤：帶標籤的夾具不與同種類同尺寸的一般夾具合併
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClampPurpose {
    BigArchPurlin,
    SmallArchPurlin,
    ArchMiddlePurlinBigArch,
    ArchMiddlePurlinSmallArch,
}

impl ClampPurpose {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BigArchPurlin => "Big Arch Purlin",
            Self::SmallArchPurlin => "Small Arch Purlin",
            Self::ArchMiddlePurlinBigArch => "Arch Middle Purlin Big Arch",
            Self::ArchMiddlePurlinSmallArch => "Arch Middle Purlin Small Arch",
        }
    }
}

/// 累加器鍵
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClampKey {
    pub kind: ClampKind,
    pub purpose: Option<ClampPurpose>,
    pub size: String,
}

impl ClampKey {
    pub fn new(kind: ClampKind, size: impl Into<String>) -> Self {
        Self {
            kind,
            purpose: None,
            size: size.into(),
        }
    }

    pub fn tagged(kind: ClampKind, purpose: ClampPurpose, size: impl Into<String>) -> Self {
        Self {
            kind,
            purpose: Some(purpose),
            size: size.into(),
        }
    }

    /// 識別名稱，例如 "Full Clamp (Big Arch Purlin)"
    pub fn identifier(&self) -> String {
        match self.purpose {
            Some(purpose) => format!("{} ({})", self.kind.label(), purpose.label()),
            None => self.kind.label().to_string(),
        }
    }

    /// 顯示名稱，例如 "Full Clamp - 50mm"
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.identifier(), self.size)
    }

    pub fn untagged(&self) -> Self {
        Self::new(self.kind, self.size.clone())
    }
}

impl fmt::Display for ClampKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// 夾具累加器
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClampAccumulator {
    entries: BTreeMap<ClampKey, u64>,
}

impl ClampAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加一般夾具；數量 ≤ 0 時不動作
    pub fn add(&mut self, kind: ClampKind, size: &str, quantity: i64) {
        self.add_key(ClampKey::new(kind, size), quantity);
    }

    /// 累加帶用途標籤的夾具
    pub fn add_tagged(&mut self, kind: ClampKind, purpose: ClampPurpose, size: &str, quantity: i64) {
        self.add_key(ClampKey::tagged(kind, purpose, size), quantity);
    }

    pub fn add_key(&mut self, key: ClampKey, quantity: i64) {
        if quantity <= 0 {
            return;
        }
        *self.entries.entry(key).or_insert(0) += quantity as u64;
    }

    /// 以倍數併入另一累加器；倍數為 0 時不動作
    pub fn merge_scaled(&mut self, other: &ClampAccumulator, multiplier: u64) {
        if multiplier == 0 {
            return;
        }
        for (key, quantity) in &other.entries {
            *self.entries.entry(key.clone()).or_insert(0) += quantity * multiplier;
        }
    }

    pub fn merge(&mut self, other: &ClampAccumulator) {
        self.merge_scaled(other, 1);
    }

    /// 一般夾具數量（不含帶標籤者）
    pub fn get(&self, kind: ClampKind, size: &str) -> u64 {
        self.get_key(&ClampKey::new(kind, size))
    }

    pub fn get_tagged(&self, kind: ClampKind, purpose: ClampPurpose, size: &str) -> u64 {
        self.get_key(&ClampKey::tagged(kind, purpose, size))
    }

    pub fn get_key(&self, key: &ClampKey) -> u64 {
        self.entries.get(key).copied().unwrap_or(0)
    }

    /// 依鍵排序迭代
    pub fn iter(&self) -> impl Iterator<Item = (&ClampKey, u64)> {
        self.entries.iter().map(|(key, quantity)| (key, *quantity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_quantity(&self) -> u64 {
        self.entries.values().sum()
    }

    /// 去除用途標籤並合併
    pub fn without_tags(&self) -> Self {
        let mut merged = Self::new();
        for (key, quantity) in &self.entries {
            *merged.entries.entry(key.untagged()).or_insert(0) += quantity;
        }
        merged
    }
}
