//! 配件單價主檔

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::line::Category;

/// 單價條目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub name: String,
    pub category: Category,
    pub size: String,
    pub unit_price: Decimal,

    /// 停用的條目不參與查價
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl RateEntry {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        size: impl Into<String>,
        unit_price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            size: size.into(),
            unit_price,
            active: true,
        }
    }

    /// 建構器模式：停用
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// 單價表，以 (名稱, 類別, 尺寸) 查詢
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    entries: HashMap<(String, Category, String), Decimal>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 從條目建立，同鍵以先出現的有效條目為準
    pub fn from_entries(entries: impl IntoIterator<Item = RateEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    pub fn insert(&mut self, entry: RateEntry) {
        if !entry.active {
            return;
        }
        self.entries
            .entry((entry.name, entry.category, entry.size))
            .or_insert(entry.unit_price);
    }

    pub fn lookup(&self, name: &str, category: Category, size: &str) -> Option<Decimal> {
        self.entries
            .get(&(name.to_string(), category, size.to_string()))
            .copied()
    }

    /// 查無單價時回傳預設值
    pub fn unit_price_or(&self, name: &str, category: Category, size: &str, default: Decimal) -> Decimal {
        self.lookup(name, category, size).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
