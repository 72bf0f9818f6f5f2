//! 輸出明細行

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 配件類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Clamps,
    Nutbolts,
    Profiles,
    Covering,
    Brackets,
    Wires,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clamps => "clamps",
            Self::Nutbolts => "nutbolts",
            Self::Profiles => "profiles",
            Self::Covering => "covering",
            Self::Brackets => "brackets",
            Self::Wires => "wires",
        }
    }
}

/// 輸出明細行（每個 (種類, 尺寸) 一行）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputLine {
    pub id: Uuid,
    pub project_id: String,
    pub category: Category,

    /// 顯示名稱，例如 "Full Clamp - 50mm"
    pub name: String,

    /// 價格查詢用的基礎種類，例如 "Full Clamp"
    pub kind: String,

    pub size: String,
    pub quantity: u64,
    pub unit_price: Decimal,
    pub total: Decimal,

    /// 是否由引擎自動計算
    pub is_calculated: bool,

    pub description: String,
    pub calculated_at: DateTime<Utc>,
}

impl OutputLine {
    /// 創建新的明細行，總價 = 數量 × 單價
    pub fn new(
        project_id: impl Into<String>,
        category: Category,
        name: impl Into<String>,
        kind: impl Into<String>,
        size: impl Into<String>,
        quantity: u64,
        unit_price: Decimal,
    ) -> Self {
        let kind = kind.into();
        Self {
            id: Uuid::new_v4(),
            project_id: project_id.into(),
            category,
            name: name.into(),
            description: format!("Auto-calculated {kind}"),
            kind,
            size: size.into(),
            quantity,
            unit_price,
            total: Decimal::from(quantity) * unit_price,
            is_calculated: true,
            calculated_at: Utc::now(),
        }
    }

    /// 建構器模式：設置說明
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
