//! 引擎配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::line::Category;
use crate::Result;

/// 夾具計算引擎配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 輸出明細行的類別
    pub category: Category,

    /// 查無單價時使用的單價
    pub default_unit_price: Decimal,

    /// 檁條類夾具是否保留用途標籤（獨立成行）
    /// - true: "Full Clamp (Big Arch Purlin)" 與 "Full Clamp" 各自一行（預設）
    /// - false: 標籤去除後合併
    pub separate_tagged_lines: bool,

    /// 是否計算拱中檁條夾具
    pub include_arch_middle_purlin: bool,

    /// 是否計算側走廊支撐管夾具
    pub include_asc_support_pipe: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            category: Category::Clamps,
            default_unit_price: Decimal::ZERO,
            separate_tagged_lines: true,
            include_arch_middle_purlin: true,
            include_asc_support_pipe: true,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 建構器模式：設置預設單價
    pub fn with_default_unit_price(mut self, price: Decimal) -> Self {
        self.default_unit_price = price;
        self
    }

    /// 建構器模式：設置是否保留用途標籤
    pub fn with_separate_tagged_lines(mut self, separate: bool) -> Self {
        self.separate_tagged_lines = separate;
        self
    }

    /// 建構器模式：設置是否計算拱中檁條
    pub fn with_arch_middle_purlin(mut self, enabled: bool) -> Self {
        self.include_arch_middle_purlin = enabled;
        self
    }

    /// 建構器模式：設置是否計算側走廊支撐管
    pub fn with_asc_support_pipe(mut self, enabled: bool) -> Self {
        self.include_asc_support_pipe = enabled;
        self
    }
}
