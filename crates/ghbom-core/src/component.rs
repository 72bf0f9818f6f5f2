//! 結構構件模型

use serde::{Deserialize, Serialize};

/// 單一數量欄位的上限；超出者截斷，計算中的乘積不會溢位
pub const MAX_COUNT: i64 = 1_000_000;

/// 構件所屬區段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentSection {
    /// 框架（柱）
    Frame,
    /// 桁架（拱、下弦、支撐）
    Truss,
    /// 側走廊
    Asc,
    /// 下部（剪刀撐）
    Lower,
}

/// 管材規格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeSpec {
    /// 管材類型名稱
    pub pipe_type: String,

    /// 管徑（毫米）
    pub size_in_mm: f64,
}

impl PipeSpec {
    pub fn new(pipe_type: impl Into<String>, size_in_mm: f64) -> Self {
        Self {
            pipe_type: pipe_type.into(),
            size_in_mm,
        }
    }

    /// 尺寸字串，例如 "50mm"
    pub fn size_label(&self) -> String {
        format!("{:.0}mm", self.size_in_mm)
    }
}

/// 已生成的結構構件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub name: String,
    pub section: ComponentSection,

    /// 數量
    pub nos: i64,

    /// 指定管材（可能未指定）
    #[serde(default)]
    pub pipe: Option<PipeSpec>,

    /// 長度（米）
    #[serde(default)]
    pub length: f64,
}

impl ComponentRecord {
    pub fn new(section: ComponentSection, name: impl Into<String>, nos: i64) -> Self {
        Self {
            name: name.into(),
            section,
            nos,
            pipe: None,
            length: 0.0,
        }
    }

    /// 建構器模式：指定管材
    pub fn with_pipe(mut self, pipe: PipeSpec) -> Self {
        self.pipe = Some(pipe);
        self
    }

    /// 建構器模式：指定管徑（預設鍍鋅管）
    pub fn with_size_mm(self, size_in_mm: f64) -> Self {
        self.with_pipe(PipeSpec::new("GI", size_in_mm))
    }

    /// 建構器模式：設置長度
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    pub fn size_label(&self) -> Option<String> {
        self.pipe.as_ref().map(PipeSpec::size_label)
    }

    /// 截斷至 ±`MAX_COUNT` 的數量
    pub fn count(&self) -> i64 {
        self.nos.clamp(-MAX_COUNT, MAX_COUNT)
    }
}
