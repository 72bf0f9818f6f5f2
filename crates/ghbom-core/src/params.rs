//! 結構參數模型
//!
//! 一次計算期間不可變。由框架、桁架、夾具、側走廊四個子記錄組合而成，
//! 夾具與側走廊為可選能力（`None` 表示對應模組未安裝）。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{GhError, Result, MAX_COUNT};

/// 粗柱配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThickColumn {
    /// 無粗柱
    #[default]
    #[serde(rename = "0")]
    None,
    /// 四角
    #[serde(rename = "1")]
    FourCorner,
    /// 兩側開間邊
    #[serde(rename = "2")]
    BothBaySide,
    /// 兩側跨度邊
    #[serde(rename = "3")]
    BothSpanSide,
    /// 四邊全部
    #[serde(rename = "4")]
    AllFourSide,
}

impl ThickColumn {
    /// 從選項代碼解析（"0".."4"）
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "0" => Some(Self::None),
            "1" => Some(Self::FourCorner),
            "2" => Some(Self::BothBaySide),
            "3" => Some(Self::BothSpanSide),
            "4" => Some(Self::AllFourSide),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::None => "0",
            Self::FourCorner => "1",
            Self::BothBaySide => "2",
            Self::BothSpanSide => "3",
            Self::AllFourSide => "4",
        }
    }

    /// 顯示名稱
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "0",
            Self::FourCorner => "4 Corners",
            Self::BothBaySide => "Both Bay Side",
            Self::BothSpanSide => "Both Span Side",
            Self::AllFourSide => "All 4 Side",
        }
    }

    /// 開間邊是否全為粗柱（2 / 4）
    pub fn covers_bay_sides(&self) -> bool {
        matches!(self, Self::BothBaySide | Self::AllFourSide)
    }

    /// 跨度邊是否全為粗柱（3 / 4）
    pub fn covers_span_sides(&self) -> bool {
        matches!(self, Self::BothSpanSide | Self::AllFourSide)
    }
}

/// 拱支撐類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchSupportType {
    #[default]
    None,
    #[serde(rename = "w")]
    W,
    #[serde(rename = "m")]
    M,
    #[serde(rename = "arch_2_bottom")]
    ArchToBottom,
    #[serde(rename = "arch_2_straight")]
    ArchToStraight,
}

impl ArchSupportType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "" | "none" => Some(Self::None),
            "w" => Some(Self::W),
            "m" => Some(Self::M),
            "arch_2_bottom" => Some(Self::ArchToBottom),
            "arch_2_straight" => Some(Self::ArchToStraight),
            _ => None,
        }
    }
}

/// 夾具類型（由拱支撐類型推導）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampType {
    #[default]
    None,
    WType,
    MType,
}

/// 下弦夾具類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BottomChordClampType {
    #[default]
    Single,
    Triple,
}

impl BottomChordClampType {
    /// 每支下弦的夾具數
    pub fn multiplier(&self) -> i64 {
        match self {
            Self::Single => 3,
            Self::Triple => 5,
        }
    }
}

/// 檁條第一段夾具
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurlinFirstType {
    FullClamp,
    LJoint,
}

/// 檁條第二段夾具
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurlinSecondType {
    HalfClamp,
    TJoint,
}

/// 天溝支架類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GutterBracketType {
    #[default]
    None,
    FBracket,
    Arch,
}

/// 拱中檁條佈置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArchMiddlePurlinLayout {
    #[default]
    #[serde(rename = "0")]
    None,
    #[serde(rename = "1")]
    FourCorners,
    #[serde(rename = "2")]
    FrontBack,
    #[serde(rename = "3")]
    BothSide,
    #[serde(rename = "4")]
    FourSide,
    #[serde(rename = "5")]
    All,
}

impl ArchMiddlePurlinLayout {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "0" => Some(Self::None),
            "1" => Some(Self::FourCorners),
            "2" => Some(Self::FrontBack),
            "3" => Some(Self::BothSide),
            "4" => Some(Self::FourSide),
            "5" => Some(Self::All),
            _ => None,
        }
    }
}

/// 單一拱型的拱中檁條配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchMiddlePurlinConfig {
    pub layout: ArchMiddlePurlinLayout,
    /// 每處件數
    pub pcs: i64,
}

impl ArchMiddlePurlinConfig {
    pub fn new(layout: ArchMiddlePurlinLayout, pcs: i64) -> Self {
        Self { layout, pcs }
    }

    pub fn is_enabled(&self) -> bool {
        self.layout != ArchMiddlePurlinLayout::None
    }
}

/// 框架配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub no_of_spans: i64,
    pub no_of_bays: i64,
    pub thick_column: ThickColumn,
    /// 錨框線數（AF）
    pub no_anchor_frame_lines: i64,
    /// 每條錨框線的中柱數
    pub no_column_big_frame: i64,
}

impl FrameConfig {
    pub fn new(no_of_spans: i64, no_of_bays: i64) -> Self {
        Self {
            no_of_spans,
            no_of_bays,
            ..Self::default()
        }
    }

    /// 建構器模式：設置粗柱配置
    pub fn with_thick_column(mut self, thick_column: ThickColumn) -> Self {
        self.thick_column = thick_column;
        self
    }

    /// 建構器模式：設置錨框線數
    pub fn with_anchor_frame_lines(mut self, lines: i64) -> Self {
        self.no_anchor_frame_lines = lines;
        self
    }

    /// 建構器模式：設置每條錨框線中柱數
    pub fn with_middle_columns_per_af(mut self, count: i64) -> Self {
        self.no_column_big_frame = count;
        self
    }
}

/// 桁架配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrussConfig {
    pub arch_support_type: ArchSupportType,
    pub is_bottom_chord: bool,
    /// 每框 V 撐數
    pub v_support_bottom_chord_frame: i64,
    /// 錨框線是否也裝 V 撐
    pub v_support_for_af: bool,
    pub gutter_bracket_type: GutterBracketType,
}

impl Default for TrussConfig {
    fn default() -> Self {
        Self {
            arch_support_type: ArchSupportType::None,
            is_bottom_chord: false,
            v_support_bottom_chord_frame: 0,
            v_support_for_af: true,
            gutter_bracket_type: GutterBracketType::None,
        }
    }
}

impl TrussConfig {
    pub fn new(arch_support_type: ArchSupportType) -> Self {
        Self {
            arch_support_type,
            ..Self::default()
        }
    }

    /// 建構器模式：啟用下弦與 V 撐
    pub fn with_bottom_chord(mut self, v_support_per_frame: i64) -> Self {
        self.is_bottom_chord = true;
        self.v_support_bottom_chord_frame = v_support_per_frame;
        self
    }

    /// 建構器模式：設置錨框線 V 撐
    pub fn with_v_support_for_af(mut self, enabled: bool) -> Self {
        self.v_support_for_af = enabled;
        self
    }

    /// 建構器模式：設置天溝支架類型
    pub fn with_gutter_bracket(mut self, bracket: GutterBracketType) -> Self {
        self.gutter_bracket_type = bracket;
        self
    }
}

/// 夾具模組配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClampConfig {
    pub bottom_chord_clamp_type: BottomChordClampType,
    pub big_purlin_first: Option<PurlinFirstType>,
    pub big_purlin_second: Option<PurlinSecondType>,
    pub small_purlin_first: Option<PurlinFirstType>,
    pub small_purlin_second: Option<PurlinSecondType>,
    pub bay_side_border_purlin: i64,
    pub span_side_border_purlin: i64,
    pub arch_middle_purlin_big: ArchMiddlePurlinConfig,
    pub arch_middle_purlin_small: ArchMiddlePurlinConfig,
    pub afx2_internal_cc_lines: i64,
    pub afx3_column_arch_lines: i64,
    pub afx4_column_bottom_lines: i64,
}

impl ClampConfig {
    /// 建構器模式：設置大拱檁條夾具
    pub fn with_big_purlin(mut self, first: PurlinFirstType, second: Option<PurlinSecondType>) -> Self {
        self.big_purlin_first = Some(first);
        self.big_purlin_second = second;
        self
    }

    /// 建構器模式：設置小拱檁條夾具
    pub fn with_small_purlin(mut self, first: PurlinFirstType, second: Option<PurlinSecondType>) -> Self {
        self.small_purlin_first = Some(first);
        self.small_purlin_second = second;
        self
    }

    /// 建構器模式：設置邊檁條數
    pub fn with_border_purlins(mut self, bay_side: i64, span_side: i64) -> Self {
        self.bay_side_border_purlin = bay_side;
        self.span_side_border_purlin = span_side;
        self
    }

    /// 建構器模式：設置下弦夾具類型
    pub fn with_bottom_chord_clamp_type(mut self, clamp_type: BottomChordClampType) -> Self {
        self.bottom_chord_clamp_type = clamp_type;
        self
    }

    /// 建構器模式：設置拱中檁條
    pub fn with_arch_middle_purlins(
        mut self,
        big: ArchMiddlePurlinConfig,
        small: ArchMiddlePurlinConfig,
    ) -> Self {
        self.arch_middle_purlin_big = big;
        self.arch_middle_purlin_small = small;
        self
    }

    /// 建構器模式：設置剪刀撐 AFX 線數
    pub fn with_afx_lines(mut self, afx2: i64, afx3: i64, afx4: i64) -> Self {
        self.afx2_internal_cc_lines = afx2;
        self.afx3_column_arch_lines = afx3;
        self.afx4_column_bottom_lines = afx4;
        self
    }
}

/// 側走廊（ASC）配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorConfig {
    pub width_front_span: f64,
    pub width_back_span: f64,
    pub width_front_bay: f64,
    pub width_back_bay: f64,
    /// 每支曲棍支撐數
    pub support_hockeys: i64,
    pub bay_side_clamp_required: bool,
}

impl CorridorConfig {
    /// 建構器模式：設置四側寬度
    pub fn with_widths(mut self, front_span: f64, back_span: f64, front_bay: f64, back_bay: f64) -> Self {
        self.width_front_span = front_span;
        self.width_back_span = back_span;
        self.width_front_bay = front_bay;
        self.width_back_bay = back_bay;
        self
    }

    /// 建構器模式：設置每支曲棍支撐數
    pub fn with_support_hockeys(mut self, count: i64) -> Self {
        self.support_hockeys = count;
        self
    }

    /// 建構器模式：開間側是否需要夾具（天溝拱支架模式）
    pub fn with_bay_side_clamps(mut self, required: bool) -> Self {
        self.bay_side_clamp_required = required;
        self
    }

    pub fn front_span(&self) -> bool {
        self.width_front_span > 0.0
    }

    pub fn back_span(&self) -> bool {
        self.width_back_span > 0.0
    }

    pub fn front_bay(&self) -> bool {
        self.width_front_bay > 0.0
    }

    pub fn back_bay(&self) -> bool {
        self.width_back_bay > 0.0
    }

    pub fn any_side(&self) -> bool {
        self.front_span() || self.back_span() || self.front_bay() || self.back_bay()
    }
}

/// 結構參數集合
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralParameters {
    pub frame: FrameConfig,
    pub truss: TrussConfig,
    pub clamps: Option<ClampConfig>,
    pub corridors: Option<CorridorConfig>,
}

/// 夾具模組欄位（任一存在即視為模組已安裝）
const CLAMP_FIELDS: &[&str] = &[
    "bottom_chord_clamp_type",
    "big_purlin_clamp_type_first",
    "small_purlin_clamp_type_first",
    "bay_side_border_purlin",
    "span_side_border_purlin",
    "arch_middle_purlin_big_arch",
    "arch_middle_purlin_small_arch",
];

impl StructuralParameters {
    pub fn new(frame: FrameConfig, truss: TrussConfig) -> Self {
        Self {
            frame,
            truss,
            clamps: None,
            corridors: None,
        }
    }

    /// 建構器模式：啟用夾具模組
    pub fn with_clamps(mut self, clamps: ClampConfig) -> Self {
        self.clamps = Some(clamps);
        self
    }

    /// 建構器模式：啟用側走廊
    pub fn with_corridors(mut self, corridors: CorridorConfig) -> Self {
        self.corridors = Some(corridors);
        self
    }

    /// 從 JSON 解析
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 從扁平參數袋建立，可選能力在此一次解析
    pub fn from_bag(bag: &ParameterBag) -> Self {
        let frame = FrameConfig {
            no_of_spans: bag.get_int("no_of_spans", 0),
            no_of_bays: bag.get_int("no_of_bays", 0),
            thick_column: ThickColumn::from_code(&bag.get_code("thick_column", "0"))
                .unwrap_or_default(),
            no_anchor_frame_lines: bag.get_int("no_anchor_frame_lines", 0),
            no_column_big_frame: bag.get_int("no_column_big_frame", 0),
        };

        let truss = TrussConfig {
            arch_support_type: ArchSupportType::from_code(&bag.get_code("arch_support_type", "none"))
                .unwrap_or_default(),
            is_bottom_chord: bag.get_bool("is_bottom_chord", false),
            v_support_bottom_chord_frame: bag.get_int("v_support_bottom_chord_frame", 0),
            v_support_for_af: bag.get_bool("v_support_for_af", true),
            gutter_bracket_type: bag.get("gutter_bracket_type", GutterBracketType::None),
        };

        let clamps = CLAMP_FIELDS
            .iter()
            .any(|field| bag.contains(field))
            .then(|| ClampConfig {
                bottom_chord_clamp_type: bag.get("bottom_chord_clamp_type", BottomChordClampType::Single),
                big_purlin_first: bag.get("big_purlin_clamp_type_first", None),
                big_purlin_second: bag.get("big_purlin_clamp_type_second", None),
                small_purlin_first: bag.get("small_purlin_clamp_type_first", None),
                small_purlin_second: bag.get("small_purlin_clamp_type_second", None),
                bay_side_border_purlin: bag.get_int("bay_side_border_purlin", 0),
                span_side_border_purlin: bag.get_int("span_side_border_purlin", 0),
                arch_middle_purlin_big: ArchMiddlePurlinConfig::new(
                    ArchMiddlePurlinLayout::from_code(&bag.get_code("arch_middle_purlin_big_arch", "0"))
                        .unwrap_or_default(),
                    bag.get_int("arch_middle_purlin_big_arch_pcs", 0),
                ),
                arch_middle_purlin_small: ArchMiddlePurlinConfig::new(
                    ArchMiddlePurlinLayout::from_code(&bag.get_code("arch_middle_purlin_small_arch", "0"))
                        .unwrap_or_default(),
                    bag.get_int("arch_middle_purlin_small_arch_pcs", 0),
                ),
                afx2_internal_cc_lines: bag.get_int("afx2_internal_cc_lines", 0),
                afx3_column_arch_lines: bag.get_int("afx3_column_arch_lines", 0),
                afx4_column_bottom_lines: bag.get_int("afx4_column_bottom_lines", 0),
            });

        let corridors = bag.get_bool("is_side_coridoors", false).then(|| CorridorConfig {
            width_front_span: bag.get_float("width_front_span_coridoor", 0.0),
            width_back_span: bag.get_float("width_back_span_coridoor", 0.0),
            width_front_bay: bag.get_float("width_front_bay_coridoor", 0.0),
            width_back_bay: bag.get_float("width_back_bay_coridoor", 0.0),
            support_hockeys: bag.get_int("support_hockeys", 0),
            bay_side_clamp_required: bag.get_bool("bay_side_clamp_required", false),
        });

        Self {
            frame,
            truss,
            clamps,
            corridors,
        }
    }

    /// 由拱支撐類型推導夾具類型
    pub fn clamp_type(&self) -> ClampType {
        match self.truss.arch_support_type {
            ArchSupportType::W => ClampType::WType,
            ArchSupportType::M => ClampType::MType,
            _ => ClampType::None,
        }
    }

    pub fn is_side_corridors(&self) -> bool {
        self.corridors.is_some()
    }

    pub fn front_span_asc(&self) -> bool {
        self.corridors.as_ref().is_some_and(CorridorConfig::front_span)
    }

    pub fn back_span_asc(&self) -> bool {
        self.corridors.as_ref().is_some_and(CorridorConfig::back_span)
    }

    pub fn front_bay_asc(&self) -> bool {
        self.corridors.as_ref().is_some_and(CorridorConfig::front_bay)
    }

    pub fn back_bay_asc(&self) -> bool {
        self.corridors.as_ref().is_some_and(CorridorConfig::back_bay)
    }

    pub fn bay_side_border_purlin(&self) -> i64 {
        self.clamps.as_ref().map_or(0, |c| c.bay_side_border_purlin)
    }

    pub fn span_side_border_purlin(&self) -> i64 {
        self.clamps.as_ref().map_or(0, |c| c.span_side_border_purlin)
    }

    pub fn support_hockeys(&self) -> i64 {
        self.corridors.as_ref().map_or(0, |c| c.support_hockeys)
    }

    /// 夾具模組未安裝時使用預設配置
    pub fn clamp_config(&self) -> ClampConfig {
        self.clamps.clone().unwrap_or_default()
    }

    /// 配置驗證：選了第一段夾具就必須有第二段
    pub fn validate(&self) -> Result<()> {
        if self.frame.no_of_spans < 0 || self.frame.no_of_bays < 0 {
            return Err(GhError::InvalidParameter(format!(
                "跨數與開間數不可為負: spans={}, bays={}",
                self.frame.no_of_spans, self.frame.no_of_bays
            )));
        }

        let Some(clamps) = &self.clamps else {
            return Ok(());
        };

        if clamps.big_purlin_first.is_some() && clamps.big_purlin_second.is_none() {
            return Err(GhError::InvalidConfiguration(
                "大拱檁條已選第一段夾具，第二段夾具不可為空".to_string(),
            ));
        }

        if clamps.small_purlin_first.is_some() && clamps.small_purlin_second.is_none() {
            return Err(GhError::InvalidConfiguration(
                "小拱檁條已選第一段夾具，第二段夾具不可為空".to_string(),
            ));
        }

        Ok(())
    }

    /// 所有數量欄位截斷至 ±`MAX_COUNT` 的副本
    pub fn bounded(&self) -> Self {
        let bound = |v: i64| v.clamp(-MAX_COUNT, MAX_COUNT);
        let mut params = self.clone();

        let frame = &mut params.frame;
        frame.no_of_spans = bound(frame.no_of_spans);
        frame.no_of_bays = bound(frame.no_of_bays);
        frame.no_anchor_frame_lines = bound(frame.no_anchor_frame_lines);
        frame.no_column_big_frame = bound(frame.no_column_big_frame);

        params.truss.v_support_bottom_chord_frame = bound(params.truss.v_support_bottom_chord_frame);

        if let Some(clamps) = params.clamps.as_mut() {
            clamps.bay_side_border_purlin = bound(clamps.bay_side_border_purlin);
            clamps.span_side_border_purlin = bound(clamps.span_side_border_purlin);
            clamps.arch_middle_purlin_big.pcs = bound(clamps.arch_middle_purlin_big.pcs);
            clamps.arch_middle_purlin_small.pcs = bound(clamps.arch_middle_purlin_small.pcs);
            clamps.afx2_internal_cc_lines = bound(clamps.afx2_internal_cc_lines);
            clamps.afx3_column_arch_lines = bound(clamps.afx3_column_arch_lines);
            clamps.afx4_column_bottom_lines = bound(clamps.afx4_column_bottom_lines);
        }

        if let Some(corridors) = params.corridors.as_mut() {
            corridors.support_hockeys = bound(corridors.support_hockeys);
        }

        params
    }

    /// 夾具類型變更時的預設值
    pub fn apply_clamp_type_defaults(&mut self) {
        let clamp_type = self.clamp_type();
        let Some(clamps) = self.clamps.as_mut() else {
            return;
        };

        match clamp_type {
            ClampType::None => {
                clamps.big_purlin_first = None;
                clamps.big_purlin_second = None;
                clamps.small_purlin_first = None;
                clamps.small_purlin_second = None;
                clamps.bottom_chord_clamp_type = BottomChordClampType::Single;
            }
            ClampType::WType | ClampType::MType => {
                if clamp_type == ClampType::WType {
                    clamps.bottom_chord_clamp_type = BottomChordClampType::Single;
                }
                if clamps.big_purlin_first.is_none() {
                    clamps.big_purlin_first = Some(PurlinFirstType::FullClamp);
                    clamps.big_purlin_second = Some(PurlinSecondType::HalfClamp);
                }
                if clamps.small_purlin_first.is_none() {
                    clamps.small_purlin_first = Some(PurlinFirstType::FullClamp);
                    clamps.small_purlin_second = Some(PurlinSecondType::HalfClamp);
                }
            }
        }

        // 已選第一段而第二段空白時補上半夾
        if clamps.big_purlin_first.is_some() && clamps.big_purlin_second.is_none() {
            clamps.big_purlin_second = Some(PurlinSecondType::HalfClamp);
        }
        if clamps.small_purlin_first.is_some() && clamps.small_purlin_second.is_none() {
            clamps.small_purlin_second = Some(PurlinSecondType::HalfClamp);
        }
    }
}

/// 扁平參數袋
///
/// `get` 永不失敗：欄位缺失或型別不符時回傳預設值。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterBag {
    fields: Map<String, Value>,
}

impl ParameterBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 建構器模式：設置欄位
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|v| !v.is_null())
    }

    /// 取得欄位，缺失或無法反序列化時回傳預設值
    pub fn get<T: DeserializeOwned>(&self, name: &str, default: T) -> T {
        match self.fields.get(name) {
            // 宿主端以 false 表示空選項
            Some(Value::Null) | Some(Value::Bool(false)) | None => default,
            Some(value) => serde_json::from_value(value.clone()).unwrap_or(default),
        }
    }

    /// 整數欄位，接受數字或數字字串（選項欄位常以字串存放）
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.fields.get(name) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
                .map_or(default, |v| v.clamp(-MAX_COUNT, MAX_COUNT)),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_or(default, |v| v.clamp(-MAX_COUNT, MAX_COUNT)),
            _ => default,
        }
    }

    pub fn get_float(&self, name: &str, default: f64) -> f64 {
        match self.fields.get(name) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.fields.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_i64().map_or(default, |v| v != 0),
            _ => default,
        }
    }

    /// 選項代碼，數字也轉成字串
    pub fn get_code(&self, name: &str, default: &str) -> String {
        match self.fields.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => default.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_bag_missing_fields_use_defaults() {
        let bag = ParameterBag::new();
        assert_eq!(bag.get_int("no_of_spans", 0), 0);
        assert!(bag.get_bool("v_support_for_af", true));
        assert_eq!(bag.get("gutter_bracket_type", GutterBracketType::None), GutterBracketType::None);
    }

    #[test]
    fn test_bag_wrong_type_falls_back() {
        let bag = ParameterBag::new()
            .with("no_of_spans", "abc")
            .with("gutter_bracket_type", 42);

        assert_eq!(bag.get_int("no_of_spans", 7), 7);
        assert_eq!(bag.get("gutter_bracket_type", GutterBracketType::Arch), GutterBracketType::Arch);
    }

    #[test]
    fn test_bag_int_is_bounded() {
        let bag = ParameterBag::new()
            .with("no_of_spans", 1e300)
            .with("no_of_bays", i64::MAX)
            .with("support_hockeys", "-99999999999")
            .with("bay_side_border_purlin", 2.9);

        assert_eq!(bag.get_int("no_of_spans", 0), MAX_COUNT);
        assert_eq!(bag.get_int("no_of_bays", 0), MAX_COUNT);
        assert_eq!(bag.get_int("support_hockeys", 0), -MAX_COUNT);
        assert_eq!(bag.get_int("bay_side_border_purlin", 0), 2);
    }

    #[test]
    fn test_bounded_params() {
        let params = StructuralParameters::new(FrameConfig::new(i64::MAX, 5), TrussConfig::default())
            .with_clamps(ClampConfig::default().with_border_purlins(i64::MIN, 1))
            .with_corridors(CorridorConfig::default().with_support_hockeys(i64::MAX));

        let bounded = params.bounded();
        assert_eq!(bounded.frame.no_of_spans, MAX_COUNT);
        assert_eq!(bounded.frame.no_of_bays, 5);
        assert_eq!(bounded.bay_side_border_purlin(), -MAX_COUNT);
        assert_eq!(bounded.span_side_border_purlin(), 1);
        assert_eq!(bounded.support_hockeys(), MAX_COUNT);
    }

    #[rstest]
    #[case("0", ThickColumn::None)]
    #[case("1", ThickColumn::FourCorner)]
    #[case("2", ThickColumn::BothBaySide)]
    #[case("3", ThickColumn::BothSpanSide)]
    #[case("4", ThickColumn::AllFourSide)]
    fn test_thick_column_codes(#[case] code: &str, #[case] expected: ThickColumn) {
        assert_eq!(ThickColumn::from_code(code), Some(expected));
        assert_eq!(expected.code(), code);
    }

    #[test]
    fn test_from_bag_resolves_capabilities() {
        // 無夾具欄位、無側走廊
        let bag = ParameterBag::new().with("no_of_spans", 3).with("no_of_bays", "5");
        let params = StructuralParameters::from_bag(&bag);
        assert_eq!(params.frame.no_of_spans, 3);
        assert_eq!(params.frame.no_of_bays, 5);
        assert!(params.clamps.is_none());
        assert!(params.corridors.is_none());

        // 夾具欄位存在 + 側走廊
        let bag = bag
            .with("bay_side_border_purlin", 1)
            .with("is_side_coridoors", true)
            .with("width_front_span_coridoor", 2.5);
        let params = StructuralParameters::from_bag(&bag);
        assert_eq!(params.bay_side_border_purlin(), 1);
        assert!(params.front_span_asc());
        assert!(!params.back_span_asc());
    }

    #[test]
    fn test_false_means_empty_selection() {
        let bag = ParameterBag::new()
            .with("big_purlin_clamp_type_first", false)
            .with("small_purlin_clamp_type_first", "l_joint")
            .with("small_purlin_clamp_type_second", "t_joint");
        let params = StructuralParameters::from_bag(&bag);
        let clamps = params.clamps.expect("clamp module present");
        assert_eq!(clamps.big_purlin_first, None);
        assert_eq!(clamps.small_purlin_first, Some(PurlinFirstType::LJoint));
        assert_eq!(clamps.small_purlin_second, Some(PurlinSecondType::TJoint));
    }

    #[test]
    fn test_clamp_type_derived_from_arch_support() {
        let mut params = StructuralParameters::default();
        assert_eq!(params.clamp_type(), ClampType::None);

        params.truss.arch_support_type = ArchSupportType::W;
        assert_eq!(params.clamp_type(), ClampType::WType);

        params.truss.arch_support_type = ArchSupportType::ArchToBottom;
        assert_eq!(params.clamp_type(), ClampType::None);
    }

    #[test]
    fn test_validate_requires_second_purlin_type() {
        let params = StructuralParameters::default()
            .with_clamps(ClampConfig::default().with_big_purlin(PurlinFirstType::FullClamp, None));

        assert!(matches!(params.validate(), Err(GhError::InvalidConfiguration(_))));

        let params = StructuralParameters::default().with_clamps(
            ClampConfig::default().with_big_purlin(PurlinFirstType::FullClamp, Some(PurlinSecondType::HalfClamp)),
        );
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_spans_without_clamp_module() {
        let params = StructuralParameters::new(FrameConfig::new(-1, 5), TrussConfig::default());
        assert!(matches!(params.validate(), Err(GhError::InvalidParameter(_))));
    }

    #[test]
    fn test_clamp_type_defaults() {
        let mut params = StructuralParameters::new(FrameConfig::new(3, 5), TrussConfig::new(ArchSupportType::W))
            .with_clamps(ClampConfig::default().with_bottom_chord_clamp_type(BottomChordClampType::Triple));

        params.apply_clamp_type_defaults();
        let clamps = params.clamps.as_ref().expect("clamps");

        // W 型強制單夾，檁條預設全夾/半夾
        assert_eq!(clamps.bottom_chord_clamp_type, BottomChordClampType::Single);
        assert_eq!(clamps.big_purlin_first, Some(PurlinFirstType::FullClamp));
        assert_eq!(clamps.small_purlin_second, Some(PurlinSecondType::HalfClamp));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_json_defaults() {
        let params = StructuralParameters::from_json(r#"{"frame": {"no_of_spans": 4}}"#).unwrap();
        assert_eq!(params.frame.no_of_spans, 4);
        assert!(params.truss.v_support_for_af);
        assert!(params.clamps.is_none());
    }
}
