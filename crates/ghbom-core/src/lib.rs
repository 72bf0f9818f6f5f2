//! # Greenhouse BOM Core
//!
//! 核心資料模型與類型定義

pub mod component;
pub mod config;
pub mod line;
pub mod params;
pub mod rate;

// Re-export 主要類型
pub use component::{ComponentRecord, ComponentSection, PipeSpec, MAX_COUNT};
pub use config::EngineConfig;
pub use line::{Category, OutputLine};
pub use params::{
    ArchMiddlePurlinConfig, ArchMiddlePurlinLayout, ArchSupportType, BottomChordClampType,
    ClampConfig, ClampType, CorridorConfig, FrameConfig, GutterBracketType, ParameterBag,
    PurlinFirstType, PurlinSecondType, StructuralParameters, ThickColumn, TrussConfig,
};
pub use rate::{RateEntry, RateTable};

/// 溫室 BOM 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum GhError {
    #[error("配置無效: {0}")]
    InvalidConfiguration(String),

    #[error("參數錯誤: {0}")]
    InvalidParameter(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("存儲錯誤: {0}")]
    Store(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GhError>;
