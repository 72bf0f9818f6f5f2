//! # Greenhouse BOM
//!
//! 溫室結構夾具數量推導引擎

pub use ghbom_calc as calc;
pub use ghbom_core as model;
pub use ghbom_store as store;

pub use ghbom_calc::{ClampCalculator, ClampResult, ComponentIndex, Materializer};
pub use ghbom_core::{EngineConfig, GhError, OutputLine, RateTable, Result, StructuralParameters};
pub use ghbom_store::{DirtyTracker, MemoryLineStore, ProjectInput, Recomputer};
