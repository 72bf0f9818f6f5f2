//! # Greenhouse BOM Store
//!
//! 明細行存儲、髒標記追蹤與重算驅動

pub mod dirty_tracking;
pub mod recompute;
pub mod store;

// Re-export 主要類型
pub use dirty_tracking::DirtyTracker;
pub use recompute::{ProjectInput, RecomputeOutcome, Recomputer};
pub use store::{LineStore, MemoryLineStore};
