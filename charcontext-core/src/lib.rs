pub mod types;
pub mod error;
pub mod context;
pub mod scan;
pub mod inventory;

pub use types::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use context::{extract, ContextExtractor, MatchContext, DEFAULT_CONTEXT_WIDTH};
pub use scan::{MatchScanner, Normalization, ScanMode, ScanOptions};
pub use inventory::{Inventory, InventoryEntry};
