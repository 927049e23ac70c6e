//! Error types for slot parsing and statistics loading.

use thiserror::Error;

/// Errors raised when turning external identifiers into slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// The identifier does not name any slot.
    #[error("unknown slot '{0}'")]
    UnknownSlot(String),

    /// The slot exists but cannot be worn as a target (only `head`).
    #[error("slot '{0}' cannot be used as a target slot")]
    NotATarget(String),
}

/// Errors raised while reading a model statistics document.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Failed to read the statistics file.
    #[error("failed to read model statistics: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a valid statistics object.
    #[error("failed to parse model statistics: {0}")]
    Parse(#[from] serde_json::Error),
}
