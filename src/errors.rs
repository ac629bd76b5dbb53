use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Domain-specific error set for the slot picker.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing & Routing --------------------------------------------------
    /// Bad command input (unknown slot, malformed date, etc.)
    #[error("Parse error: {0}")]
    Parse(String),

    /// No command match in the picker flow.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Domain -------------------------------------------------------------
    /// Raised when a window or grouping is requested with a non-positive block size.
    #[error("Invalid block size: {0}. Block size must be a positive integer.")]
    InvalidBlockSize(u32),

    /// Raised on a pick attempt against a cell the availability rules reject.
    #[error("Slot {slot} on {date} is {status}.")]
    SlotNotSelectable {
        date: chrono::NaiveDate,
        slot: crate::core::types::Slot,
        status: crate::core::types::Availability,
    },

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// Generic domain error when a message should bubble without a new variant.
    #[error("{0}")]
    Domain(String),

    /// IO passthrough (read/write files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config JSON decode/encode, etc.)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    /// Helper for unknown command.
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
}

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
/// Useful when extracting required command arguments.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
