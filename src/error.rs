//! Error types for wildcard unrolling.

use thiserror::Error;

/// Errors that can occur while parsing or unrolling a wildcard mask.
#[derive(Debug, Error)]
pub enum UnrollError {
    #[error("Invalid {field}: '{value}' is not a dotted-quad IPv4 address")]
    Parse { field: String, value: String },

    #[error("Line {line}: expected an address and a wildcard mask, got '{text}'")]
    ParseLine { line: usize, text: String },

    #[error("Wildcard width {width} bits exceeds limit of {max} bits ({count} results)")]
    WidthExceeded { width: u32, max: u32, count: u64 },

    #[error("Invalid bit range {start}-{end} (must satisfy 1 <= start <= end <= 32)")]
    InvalidRange { start: u8, end: u8 },

    #[error("Network length is too long: /{0}")]
    InvalidPrefix(u8),

    #[error("Invalid configuration {key}={value}")]
    Config { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UnrollError>;
