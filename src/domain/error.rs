//! Error types for the zelect plugin.
//!
//! The select widget itself never fails: unknown selections fall back to the
//! placeholder and missed searches are no-ops. Errors only arise at the edges,
//! while parsing configuration, loading themes, decoding pipe payloads, or
//! writing trace files.

use thiserror::Error;

/// The main error type for zelect operations.
///
/// # Examples
///
/// ```
/// use zelect::ZelectError;
///
/// fn validate() -> Result<(), ZelectError> {
///     Err(ZelectError::Config("options must be a JSON array".to_string()))
/// }
///
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ZelectError {
    /// Plugin configuration is malformed.
    ///
    /// Raised while parsing the Zellij configuration map, for example when the
    /// `options` entry is not a JSON array.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A JSON payload could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for zelect operations.
pub type Result<T> = std::result::Result<T, ZelectError>;
