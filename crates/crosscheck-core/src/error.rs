//! Error types for engine operations.

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested platform name matched no known platform.
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
}
