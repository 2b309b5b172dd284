/// Unified error types for Invoker
use thiserror::Error;

/// Main error type for identity resolution
#[derive(Error, Debug)]
pub enum InvokerError {
    /// Account database lookup errors
    #[error("User lookup failed: {0}")]
    Lookup(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Environment(String),
}

/// Result type alias for identity operations
pub type InvokerResult<T> = Result<T, InvokerError>;
