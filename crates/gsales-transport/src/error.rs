//! Transport error types

use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur while performing a remote call
#[derive(Debug, Error)]
pub enum TransportError {
    /// The remote service reported that the addressed entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The remote service rejected the call (validation, permission, ...)
    #[error("Remote fault{}: {message}", .code.as_deref().map(|c| format!(" [{c}]")).unwrap_or_default())]
    Fault {
        /// Service-specific fault code, if one was reported
        code: Option<String>,
        /// Fault message
        message: String,
    },

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Timeout error
    #[error("Timeout")]
    Timeout,

    /// Request or response could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other failure raised by a transport implementation
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TransportError {
    /// Create a fault without a code.
    pub fn fault(message: impl Into<String>) -> Self {
        Self::Fault {
            code: None,
            message: message.into(),
        }
    }

    /// Create a fault carrying a service-specific code.
    pub fn fault_with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fault {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// Whether this error is the transport's "entity not found" signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
