//! Error types for the gsales SDK
//!
//! Local misuse (an unusable entity reference) is told apart from remote
//! failures, and a remote "not found" is told apart from every other remote
//! failure. Nothing finer is decoded: transport errors are carried unchanged
//! as the error source.

use gsales_transport::TransportError;
use thiserror::Error;

/// Result type alias for operations that can fail with a gsales SDK error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the gsales SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// An entity reference did not denote an identifier.
    #[error("Invalid entity reference: {0}")]
    InvalidReferenceKind(String),

    /// The remote service has no entity for the given identifier.
    #[error("Entity not found ({procedure}){}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    NotFound {
        /// Remote procedure that reported the absence
        procedure: String,
        /// Message from the transport, if any
        message: Option<String>,
    },

    /// Any other transport or remote-service failure.
    #[error("Remote call {procedure} failed: {source}")]
    Remote {
        /// Remote procedure that failed
        procedure: String,
        /// Transport error, unmodified
        #[source]
        source: TransportError,
    },

    /// The result of a remote call did not have the expected shape.
    #[error("Failed to decode {procedure} response: {source}")]
    Decode {
        /// Remote procedure whose result could not be decoded
        procedure: String,
        /// Decoding error
        #[source]
        source: serde_json::Error,
    },

    /// A status-like result was neither a boolean nor an integer.
    #[error("Unexpected {procedure} response: {message}")]
    UnexpectedResponse {
        /// Remote procedure
        procedure: String,
        /// What was received
        message: String,
    },

    /// Request data could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Configuration value could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Map a transport failure of `procedure` onto the SDK taxonomy.
    pub fn from_transport(procedure: impl Into<String>, error: TransportError) -> Self {
        let procedure = procedure.into();
        match error {
            TransportError::NotFound(message) => Error::NotFound {
                procedure,
                message: Some(message).filter(|m| !m.is_empty()),
            },
            source => Error::Remote { procedure, source },
        }
    }

    /// Whether the remote service reported the entity as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Remote procedure involved, for errors raised by a remote call.
    pub fn procedure(&self) -> Option<&str> {
        match self {
            Error::NotFound { procedure, .. }
            | Error::Remote { procedure, .. }
            | Error::Decode { procedure, .. }
            | Error::UnexpectedResponse { procedure, .. } => Some(procedure),
            _ => None,
        }
    }
}
