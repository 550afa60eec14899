use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures observed by the session runtime.
///
/// None of these reach the public session state; `connect` converts them into a transition back
/// to disconnected and logs them.
pub enum SessionError {
    /// No connector variant is registered for the requested `connectorType`.
    #[error("unknown connector type `{0}`")]
    UnknownConnectorType(String),
    /// The connector could not be constructed or its `init()` failed.
    #[error("connector `{connector_type}` failed: {message}")]
    ConnectorRejected {
        /// Registry key of the failing connector.
        connector_type: String,
        /// Backend-supplied failure description.
        message: String,
    },
    /// The storage backend rejected a read, write, or delete.
    #[error("connector config storage failed: {0}")]
    Storage(String),
    /// The persisted connector config could not be parsed.
    #[error("persisted connector config is corrupt: {0}")]
    CorruptConfig(String),
}
