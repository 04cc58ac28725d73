use tabdeck_common::TabdeckError;

#[derive(Debug, thiserror::Error)]
pub enum DevToolsError {
    #[error("target discovery failed: {0}")]
    Discovery(String),

    #[error("no debuggable page target for '{0}'")]
    NoTarget(String),

    #[error("protocol version mismatch: expected {expected}, endpoint speaks {actual}")]
    VersionMismatch { expected: String, actual: String },

    #[error("websocket connect failed: {0}")]
    Connect(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("debug channel closed")]
    Closed,

    #[error("body decode failed: {0}")]
    Decode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<DevToolsError> for TabdeckError {
    fn from(err: DevToolsError) -> Self {
        TabdeckError::DevTools(err.to_string())
    }
}
